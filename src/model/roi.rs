//! ROI model: inputs to annual savings and break-even days

use crate::config::ModelConfig;
use super::inputs::CalculationInputs;
use super::results::{CalculationResults, MonthlyCosts, RoiDays};

const MINUTES_PER_HOUR: f64 = 60.0;

/// Compute the ROI metrics with the default calendar constants
pub fn compute(inputs: &CalculationInputs) -> CalculationResults {
    compute_with(inputs, &ModelConfig::default())
}

/// Compute the ROI metrics with explicit calendar constants
///
/// Total over finite non-negative inputs. Non-positive savings, or savings so
/// small the payback overflows, yield [`RoiDays::NotApplicable`].
pub fn compute_with(inputs: &CalculationInputs, config: &ModelConfig) -> CalculationResults {
    let annual_docs = inputs.monthly_volume * config.months_per_year;

    let annual_hours_manual = annual_docs * inputs.hours_per_doc_manual;
    let annual_hours_auto = annual_docs * (inputs.minutes_per_doc_auto / MINUTES_PER_HOUR);
    let hours_saved_annually = annual_hours_manual - annual_hours_auto;

    let annual_cost_manual = annual_hours_manual * inputs.hourly_rate;
    let annual_cost_auto = annual_hours_auto * inputs.hourly_rate;
    let annual_savings = annual_cost_manual - annual_cost_auto;

    let daily_savings = annual_savings / config.working_days_per_year;
    let roi_days = if daily_savings > 0.0 {
        let days = inputs.setup_cost / daily_savings;
        if days.is_finite() {
            RoiDays::Days(days)
        } else {
            RoiDays::NotApplicable
        }
    } else {
        RoiDays::NotApplicable
    };

    CalculationResults {
        annual_savings,
        monthly_savings: annual_savings / config.months_per_year,
        hours_saved_annually,
        opportunity_cost: annual_savings,
        roi_days,
    }
}

/// Monthly cost of each regime, fed to the series builder
pub fn monthly_costs(inputs: &CalculationInputs) -> MonthlyCosts {
    MonthlyCosts {
        manual: inputs.monthly_volume * inputs.hours_per_doc_manual * inputs.hourly_rate,
        automated: inputs.monthly_volume
            * (inputs.minutes_per_doc_auto / MINUTES_PER_HOUR)
            * inputs.hourly_rate,
    }
}

//! Scenario runner for batch evaluation
//!
//! Holds one set of calendar constants and evaluates many input sets against
//! it. Every evaluation is independent, so batches run in parallel.

use rayon::prelude::*;

use crate::calculation::{calculate_with, Calculation};
use crate::config::ModelConfig;
use crate::model::{CalculationInputs, InputField};

/// Batch evaluator for input variations
///
/// # Example
/// ```
/// use legalflow_roi::{CalculationInputs, InputField, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let sweep = runner.sweep(&CalculationInputs::default(), InputField::HourlyRate, &[300.0, 450.0, 600.0]);
/// assert_eq!(sweep.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: ModelConfig,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ModelConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, inputs: &CalculationInputs) -> Calculation {
        calculate_with(inputs, &self.config)
    }

    /// Evaluate many input sets, preserving their order
    pub fn run_batch(&self, inputs: &[CalculationInputs]) -> Vec<Calculation> {
        inputs
            .par_iter()
            .map(|i| calculate_with(i, &self.config))
            .collect()
    }

    /// Vary one field over `values`, holding the rest of `base` fixed
    pub fn sweep(&self, base: &CalculationInputs, field: InputField, values: &[f64]) -> Vec<Calculation> {
        let variants: Vec<CalculationInputs> = values
            .iter()
            .map(|&v| {
                let mut inputs = *base;
                inputs.set(field, v);
                inputs
            })
            .collect();
        self.run_batch(&variants)
    }

    /// Slider positions from `min` to `max` inclusive for a field
    pub fn slider_values(field: InputField) -> Vec<f64> {
        let (min, max) = field.bounds();
        let step = field.step();
        let count = ((max - min) / step).round() as usize;
        (0..=count).map(|i| min + step * i as f64).collect()
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RoiDays;

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let inputs: Vec<_> = [200.0, 450.0, 1500.0]
            .iter()
            .map(|&rate| CalculationInputs {
                hourly_rate: rate,
                ..Default::default()
            })
            .collect();

        let results = runner.run_batch(&inputs);
        assert_eq!(results.len(), 3);
        for (calc, input) in results.iter().zip(&inputs) {
            assert_eq!(calc.inputs, *input);
        }

        // Higher rate means more savings and a faster payback
        assert!(results[2].results.annual_savings > results[0].results.annual_savings);
        assert!(results[2].results.roi_days.days().unwrap() < results[0].results.roi_days.days().unwrap());
    }

    #[test]
    fn test_sweep_crossing_into_negative_savings() {
        let runner = ScenarioRunner::new();
        let base = CalculationInputs {
            hours_per_doc_manual: 0.5,
            ..Default::default()
        };
        let sweep = runner.sweep(&base, InputField::MinutesPerDocAuto, &[15.0, 30.0, 45.0]);

        assert!(sweep[0].results.roi_days.is_applicable());
        assert_eq!(sweep[1].results.roi_days, RoiDays::NotApplicable);
        assert_eq!(sweep[2].results.roi_days, RoiDays::NotApplicable);
        assert!(sweep[2].results.hours_saved_annually < 0.0);
    }

    #[test]
    fn test_slider_values() {
        let values = ScenarioRunner::slider_values(InputField::HoursPerDocManual);
        assert_eq!(values.len(), 10);
        assert_eq!(values[0], 0.5);
        assert_eq!(*values.last().unwrap(), 5.0);

        let values = ScenarioRunner::slider_values(InputField::HourlyRate);
        assert_eq!(values.len(), 53);
    }

    #[test]
    fn test_custom_horizon_flows_through() {
        let runner = ScenarioRunner::with_config(ModelConfig {
            horizon_months: 24,
            ..Default::default()
        });
        let calc = runner.run(&CalculationInputs::default());
        assert_eq!(calc.projection.points.len(), 25);
    }
}

//! Cumulative cost series builder

use crate::config::PROJECTION_HORIZON_MONTHS;
use super::points::{BreakEvenPoint, Projection, ProjectionPoint};

/// Build the month 0..=12 series and locate the break-even point
pub fn build_series(monthly_manual_cost: f64, monthly_automated_cost: f64, setup_cost: f64) -> Projection {
    build_series_with(
        monthly_manual_cost,
        monthly_automated_cost,
        setup_cost,
        PROJECTION_HORIZON_MONTHS,
    )
}

/// Build the series for months 0 through `horizon_months` inclusive
pub fn build_series_with(
    monthly_manual_cost: f64,
    monthly_automated_cost: f64,
    setup_cost: f64,
    horizon_months: u32,
) -> Projection {
    let points = (0..=horizon_months)
        .map(|month| ProjectionPoint::new(month, monthly_manual_cost, monthly_automated_cost, setup_cost))
        .collect();

    let break_even = break_even_point(monthly_manual_cost, monthly_automated_cost, setup_cost)
        .filter(|p| p.month > 0.0 && p.month <= horizon_months as f64);

    Projection { points, break_even }
}

/// Crossover of the two cost lines regardless of the plotted window
///
/// `None` when the monthly savings rate is zero or negative (the lines never
/// cross going forward) or so small that the crossover month overflows.
pub fn break_even_point(
    monthly_manual_cost: f64,
    monthly_automated_cost: f64,
    setup_cost: f64,
) -> Option<BreakEvenPoint> {
    let monthly_savings_rate = monthly_manual_cost - monthly_automated_cost;
    if monthly_savings_rate <= 0.0 {
        return None;
    }

    let month = setup_cost / monthly_savings_rate;
    let cost = monthly_manual_cost * month;
    if !month.is_finite() || !cost.is_finite() {
        return None;
    }

    Some(BreakEvenPoint {
        month,
        cost,
    })
}

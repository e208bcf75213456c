//! Output structures for the cumulative cost series

use serde::{Deserialize, Serialize};

/// Cumulative cost of both regimes at one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    /// Month index, 0 is the start
    pub month: u32,

    /// `monthly_manual_cost * month`
    pub manual_cumulative: f64,

    /// `setup_cost + monthly_automated_cost * month`
    pub automated_cumulative: f64,
}

/// Which side of the crossover a point sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Automation has not yet recovered its setup cost
    Investment,
    /// Cumulative automated cost is below manual cost
    NetBenefit,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Investment => "Investment Phase:",
            Phase::NetBenefit => "Net Benefit:",
        }
    }
}

impl ProjectionPoint {
    pub fn new(month: u32, monthly_manual_cost: f64, monthly_automated_cost: f64, setup_cost: f64) -> Self {
        let m = month as f64;
        Self {
            month,
            manual_cumulative: monthly_manual_cost * m,
            automated_cumulative: setup_cost + monthly_automated_cost * m,
        }
    }

    /// Manual minus automated cumulative cost
    pub fn net_savings(&self) -> f64 {
        self.manual_cumulative - self.automated_cumulative
    }

    pub fn phase(&self) -> Phase {
        if self.net_savings() > 0.0 {
            Phase::NetBenefit
        } else {
            Phase::Investment
        }
    }

    /// Tooltip name: "Start" for month 0, "Month N" afterwards
    pub fn label(&self) -> String {
        if self.month == 0 {
            "Start".to_string()
        } else {
            format!("Month {}", self.month)
        }
    }
}

/// Crossover of the two cumulative cost lines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenPoint {
    /// Fractional month, never rounded
    pub month: f64,

    /// Cumulative cost at the crossover
    pub cost: f64,
}

/// Complete series output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// One point per month, ascending from 0 through the horizon
    pub points: Vec<ProjectionPoint>,

    /// Present only when the crossover falls inside the plotted window
    pub break_even: Option<BreakEvenPoint>,
}

impl Projection {
    /// Last point of the series (month == horizon)
    pub fn final_point(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    pub fn horizon_months(&self) -> u32 {
        self.final_point().map(|p| p.month).unwrap_or(0)
    }

    /// Net savings at the end of the window
    pub fn net_at_horizon(&self) -> f64 {
        self.final_point().map(|p| p.net_savings()).unwrap_or(0.0)
    }

    /// First whole month whose point shows a net benefit
    pub fn first_net_benefit_month(&self) -> Option<u32> {
        self.points
            .iter()
            .find(|p| p.phase() == Phase::NetBenefit)
            .map(|p| p.month)
    }
}

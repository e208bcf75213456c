//! One-shot evaluation of the model and the series for a set of inputs

use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;
use crate::model::{self, CalculationInputs, CalculationResults};
use crate::projection::{self, Projection};

/// Everything the cards and the chart need for one input state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub inputs: CalculationInputs,
    pub results: CalculationResults,
    pub projection: Projection,
}

/// Series for the chart, derived from the same inputs as the ROI model
pub fn project(inputs: &CalculationInputs) -> Projection {
    project_with(inputs, &ModelConfig::default())
}

pub fn project_with(inputs: &CalculationInputs, config: &ModelConfig) -> Projection {
    let costs = model::monthly_costs(inputs);
    projection::build_series_with(costs.manual, costs.automated, inputs.setup_cost, config.horizon_months)
}

/// Recompute results and series from scratch
pub fn calculate(inputs: &CalculationInputs) -> Calculation {
    calculate_with(inputs, &ModelConfig::default())
}

pub fn calculate_with(inputs: &CalculationInputs, config: &ModelConfig) -> Calculation {
    Calculation {
        inputs: *inputs,
        results: model::compute_with(inputs, config),
        projection: project_with(inputs, config),
    }
}

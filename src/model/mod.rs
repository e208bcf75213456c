//! ROI model for drafting automation

mod inputs;
mod results;
mod roi;

pub use inputs::{CalculationInputs, InputField, ValidationError};
pub use results::{CalculationResults, MonthlyCosts, RoiDays, NOT_APPLICABLE};
pub use roi::{compute, compute_with, monthly_costs};

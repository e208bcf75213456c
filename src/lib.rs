//! LegalFlow ROI - savings projection for document drafting automation
//!
//! This library provides:
//! - The ROI model (annual savings, hours saved, break-even working days)
//! - The cumulative cost series with its break-even point
//! - Display formatting for the summary cards and chart labels
//! - Lead capture forwarding and the AI prose summary collaborators
//! - Batch scenario evaluation and CSV export

pub mod config;
pub mod error;
pub mod model;
pub mod projection;
pub mod calculation;
pub mod format;
pub mod lead;
pub mod insight;
pub mod scenario;
pub mod export;
pub mod api;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{AppConfig, ModelConfig};
pub use error::{Result, RoiError};
pub use model::{CalculationInputs, CalculationResults, InputField, MonthlyCosts, RoiDays};
pub use projection::{BreakEvenPoint, Projection, ProjectionPoint};
pub use calculation::{calculate, Calculation};
pub use lead::{LeadCapture, LeadPayload, UnlockOutcome};
pub use insight::InsightService;
pub use scenario::ScenarioRunner;

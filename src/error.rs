//! Error type for the side-effecting collaborators
//!
//! The ROI model and the series builder are total and never return these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not configured: {0}")]
    NotConfigured(&'static str),

    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, RoiError>;

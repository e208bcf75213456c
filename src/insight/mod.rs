//! AI prose summary of the calculated numbers
//!
//! The returned text is opaque display copy. Every failure path degrades to a
//! static fallback string instead of an error.

mod gemini;
mod prompt;

pub use gemini::GeminiClient;
pub use prompt::build_prompt;

use log::{error, warn};

use crate::config::AppConfig;
use crate::error::Result;
use crate::model::{CalculationInputs, CalculationResults};

/// Shown when no API key is configured
pub const FALLBACK_UNCONFIGURED: &str = "AI insights unavailable. Please configure your Gemini API key.";

/// Shown when the service answered without text
pub const FALLBACK_EMPTY: &str = "Unable to generate insight at this time.";

/// Shown when the service could not be reached or returned an error
pub const FALLBACK_FAILED: &str = "Analysis unavailable. Please try again.";

/// Generates the summary, or a fallback when the service is unavailable
#[derive(Debug, Clone, Default)]
pub struct InsightService {
    client: Option<GeminiClient>,
}

impl InsightService {
    pub fn new(client: Option<GeminiClient>) -> Self {
        Self { client }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = match &config.gemini_api_key {
            Some(key) => Some(GeminiClient::new(
                &config.gemini_api_base,
                key,
                &config.gemini_model,
                config.http_timeout,
            )?),
            None => None,
        };
        Ok(Self { client })
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub async fn generate(&self, inputs: &CalculationInputs, results: &CalculationResults) -> String {
        let Some(client) = &self.client else {
            warn!("Gemini API key not configured; returning static insight");
            return FALLBACK_UNCONFIGURED.to_string();
        };

        let prompt = build_prompt(inputs, results);
        match client.generate(&prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!("Gemini returned no text");
                FALLBACK_EMPTY.to_string()
            }
            Err(e) => {
                error!("Error generating insight: {}", e);
                FALLBACK_FAILED.to_string()
            }
        }
    }
}

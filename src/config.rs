//! Model calendar constants and runtime configuration
//!
//! The calendar constants are deliberately kept separate: break-even days use
//! a working-day year while the monthly figures use a twelve-month year.

use std::env;
use std::time::Duration;

/// Working days per year used for the daily savings rate
pub const WORKING_DAYS_PER_YEAR: f64 = 260.0;

/// Months per year used for annual/monthly conversions
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Last month index of the cumulative cost series (series has horizon + 1 points)
pub const PROJECTION_HORIZON_MONTHS: u32 = 12;

/// Default Gemini model for the prose summary
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default base URL of the Gemini REST API
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default timeout for outbound HTTP calls
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Calendar constants consumed by the ROI model and the series builder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConfig {
    /// Divisor turning annual savings into daily savings
    pub working_days_per_year: f64,

    /// Divisor turning annual figures into monthly figures
    pub months_per_year: f64,

    /// Last month of the projection window
    pub horizon_months: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            working_days_per_year: WORKING_DAYS_PER_YEAR,
            months_per_year: MONTHS_PER_YEAR,
            horizon_months: PROJECTION_HORIZON_MONTHS,
        }
    }
}

/// Runtime configuration for the networked collaborators
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Endpoint receiving lead payloads. `None` disables forwarding.
    pub lead_webhook_url: Option<String>,

    /// Gemini API key. `None` means the summary falls back to static text.
    pub gemini_api_key: Option<String>,

    pub gemini_model: String,

    pub gemini_api_base: String,

    /// Timeout applied to every outbound request
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lead_webhook_url: None,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    ///
    /// Recognised variables:
    ///   LEAD_WEBHOOK_URL, GEMINI_API_KEY (or API_KEY), GEMINI_MODEL,
    ///   GEMINI_API_BASE, HTTP_TIMEOUT_SECS
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let lead_webhook_url = non_empty("LEAD_WEBHOOK_URL");

        let gemini_api_key = non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY"));

        let gemini_model = non_empty("GEMINI_MODEL")
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let gemini_api_base = non_empty("GEMINI_API_BASE")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string());

        let http_timeout_secs: u64 = non_empty("HTTP_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Self {
            lead_webhook_url,
            gemini_api_key,
            gemini_model,
            gemini_api_base,
            http_timeout: Duration::from_secs(http_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_model_config_defaults() {
        let config = ModelConfig::default();
        assert_eq!(config.working_days_per_year, 260.0);
        assert_eq!(config.months_per_year, 12.0);
        assert_eq!(config.horizon_months, 12);
    }

    #[test]
    fn test_app_config_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert!(config.lead_webhook_url.is_none());
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_api_key_fallback_and_blank_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "   "),
            ("API_KEY", "abc123"),
            ("LEAD_WEBHOOK_URL", ""),
            ("GEMINI_API_BASE", "http://localhost:9000/v1/"),
            ("HTTP_TIMEOUT_SECS", "3"),
        ]));

        assert_eq!(config.gemini_api_key.as_deref(), Some("abc123"));
        assert!(config.lead_webhook_url.is_none());
        assert_eq!(config.gemini_api_base, "http://localhost:9000/v1");
        assert_eq!(config.http_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_unparseable_timeout_uses_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("HTTP_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.http_timeout, Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS));
    }
}

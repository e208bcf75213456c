//! Email gate and lead forwarding
//!
//! Unlocking the results never waits on the webhook. The forward runs as a
//! detached task and its failure is only logged.

mod webhook;

pub use webhook::WebhookClient;

use chrono::{DateTime, SecondsFormat, Utc};
use log::{error, info, warn};
use serde::{Deserialize, Serialize, Serializer};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::AppConfig;
use crate::error::{Result, RoiError};
use crate::model::{CalculationInputs, CalculationResults};

/// Presence plus `@` check performed before any side effect
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.contains('@')
}

fn iso_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Body posted to the lead webhook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub email: String,
    #[serde(serialize_with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub calculator_inputs: CalculationInputs,
    pub calculator_results: CalculationResults,
}

impl LeadPayload {
    pub fn new(email: &str, inputs: CalculationInputs, results: CalculationResults) -> Result<Self> {
        Self::at(email, inputs, results, Utc::now())
    }

    pub fn at(
        email: &str,
        inputs: CalculationInputs,
        results: CalculationResults,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        if !is_valid_email(email) {
            return Err(RoiError::InvalidEmail(email.to_string()));
        }

        Ok(Self {
            email: email.trim().to_string(),
            timestamp,
            calculator_inputs: inputs,
            calculator_results: results,
        })
    }
}

/// Result of submitting the email gate
#[derive(Debug)]
pub enum UnlockOutcome {
    /// Email failed the local check; nothing was sent
    Rejected,
    /// Results are unlocked. `forward` is the detached webhook task, if one was started.
    Unlocked { forward: Option<JoinHandle<()>> },
}

impl UnlockOutcome {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, UnlockOutcome::Unlocked { .. })
    }
}

/// Email gate backed by an optional webhook
#[derive(Debug, Clone, Default)]
pub struct LeadCapture {
    webhook: Option<WebhookClient>,
}

impl LeadCapture {
    pub fn new(webhook: Option<WebhookClient>) -> Self {
        Self { webhook }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let webhook = match &config.lead_webhook_url {
            Some(url) => Some(WebhookClient::new(url.clone(), config.http_timeout)?),
            None => None,
        };
        Ok(Self { webhook })
    }

    pub fn webhook(&self) -> Option<&WebhookClient> {
        self.webhook.as_ref()
    }

    /// Validate the email, unlock, and start forwarding the lead in the background
    ///
    /// Forwarding needs a Tokio runtime; without one it is skipped and logged.
    pub fn unlock(&self, email: &str, inputs: &CalculationInputs, results: &CalculationResults) -> UnlockOutcome {
        let payload = match LeadPayload::new(email, *inputs, *results) {
            Ok(p) => p,
            Err(e) => {
                warn!("Email gate rejected submission: {}", e);
                return UnlockOutcome::Rejected;
            }
        };

        let Some(webhook) = self.webhook.clone() else {
            warn!("No lead webhook configured; lead for {} not forwarded", payload.email);
            return UnlockOutcome::Unlocked { forward: None };
        };

        let handle = match Handle::try_current() {
            Ok(h) => h,
            Err(_) => {
                warn!("No async runtime available; lead for {} not forwarded", payload.email);
                return UnlockOutcome::Unlocked { forward: None };
            }
        };

        let forward = handle.spawn(async move {
            if let Err(e) = forward_lead(&webhook, &payload).await {
                error!("Failed to send to webhook: {}", e);
            }
        });

        UnlockOutcome::Unlocked { forward: Some(forward) }
    }

    /// Forward a payload and wait for the outcome
    pub async fn forward(&self, payload: &LeadPayload) -> Result<()> {
        let webhook = self
            .webhook
            .as_ref()
            .ok_or(RoiError::NotConfigured("LEAD_WEBHOOK_URL"))?;
        forward_lead(webhook, payload).await
    }
}

async fn forward_lead(webhook: &WebhookClient, payload: &LeadPayload) -> Result<()> {
    webhook.post_json(payload).await?;
    info!("Lead forwarded for {}", payload.email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::compute;
    use crate::test_support::{unreachable_url, MockServer};
    use chrono::TimeZone;
    use std::time::Duration;

    fn sample() -> (CalculationInputs, CalculationResults) {
        let inputs = CalculationInputs::default();
        (inputs, compute(&inputs))
    }

    #[test]
    fn test_email_check() {
        assert!(is_valid_email("jane@firm.law"));
        assert!(is_valid_email("  a@b "));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("jane.firm.law"));
    }

    #[test]
    fn test_payload_wire_shape() {
        let (inputs, results) = sample();
        let ts = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
        let payload = LeadPayload::at("jane@firm.law", inputs, results, ts).unwrap();

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["email"], "jane@firm.law");
        assert_eq!(json["timestamp"], "2026-10-16T09:30:00.000Z");
        assert_eq!(json["calculatorInputs"]["hourlyRate"], 450.0);
        assert_eq!(json["calculatorResults"]["annualSavings"], 97200.0);
        assert!(json["calculatorResults"]["roiDays"].is_number());

        let back: LeadPayload = serde_json::from_value(json).unwrap();
        assert_eq!(back.timestamp, ts);
        assert_eq!(back.calculator_inputs, inputs);
    }

    #[test]
    fn test_payload_rejects_bad_email() {
        let (inputs, results) = sample();
        assert!(matches!(
            LeadPayload::new("nope", inputs, results),
            Err(RoiError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_rejected_email_stays_locked() {
        let (inputs, results) = sample();
        let gate = LeadCapture::default();
        assert!(!gate.unlock("not-an-email", &inputs, &results).is_unlocked());
    }

    #[test]
    fn test_unlock_without_webhook_or_runtime() {
        let (inputs, results) = sample();
        let gate = LeadCapture::default();
        match gate.unlock("jane@firm.law", &inputs, &results) {
            UnlockOutcome::Unlocked { forward } => assert!(forward.is_none()),
            UnlockOutcome::Rejected => panic!("valid email rejected"),
        }
    }

    #[tokio::test]
    async fn test_unlock_forwards_payload() {
        let (inputs, results) = sample();
        let server = MockServer::start(200, "ok").await;
        let webhook = WebhookClient::new(server.url("/lead"), Duration::from_secs(5)).unwrap();
        let gate = LeadCapture::new(Some(webhook));

        let outcome = gate.unlock("jane@firm.law", &inputs, &results);
        let UnlockOutcome::Unlocked { forward: Some(task) } = outcome else {
            panic!("expected a forwarding task");
        };
        task.await.unwrap();

        let request = server.request().await;
        assert!(request.contains(r#""email":"jane@firm.law""#));
        assert!(request.contains(r#""calculatorInputs""#));
    }

    #[tokio::test]
    async fn test_unreachable_webhook_still_unlocks() {
        let (inputs, results) = sample();
        let webhook = WebhookClient::new(unreachable_url().await, Duration::from_secs(2)).unwrap();
        let gate = LeadCapture::new(Some(webhook));

        let outcome = gate.unlock("jane@firm.law", &inputs, &results);
        assert!(outcome.is_unlocked());
        if let UnlockOutcome::Unlocked { forward: Some(task) } = outcome {
            // failure is logged inside the task, never propagated
            task.await.unwrap();
        }

        let payload = LeadPayload::new("jane@firm.law", inputs, results).unwrap();
        assert!(gate.forward(&payload).await.is_err());
    }

    #[tokio::test]
    async fn test_forward_without_webhook_is_not_configured() {
        let (inputs, results) = sample();
        let payload = LeadPayload::new("jane@firm.law", inputs, results).unwrap();
        let err = LeadCapture::default().forward(&payload).await.unwrap_err();
        assert!(matches!(err, RoiError::NotConfigured(_)));
    }
}

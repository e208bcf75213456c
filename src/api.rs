//! Request routing for the HTTP function handler
//!
//! Kept independent of the Lambda event types so it can be exercised directly.

use log::{error, info, warn};
use serde_json::{json, Value};

use crate::calculation::calculate;
use crate::lead::WebhookClient;
use crate::model::CalculationInputs;

/// Headers attached to every response
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Status plus optional JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    fn json(status: u16, body: Value) -> Self {
        Self { status, body: Some(body) }
    }

    fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self::json(status, json!({ "error": message.into() }))
    }
}

/// Shared state for request handling
#[derive(Debug, Clone, Default)]
pub struct ApiContext {
    pub webhook: Option<WebhookClient>,
}

/// Route a request by method and path
///
/// `OPTIONS` answers any path for CORS preflight. `/webhook` forwards the body
/// to the lead webhook and `/calculate` evaluates the calculator. Paths match
/// on their final segment so a stage or API prefix is tolerated.
pub async fn handle(ctx: &ApiContext, method: &str, path: &str, body: &str) -> ApiResponse {
    if method.eq_ignore_ascii_case("OPTIONS") {
        return ApiResponse::empty(200);
    }

    if !method.eq_ignore_ascii_case("POST") {
        return ApiResponse::error(405, "Method not allowed");
    }

    let path = path.trim_end_matches('/');
    if path.ends_with("/webhook") {
        forward_webhook(ctx, body).await
    } else if path.ends_with("/calculate") {
        calculate_request(body)
    } else {
        ApiResponse::error(404, "Not found")
    }
}

fn calculate_request(body: &str) -> ApiResponse {
    let body = if body.trim().is_empty() { "{}" } else { body };

    let inputs: CalculationInputs = match serde_json::from_str(body) {
        Ok(i) => i,
        Err(e) => return ApiResponse::error(400, format!("Invalid JSON: {}", e)),
    };

    let errors = inputs.validate();
    if !errors.is_empty() {
        let details: Vec<Value> = errors
            .iter()
            .map(|e| json!({ "field": e.field_id, "message": e.message }))
            .collect();
        return ApiResponse::json(400, json!({ "error": "Invalid inputs", "details": details }));
    }

    match serde_json::to_value(calculate(&inputs)) {
        Ok(v) => ApiResponse::json(200, v),
        Err(e) => {
            error!("Failed to serialize calculation: {}", e);
            ApiResponse::error(500, "Internal server error")
        }
    }
}

async fn forward_webhook(ctx: &ApiContext, body: &str) -> ApiResponse {
    let Some(webhook) = &ctx.webhook else {
        warn!("Webhook proxy called but LEAD_WEBHOOK_URL is not set");
        return ApiResponse::error(500, "Failed to send to webhook");
    };

    match webhook.post_raw(body.to_string()).await {
        Ok(text) => {
            info!("Proxied lead to {}", webhook.url());
            ApiResponse::json(200, json!({ "success": true, "message": text }))
        }
        Err(e) => {
            error!("Webhook error: {}", e);
            ApiResponse::error(500, "Failed to send to webhook")
        }
    }
}

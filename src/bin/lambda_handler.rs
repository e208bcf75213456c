//! AWS Lambda handler for the ROI calculator
//!
//! POST `/calculate` with a JSON `CalculationInputs` body (missing fields take
//! the calculator defaults) returns inputs, results and the chart series.
//! POST `/webhook` proxies a lead payload to `LEAD_WEBHOOK_URL`.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use legalflow_roi::{
    api::{handle, ApiContext, ApiResponse, CORS_HEADERS},
    lead::WebhookClient,
    AppConfig,
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::info;

fn to_response(api: ApiResponse) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder().status(api.status);
    for (name, value) in CORS_HEADERS {
        builder = builder.header(name, value);
    }

    let response = match api.body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::Text(json.to_string()))?,
        None => builder.body(Body::Empty)?,
    };

    Ok(response)
}

/// Lambda handler function
async fn handler(ctx: &ApiContext, event: Request) -> Result<Response<Body>, Error> {
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => String::new(),
    };

    let response = handle(ctx, event.method().as_str(), event.uri().path(), &body_str).await;
    info!("{} {} -> {}", event.method(), event.uri().path(), response.status);

    to_response(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = AppConfig::from_env();
    let webhook = match &config.lead_webhook_url {
        Some(url) => Some(WebhookClient::new(url.clone(), config.http_timeout)?),
        None => None,
    };
    let ctx = ApiContext { webhook };

    let ctx = &ctx;
    run(service_fn(move |event: Request| async move { handler(ctx, event).await })).await
}

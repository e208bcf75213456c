//! Outbound JSON POST to the marketing webhook

use std::time::Duration;

use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;

use crate::error::{Result, RoiError};

/// Thin client bound to a single webhook endpoint
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST a serializable body, returning the response text
    pub async fn post_json<T: Serialize + ?Sized>(&self, body: &T) -> Result<String> {
        let payload = serde_json::to_string(body)?;
        self.post_raw(payload).await
    }

    /// POST an already-encoded JSON body verbatim
    pub async fn post_raw(&self, body: String) -> Result<String> {
        debug!("POST {} ({} bytes)", self.url, body.len());

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(RoiError::UpstreamStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

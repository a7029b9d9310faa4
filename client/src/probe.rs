//! Status probe trait and the HTTP implementation.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::ClientError;

/// Backend operations the polling client needs
#[async_trait]
pub trait StatusProbe: Send + Sync {
    /// Ask the backend to issue and dispatch a code
    async fn request_code(&self, contact: &str, purpose: &str) -> Result<(), String>;

    /// Whether a live code is pending for the contact
    async fn code_pending(&self, contact: &str) -> Result<bool, String>;
}

#[derive(Debug, Deserialize)]
struct CodeStatusBody {
    pending: bool,
}

/// Probe implementation over the SoftNav HTTP API
pub struct HttpProbe {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProbe {
    /// Create a probe against a server base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ClientError::Probe(format!("http client setup failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl StatusProbe for HttpProbe {
    async fn request_code(&self, contact: &str, purpose: &str) -> Result<(), String> {
        let response = self
            .client
            .post(format!("{}/api/v1/auth/send-code", self.base_url))
            .json(&json!({ "contact": contact, "purpose": purpose }))
            .send()
            .await
            .map_err(|e| format!("send-code request failed: {}", e))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(format!("send-code status {}: {}", status, body))
        }
    }

    async fn code_pending(&self, contact: &str) -> Result<bool, String> {
        let response = self
            .client
            .get(format!("{}/api/v1/auth/code-status", self.base_url))
            .query(&[("contact", contact)])
            .send()
            .await
            .map_err(|e| format!("code-status request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("code-status status {}", status));
        }

        let body: CodeStatusBody = response
            .json()
            .await
            .map_err(|e| format!("code-status parse failed: {}", e))?;
        Ok(body.pending)
    }
}

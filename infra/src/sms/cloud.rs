//! Cloud SMS provider client.
//!
//! The provider's send API is template-based: the request names a
//! pre-registered template id and sign name, and carries the code as a
//! template parameter. Authentication is key-pair headers.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, info};

use sn_core::services::verification::{Purpose, SmsTransport};
use sn_shared::config::SmsConfig;
use sn_shared::utils::validation::mask_phone;

use crate::InfrastructureError;

/// Response of the provider's send API
#[derive(Debug, Deserialize)]
struct SendSmsResponse {
    code: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    request_id: String,
}

/// HTTP client for the cloud SMS provider
pub struct CloudSmsService {
    client: reqwest::Client,
    config: SmsConfig,
}

impl CloudSmsService {
    /// Create a new SMS client from the provider configuration
    pub fn new(config: SmsConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| InfrastructureError::Sms(format!("http client setup failed: {}", e)))?;

        info!(api_url = %config.api_url, "Cloud SMS client initialized");

        Ok(Self { client, config })
    }
}

#[async_trait]
impl SmsTransport for CloudSmsService {
    async fn send_verification_code(
        &self,
        phone: &str,
        code: &str,
        purpose: Purpose,
    ) -> Result<String, String> {
        let template_code = self.config.template_for(purpose.is_reset());

        debug!(
            phone = %mask_phone(phone),
            template_code,
            "Sending verification SMS"
        );

        let payload = json!({
            "phone_number": phone,
            "sign_name": self.config.sign_name,
            "template_code": template_code,
            "template_param": { "code": code },
        });

        let response = self
            .client
            .post(&self.config.api_url)
            .header("X-Access-Key-Id", &self.config.access_key_id)
            .header("X-Access-Key-Secret", &self.config.access_key_secret)
            .json(&payload)
            .send()
            .await
            .map_err(|e| format!("sms request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                phone = %mask_phone(phone),
                %status,
                "SMS provider returned an error status"
            );
            return Err(format!("sms provider status {}: {}", status, body));
        }

        let body: SendSmsResponse = response
            .json()
            .await
            .map_err(|e| format!("sms response parse failed: {}", e))?;

        if body.code != "OK" {
            return Err(format!("sms provider error {}: {}", body.code, body.message));
        }

        info!(
            phone = %mask_phone(phone),
            request_id = %body.request_id,
            event = "sms_sent",
            "Verification SMS accepted by provider"
        );

        Ok(body.request_id)
    }
}

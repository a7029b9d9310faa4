//! Admin REST client for the hosted auth service.
//!
//! The auth service owns accounts, sessions, and credential storage. This
//! client only drives its administrative endpoints with the service-role
//! key; it never sees password hashes.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

use sn_core::domain::value_objects::Contact;
use sn_core::services::reset::{AuthAccount, AuthAdmin};
use sn_shared::config::AuthBackendConfig;

use crate::InfrastructureError;

/// One account record as returned by the admin API
#[derive(Debug, Deserialize)]
struct AccountPayload {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

/// Response of the account listing endpoint
#[derive(Debug, Deserialize)]
struct ListAccountsResponse {
    #[serde(default)]
    users: Vec<AccountPayload>,
}

/// HTTP client for the auth backend's admin API
pub struct AuthAdminClient {
    client: reqwest::Client,
    config: AuthBackendConfig,
}

impl AuthAdminClient {
    /// Create a new admin client from the auth backend configuration
    pub fn new(config: AuthBackendConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                InfrastructureError::AuthBackend(format!("http client setup failed: {}", e))
            })?;

        info!(base_url = %config.base_url, "Auth admin client initialized");

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Fire a request and flatten non-success statuses into an error string
    async fn expect_success(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, String> {
        let response = request
            .bearer_auth(&self.config.service_key)
            .header("apikey", &self.config.service_key)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(format!("status {}: {}", status, body))
        }
    }
}

#[async_trait]
impl AuthAdmin for AuthAdminClient {
    async fn find_account(&self, contact: &Contact) -> Result<Option<AuthAccount>, String> {
        let request = self
            .client
            .get(self.url("/admin/users"))
            .query(&[("contact", contact.as_str())]);

        let response = request
            .bearer_auth(&self.config.service_key)
            .header("apikey", &self.config.service_key)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("status {}: {}", status, body));
        }

        let body: ListAccountsResponse = response
            .json()
            .await
            .map_err(|e| format!("response parse failed: {}", e))?;

        debug!(
            contact = %contact.masked(),
            matches = body.users.len(),
            "Account lookup completed"
        );

        Ok(body.users.into_iter().next().map(|payload| AuthAccount {
            id: payload.id,
            email: payload.email,
            phone: payload.phone,
        }))
    }

    async fn set_password(&self, account_id: &str, new_password: &str) -> Result<(), String> {
        let request = self
            .client
            .put(self.url(&format!("/admin/users/{}", account_id)))
            .json(&json!({ "password": new_password }));
        self.expect_success(request).await?;
        Ok(())
    }

    async fn invalidate_sessions(&self, account_id: &str) -> Result<(), String> {
        let request = self
            .client
            .post(self.url(&format!("/admin/users/{}/logout", account_id)))
            .json(&json!({ "scope": "local" }));
        self.expect_success(request).await?;
        Ok(())
    }

    async fn invalidate_all_sessions(&self, account_id: &str) -> Result<(), String> {
        let request = self
            .client
            .post(self.url(&format!("/admin/users/{}/logout", account_id)))
            .json(&json!({ "scope": "global" }));
        self.expect_success(request).await?;
        Ok(())
    }

    async fn request_recovery_link(&self, account: &AuthAccount) -> Result<(), String> {
        let email = account
            .email
            .as_deref()
            .ok_or_else(|| "account has no email address".to_string())?;
        let request = self
            .client
            .post(self.url("/admin/generate_link"))
            .json(&json!({ "type": "recovery", "email": email }));
        self.expect_success(request).await?;
        Ok(())
    }

    async fn send_reset_email(&self, email: &str) -> Result<(), String> {
        let request = self
            .client
            .post(self.url("/recover"))
            .json(&json!({ "email": email }));
        self.expect_success(request).await?;
        Ok(())
    }

    async fn update_metadata(
        &self,
        account_id: &str,
        metadata: serde_json::Value,
    ) -> Result<(), String> {
        let request = self
            .client
            .put(self.url(&format!("/admin/users/{}", account_id)))
            .json(&json!({ "user_metadata": metadata }));
        self.expect_success(request).await?;
        Ok(())
    }
}

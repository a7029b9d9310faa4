//! Reset strategy objects.
//!
//! Each strategy is one independent way of making a new credential
//! effective on the auth backend. Strategies never propagate errors: every
//! backend failure is folded into a [`StrategyResult::Failure`] so the
//! driver can continue with the next strategy.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tracing;

use super::config::ResetConfig;
use super::traits::{AuthAccount, AuthAdmin};
use super::types::{StrategyKind, StrategyResult};

/// Everything a strategy needs for one attempt
pub struct ResetContext<'a, B: AuthAdmin> {
    pub backend: &'a B,
    pub account: &'a AuthAccount,
    pub new_password: &'a str,
    pub config: &'a ResetConfig,
}

/// One independent method of propagating a new credential
#[async_trait]
pub trait ResetStrategy<B: AuthAdmin>: Send + Sync {
    /// Which strategy this is
    fn kind(&self) -> StrategyKind;

    /// Run the strategy once; never returns an error
    async fn attempt(&self, ctx: &ResetContext<'_, B>) -> StrategyResult;
}

/// Strategy A: administrative set-password call
pub struct DirectStrategy;

#[async_trait]
impl<B: AuthAdmin> ResetStrategy<B> for DirectStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Direct
    }

    async fn attempt(&self, ctx: &ResetContext<'_, B>) -> StrategyResult {
        match ctx
            .backend
            .set_password(&ctx.account.id, ctx.new_password)
            .await
        {
            Ok(()) => StrategyResult::Success,
            Err(reason) => StrategyResult::failure(format!("set password: {}", reason)),
        }
    }
}

/// Strategy B: invalidate sessions, let the backend settle, request a
/// recovery link, then re-attempt the direct set-password call.
pub struct SessionResetStrategy;

#[async_trait]
impl<B: AuthAdmin> ResetStrategy<B> for SessionResetStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::SessionReset
    }

    async fn attempt(&self, ctx: &ResetContext<'_, B>) -> StrategyResult {
        if let Err(reason) = ctx.backend.invalidate_sessions(&ctx.account.id).await {
            return StrategyResult::failure(format!("session sign-out: {}", reason));
        }

        // Session invalidation propagates asynchronously on the backend
        tokio::time::sleep(ctx.config.settle_short).await;

        if let Err(reason) = ctx.backend.request_recovery_link(ctx.account).await {
            return StrategyResult::failure(format!("recovery link: {}", reason));
        }

        match ctx
            .backend
            .set_password(&ctx.account.id, ctx.new_password)
            .await
        {
            Ok(()) => StrategyResult::Success,
            Err(reason) => StrategyResult::failure(format!("set password: {}", reason)),
        }
    }
}

/// Strategy C: write reset markers into the account metadata.
///
/// Does not change the credential; counts as a soft success only.
pub struct MetadataTouchStrategy;

#[async_trait]
impl<B: AuthAdmin> ResetStrategy<B> for MetadataTouchStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::MetadataTouch
    }

    async fn attempt(&self, ctx: &ResetContext<'_, B>) -> StrategyResult {
        let metadata = json!({
            "password_reset_at": Utc::now().to_rfc3339(),
            "password_reset_requested": true,
        });
        match ctx.backend.update_metadata(&ctx.account.id, metadata).await {
            Ok(()) => StrategyResult::Success,
            Err(reason) => StrategyResult::failure(format!("metadata write: {}", reason)),
        }
    }
}

/// Strategy D: global sign-out, long settle pause, email-based reset, then
/// a forced set-password with a reset flag in the metadata.
pub struct ForceStrategy;

#[async_trait]
impl<B: AuthAdmin> ResetStrategy<B> for ForceStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Force
    }

    async fn attempt(&self, ctx: &ResetContext<'_, B>) -> StrategyResult {
        if let Err(reason) = ctx.backend.invalidate_all_sessions(&ctx.account.id).await {
            return StrategyResult::failure(format!("global sign-out: {}", reason));
        }

        tokio::time::sleep(ctx.config.settle_long).await;

        let email = match &ctx.account.email {
            Some(email) => email,
            None => return StrategyResult::failure("account has no email address"),
        };
        if let Err(reason) = ctx.backend.send_reset_email(email).await {
            return StrategyResult::failure(format!("email reset: {}", reason));
        }

        if let Err(reason) = ctx
            .backend
            .set_password(&ctx.account.id, ctx.new_password)
            .await
        {
            return StrategyResult::failure(format!("set password: {}", reason));
        }

        // The password is already set at this point; a failed flag write is
        // logged but does not revoke the success
        let metadata = json!({
            "password_force_reset": true,
            "password_force_reset_at": Utc::now().to_rfc3339(),
        });
        if let Err(reason) = ctx.backend.update_metadata(&ctx.account.id, metadata).await {
            tracing::warn!(
                account_id = %ctx.account.id,
                error = %reason,
                event = "force_reset_flag_failed",
                "Forced reset flag could not be written"
            );
        }

        StrategyResult::Success
    }
}

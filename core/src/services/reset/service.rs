//! Password reset orchestrator.
//!
//! Drives the strategy chain: direct first, session-reset only after a
//! direct failure, metadata touch always, and the force strategy as the
//! last resort after a second direct attempt. The orchestrator assumes the
//! caller has already verified a one-time code for the contact; it does not
//! re-check it.

use std::sync::Arc;
use tracing;

use crate::domain::value_objects::Contact;
use crate::errors::{DomainError, DomainResult};

use super::config::ResetConfig;
use super::password_rules::validate_password_strength;
use super::strategies::{
    DirectStrategy, ForceStrategy, MetadataTouchStrategy, ResetContext, ResetStrategy,
    SessionResetStrategy,
};
use super::traits::{AuthAccount, AuthAdmin};
use super::types::{ResetReport, StrategyKind, StrategyRecord, StrategyResult};

/// Orchestrates the multi-strategy password reset flow
pub struct PasswordResetService<B: AuthAdmin> {
    /// Admin client for the auth backend
    backend: Arc<B>,
    /// Orchestration configuration
    config: ResetConfig,
}

impl<B: AuthAdmin> PasswordResetService<B> {
    /// Create a new password reset service
    pub fn new(backend: Arc<B>, config: ResetConfig) -> Self {
        Self { backend, config }
    }

    /// Reset the password for the account matching `contact`.
    ///
    /// # Arguments
    ///
    /// * `contact` - Email address or phone number of the account
    /// * `new_password` - The credential to make effective
    ///
    /// # Returns
    ///
    /// * `Ok(ResetReport)` - at least one strategy succeeded; the report
    ///   distinguishes full from partial success
    /// * `Err(WeakPassword)` - password rules violated, nothing attempted
    /// * `Err(AccountNotFound)` - no account matches the contact
    /// * `Err(TotalResetFailure)` - every strategy failed
    pub async fn reset_password(
        &self,
        contact: &str,
        new_password: &str,
    ) -> DomainResult<ResetReport> {
        let contact = Contact::parse(contact)?;

        // Fail fast on weak passwords; no backend call happens
        validate_password_strength(new_password, self.config.min_password_length).map_err(
            |reasons| DomainError::WeakPassword {
                reasons: reasons.join(", "),
            },
        )?;

        let account = self.resolve_account(&contact).await?;

        tracing::info!(
            contact = %contact.masked(),
            account_id = %account.id,
            event = "reset_started",
            "Starting password reset"
        );

        let ctx = ResetContext {
            backend: self.backend.as_ref(),
            account: &account,
            new_password,
            config: &self.config,
        };

        let mut direct = StrategyRecord::pending(StrategyKind::Direct);
        let mut session_reset = StrategyRecord::pending(StrategyKind::SessionReset);
        let mut metadata_touch = StrategyRecord::pending(StrategyKind::MetadataTouch);
        let mut force = StrategyRecord::pending(StrategyKind::Force);

        direct.absorb(&Self::run(&DirectStrategy, &ctx).await);

        if !direct.succeeded {
            session_reset.absorb(&Self::run(&SessionResetStrategy, &ctx).await);
        }

        // The metadata marker is written regardless of the outcome so far
        metadata_touch.absorb(&Self::run(&MetadataTouchStrategy, &ctx).await);

        if !direct.succeeded && !session_reset.succeeded {
            // Second chance for the direct call before escalating
            direct.absorb(&Self::run(&DirectStrategy, &ctx).await);

            if !direct.succeeded {
                force.absorb(&Self::run(&ForceStrategy, &ctx).await);
            }
        }

        let records = vec![direct, session_reset, metadata_touch, force];
        self.conclude(&contact, records)
    }

    /// Resolve the backend account for a contact
    async fn resolve_account(&self, contact: &Contact) -> DomainResult<AuthAccount> {
        let account = self
            .backend
            .find_account(contact)
            .await
            .map_err(|reason| DomainError::Internal {
                message: format!("account lookup failed: {}", reason),
            })?;

        account.ok_or(DomainError::AccountNotFound)
    }

    /// Run one strategy, logging its outcome
    async fn run<S: ResetStrategy<B>>(strategy: &S, ctx: &ResetContext<'_, B>) -> StrategyResult {
        let result = strategy.attempt(ctx).await;
        match &result {
            StrategyResult::Success => {
                tracing::info!(
                    strategy = %strategy.kind(),
                    event = "reset_strategy_succeeded",
                    "Reset strategy succeeded"
                );
            }
            StrategyResult::Failure { reason } => {
                tracing::warn!(
                    strategy = %strategy.kind(),
                    error = %reason,
                    event = "reset_strategy_failed",
                    "Reset strategy failed"
                );
            }
        }
        result
    }

    /// Fold the strategy records into the combined outcome
    fn conclude(
        &self,
        contact: &Contact,
        records: Vec<StrategyRecord>,
    ) -> DomainResult<ResetReport> {
        let full_success = records
            .iter()
            .any(|r| r.succeeded && r.strategy.changes_credential());
        let partial_success = !full_success
            && records
                .iter()
                .any(|r| r.succeeded && !r.strategy.changes_credential());

        if !full_success && !partial_success {
            let details = records
                .iter()
                .filter(|r| r.attempted)
                .map(|r| {
                    format!(
                        "{}: {}",
                        r.strategy,
                        r.error.as_deref().unwrap_or("failed")
                    )
                })
                .collect();
            tracing::error!(
                contact = %contact.masked(),
                event = "reset_total_failure",
                "Every password reset strategy failed"
            );
            return Err(DomainError::TotalResetFailure { details });
        }

        let methods = records
            .iter()
            .filter(|r| r.succeeded)
            .map(|r| r.strategy.as_str().to_string())
            .collect();

        tracing::info!(
            contact = %contact.masked(),
            full_success,
            partial_success,
            event = "reset_concluded",
            "Password reset concluded"
        );

        Ok(ResetReport {
            full_success,
            partial_success,
            methods,
            instructions: Self::instructions(full_success),
            records,
        })
    }

    /// User-facing follow-up steps, depending on how far the reset got
    fn instructions(full_success: bool) -> Vec<String> {
        if full_success {
            vec![
                "Sign in with your new password.".to_string(),
                "If the old password still seems to work, clear your browser cache and sign in again.".to_string(),
            ]
        } else {
            vec![
                "The new password may take a moment to propagate; wait a minute before signing in.".to_string(),
                "If the new password is not accepted, use code-based sign-in instead.".to_string(),
                "Contact support if you still cannot access your account.".to_string(),
            ]
        }
    }
}

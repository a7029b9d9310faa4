//! Programmable auth backend mock for reset orchestrator tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::domain::value_objects::Contact;
use crate::services::reset::traits::{AuthAccount, AuthAdmin};

/// Mock auth backend with per-operation failure programming.
///
/// `set_password_failures` fails that many set-password calls before
/// letting one through, which is how the escalation paths are exercised.
pub struct MockAuthAdmin {
    pub account: Option<AuthAccount>,
    pub set_password_failures: AtomicUsize,
    pub fail_metadata: AtomicBool,
    pub fail_session_signout: AtomicBool,
    pub fail_global_signout: AtomicBool,
    pub fail_recovery_link: AtomicBool,
    pub fail_reset_email: AtomicBool,

    pub find_calls: AtomicUsize,
    pub set_password_calls: AtomicUsize,
    pub session_signout_calls: AtomicUsize,
    pub global_signout_calls: AtomicUsize,
    pub recovery_link_calls: AtomicUsize,
    pub reset_email_calls: AtomicUsize,
    pub metadata_calls: AtomicUsize,
}

impl MockAuthAdmin {
    /// Backend with one resolvable account and no programmed failures
    pub fn new() -> Self {
        Self {
            account: Some(AuthAccount {
                id: "acct-1".to_string(),
                email: Some("user@example.com".to_string()),
                phone: None,
            }),
            set_password_failures: AtomicUsize::new(0),
            fail_metadata: AtomicBool::new(false),
            fail_session_signout: AtomicBool::new(false),
            fail_global_signout: AtomicBool::new(false),
            fail_recovery_link: AtomicBool::new(false),
            fail_reset_email: AtomicBool::new(false),
            find_calls: AtomicUsize::new(0),
            set_password_calls: AtomicUsize::new(0),
            session_signout_calls: AtomicUsize::new(0),
            global_signout_calls: AtomicUsize::new(0),
            recovery_link_calls: AtomicUsize::new(0),
            reset_email_calls: AtomicUsize::new(0),
            metadata_calls: AtomicUsize::new(0),
        }
    }

    /// Backend that resolves no account
    pub fn without_account() -> Self {
        Self {
            account: None,
            ..Self::new()
        }
    }

    /// Fail the next `count` set-password calls
    pub fn fail_set_password_times(self, count: usize) -> Self {
        self.set_password_failures.store(count, Ordering::SeqCst);
        self
    }
}

#[async_trait]
impl AuthAdmin for MockAuthAdmin {
    async fn find_account(&self, _contact: &Contact) -> Result<Option<AuthAccount>, String> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.account.clone())
    }

    async fn set_password(&self, _account_id: &str, _new_password: &str) -> Result<(), String> {
        self.set_password_calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.set_password_failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.set_password_failures.store(remaining - 1, Ordering::SeqCst);
            return Err("backend rejected password update".to_string());
        }
        Ok(())
    }

    async fn invalidate_sessions(&self, _account_id: &str) -> Result<(), String> {
        self.session_signout_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_session_signout.load(Ordering::SeqCst) {
            return Err("sign-out failed".to_string());
        }
        Ok(())
    }

    async fn invalidate_all_sessions(&self, _account_id: &str) -> Result<(), String> {
        self.global_signout_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_global_signout.load(Ordering::SeqCst) {
            return Err("global sign-out failed".to_string());
        }
        Ok(())
    }

    async fn request_recovery_link(&self, _account: &AuthAccount) -> Result<(), String> {
        self.recovery_link_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_recovery_link.load(Ordering::SeqCst) {
            return Err("recovery link failed".to_string());
        }
        Ok(())
    }

    async fn send_reset_email(&self, _email: &str) -> Result<(), String> {
        self.reset_email_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reset_email.load(Ordering::SeqCst) {
            return Err("reset email failed".to_string());
        }
        Ok(())
    }

    async fn update_metadata(
        &self,
        _account_id: &str,
        _metadata: serde_json::Value,
    ) -> Result<(), String> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_metadata.load(Ordering::SeqCst) {
            return Err("metadata write failed".to_string());
        }
        Ok(())
    }
}

//! Code request driver with delivery polling.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::probe::StatusProbe;

/// Polling schedule for delivery confirmation
#[derive(Debug, Clone)]
pub struct PollingConfig {
    /// Wait before the first status check
    pub initial_delay: Duration,

    /// Wait between subsequent checks
    pub poll_interval: Duration,

    /// Maximum number of status checks
    pub max_checks: u32,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(5),
            poll_interval: Duration::from_secs(3),
            max_checks: 5,
        }
    }
}

/// Terminal state of a code request.
///
/// `Unconfirmed` means the budget ran out without a confirmation; the code
/// may or may not have been issued. The UI decides how to present that,
/// instead of this adapter pretending it succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// A pending code was observed on the backend
    Confirmed,
    /// The check budget was exhausted without a confirmation
    Unconfirmed,
}

/// Client-side driver for the code request flow
pub struct CodeRequestClient<P: StatusProbe> {
    probe: Arc<P>,
    config: PollingConfig,
}

impl<P: StatusProbe + 'static> CodeRequestClient<P> {
    /// Create a new client over a status probe
    pub fn new(probe: Arc<P>, config: PollingConfig) -> Self {
        Self { probe, config }
    }

    /// Request a code and poll until delivery is confirmed or the check
    /// budget runs out.
    ///
    /// The issuance request is fired without awaiting its result; the
    /// subsequent polls are what confirm that a code landed. Probe errors
    /// during polling consume a check but do not abort the loop, so the
    /// outcome is always one of the two terminal states.
    pub async fn request_and_confirm(&self, contact: &str, purpose: &str) -> DeliveryStatus {
        let probe = self.probe.clone();
        let send_contact = contact.to_string();
        let send_purpose = purpose.to_string();

        // Fire and forget; delivery is confirmed by polling
        tokio::spawn(async move {
            if let Err(error) = probe.request_code(&send_contact, &send_purpose).await {
                warn!(error = %error, "Code request failed in the background");
            }
        });

        tokio::time::sleep(self.config.initial_delay).await;

        for check in 1..=self.config.max_checks {
            match self.probe.code_pending(contact).await {
                Ok(true) => {
                    debug!(check, "Code delivery confirmed");
                    return DeliveryStatus::Confirmed;
                }
                Ok(false) => {
                    debug!(check, "Code not pending yet");
                }
                Err(error) => {
                    warn!(check, error = %error, "Status check failed");
                }
            }

            if check < self.config.max_checks {
                tokio::time::sleep(self.config.poll_interval).await;
            }
        }

        DeliveryStatus::Unconfirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fast_config(max_checks: u32) -> PollingConfig {
        PollingConfig {
            initial_delay: Duration::from_millis(1),
            poll_interval: Duration::from_millis(1),
            max_checks,
        }
    }

    /// Probe that reports pending after a set number of checks
    struct ScriptedProbe {
        pending_after: usize,
        requests: AtomicUsize,
        checks: AtomicUsize,
        fail_checks: bool,
    }

    impl ScriptedProbe {
        fn new(pending_after: usize) -> Self {
            Self {
                pending_after,
                requests: AtomicUsize::new(0),
                checks: AtomicUsize::new(0),
                fail_checks: false,
            }
        }
    }

    #[async_trait]
    impl StatusProbe for ScriptedProbe {
        async fn request_code(&self, _contact: &str, _purpose: &str) -> Result<(), String> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn code_pending(&self, _contact: &str) -> Result<bool, String> {
            let check = self.checks.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_checks {
                return Err("probe offline".to_string());
            }
            Ok(check >= self.pending_after)
        }
    }

    #[tokio::test]
    async fn confirms_once_the_code_is_pending() {
        let probe = Arc::new(ScriptedProbe::new(3));
        let client = CodeRequestClient::new(probe.clone(), fast_config(5));

        let status = client
            .request_and_confirm("user@example.com", "registration")
            .await;
        assert_eq!(status, DeliveryStatus::Confirmed);
        assert_eq!(probe.checks.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausted_budget_reports_unconfirmed() {
        let probe = Arc::new(ScriptedProbe::new(100));
        let client = CodeRequestClient::new(probe.clone(), fast_config(5));

        let status = client
            .request_and_confirm("user@example.com", "registration")
            .await;
        assert_eq!(status, DeliveryStatus::Unconfirmed);
        assert_eq!(probe.checks.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn probe_errors_consume_checks_without_aborting() {
        let mut probe = ScriptedProbe::new(1);
        probe.fail_checks = true;
        let probe = Arc::new(probe);
        let client = CodeRequestClient::new(probe.clone(), fast_config(3));

        let status = client
            .request_and_confirm("13812345678", "password-reset")
            .await;
        assert_eq!(status, DeliveryStatus::Unconfirmed);
        assert_eq!(probe.checks.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn issuance_request_is_fired_in_the_background() {
        let probe = Arc::new(ScriptedProbe::new(1));
        let client = CodeRequestClient::new(probe.clone(), fast_config(2));

        client
            .request_and_confirm("user@example.com", "registration")
            .await;

        // The spawned request has had ample time to run by now
        assert_eq!(probe.requests.load(Ordering::SeqCst), 1);
    }
}

//! Orchestrator behavior tests.
//!
//! The mock backend fails a programmable number of set-password calls,
//! which walks the driver through each escalation path.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::errors::DomainError;
use crate::services::reset::{PasswordResetService, ResetConfig};

use super::mocks::MockAuthAdmin;

fn service(backend: Arc<MockAuthAdmin>) -> PasswordResetService<MockAuthAdmin> {
    PasswordResetService::new(backend, ResetConfig::without_delays())
}

#[tokio::test]
async fn weak_password_fails_fast_without_backend_calls() {
    let backend = Arc::new(MockAuthAdmin::new());
    let svc = service(backend.clone());

    let err = svc
        .reset_password("user@example.com", "abc123")
        .await
        .unwrap_err();
    match err {
        DomainError::WeakPassword { reasons } => {
            assert_eq!(reasons, "no uppercase letter");
        }
        other => panic!("expected WeakPassword, got {:?}", other),
    }
    assert_eq!(backend.find_calls.load(Ordering::SeqCst), 0);
    assert_eq!(backend.set_password_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn weak_password_reports_every_violated_rule() {
    let backend = Arc::new(MockAuthAdmin::new());
    let svc = service(backend);

    let err = svc
        .reset_password("user@example.com", "ABCDEF")
        .await
        .unwrap_err();
    match err {
        DomainError::WeakPassword { reasons } => {
            assert!(reasons.contains("no lowercase letter"));
            assert!(reasons.contains("no digit"));
        }
        other => panic!("expected WeakPassword, got {:?}", other),
    }
}

#[tokio::test]
async fn unknown_contact_reports_account_not_found() {
    let backend = Arc::new(MockAuthAdmin::without_account());
    let svc = service(backend.clone());

    let err = svc
        .reset_password("user@example.com", "Abc123")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::AccountNotFound));
    assert_eq!(backend.set_password_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn direct_success_skips_every_escalation() {
    let backend = Arc::new(MockAuthAdmin::new());
    let svc = service(backend.clone());

    let report = svc
        .reset_password("user@example.com", "Abc123")
        .await
        .unwrap();

    assert!(report.full_success);
    assert!(!report.partial_success);
    assert!(report.methods.contains(&"direct".to_string()));

    // Neither session-reset nor force ever touched the backend
    assert_eq!(backend.session_signout_calls.load(Ordering::SeqCst), 0);
    assert_eq!(backend.global_signout_calls.load(Ordering::SeqCst), 0);
    assert_eq!(backend.set_password_calls.load(Ordering::SeqCst), 1);

    // The metadata marker is written even on the fast path
    assert_eq!(backend.metadata_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn session_reset_recovers_from_direct_failure() {
    let backend = Arc::new(MockAuthAdmin::new().fail_set_password_times(1));
    let svc = service(backend.clone());

    let report = svc
        .reset_password("user@example.com", "Abc123")
        .await
        .unwrap();

    assert!(report.full_success);
    assert!(report.methods.contains(&"session_reset".to_string()));
    assert!(!report.methods.contains(&"direct".to_string()));
    assert_eq!(backend.session_signout_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backend.recovery_link_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backend.global_signout_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn second_direct_chance_preempts_force() {
    let backend = Arc::new(MockAuthAdmin::new().fail_set_password_times(2));
    let svc = service(backend.clone());

    let report = svc
        .reset_password("user@example.com", "Abc123")
        .await
        .unwrap();

    // The retry flipped the direct record; force never ran
    assert!(report.full_success);
    assert!(report.methods.contains(&"direct".to_string()));
    assert_eq!(backend.global_signout_calls.load(Ordering::SeqCst), 0);

    let direct = report
        .records
        .iter()
        .find(|r| r.strategy.as_str() == "direct")
        .unwrap();
    assert!(direct.attempted && direct.succeeded);
    assert!(direct.error.is_none());
}

#[tokio::test]
async fn force_strategy_is_the_last_resort() {
    let backend = Arc::new(MockAuthAdmin::new().fail_set_password_times(3));
    let svc = service(backend.clone());

    let report = svc
        .reset_password("user@example.com", "Abc123")
        .await
        .unwrap();

    assert!(report.full_success);
    assert_eq!(report.methods, vec!["metadata_touch", "force"]);
    assert_eq!(backend.global_signout_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backend.reset_email_calls.load(Ordering::SeqCst), 1);
    // A, B, retry, then the force attempt
    assert_eq!(backend.set_password_calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn metadata_only_success_is_partial() {
    let backend = Arc::new(MockAuthAdmin::new().fail_set_password_times(usize::MAX));
    let svc = service(backend.clone());

    let report = svc
        .reset_password("user@example.com", "Abc123")
        .await
        .unwrap();

    assert!(!report.full_success);
    assert!(report.partial_success);
    assert_eq!(report.methods, vec!["metadata_touch"]);
    // Partial success comes with the cautious instruction set
    assert!(report
        .instructions
        .iter()
        .any(|line| line.contains("code-based sign-in")));
}

#[tokio::test]
async fn total_failure_carries_per_strategy_details() {
    let backend = Arc::new(MockAuthAdmin::new().fail_set_password_times(usize::MAX));
    backend.fail_metadata.store(true, Ordering::SeqCst);
    let svc = service(backend);

    let err = svc
        .reset_password("user@example.com", "Abc123")
        .await
        .unwrap_err();
    match err {
        DomainError::TotalResetFailure { details } => {
            assert_eq!(details.len(), 4);
            assert!(details.iter().any(|d| d.starts_with("direct:")));
            assert!(details.iter().any(|d| d.starts_with("force:")));
        }
        other => panic!("expected TotalResetFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn force_without_email_on_file_fails_cleanly() {
    let mut backend = MockAuthAdmin::new().fail_set_password_times(usize::MAX);
    if let Some(account) = backend.account.as_mut() {
        account.email = None;
        account.phone = Some("13812345678".to_string());
    }
    let backend = Arc::new(backend);
    let svc = service(backend.clone());

    let report = svc
        .reset_password("13812345678", "Abc123")
        .await
        .unwrap();

    assert!(report.partial_success);
    let force = report
        .records
        .iter()
        .find(|r| r.strategy.as_str() == "force")
        .unwrap();
    assert!(force.attempted && !force.succeeded);
    assert!(force.error.as_deref().unwrap().contains("no email address"));
    assert_eq!(backend.reset_email_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn full_success_reports_cache_clearing_instructions() {
    let backend = Arc::new(MockAuthAdmin::new());
    let svc = service(backend);

    let report = svc
        .reset_password("user@example.com", "Abc123")
        .await
        .unwrap();
    assert!(report
        .instructions
        .iter()
        .any(|line| line.contains("clear your browser cache")));
}

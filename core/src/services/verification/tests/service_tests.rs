//! Verification service behavior tests

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;
use crate::repositories::{MockVerificationCodeRepository, VerificationCodeRepository};
use crate::services::verification::{
    Purpose, VerificationService, VerificationServiceConfig, VerifyOutcome,
};

use super::mocks::{MockMail, MockSms};

type TestService = VerificationService<MockVerificationCodeRepository, MockMail, MockSms>;

struct Fixture {
    repository: Arc<MockVerificationCodeRepository>,
    mail: Arc<MockMail>,
    sms: Arc<MockSms>,
    service: TestService,
}

fn fixture() -> Fixture {
    let repository = Arc::new(MockVerificationCodeRepository::new());
    let mail = Arc::new(MockMail::new());
    let sms = Arc::new(MockSms::new());
    let service = VerificationService::new(
        repository.clone(),
        mail.clone(),
        sms.clone(),
        VerificationServiceConfig::default(),
    );
    Fixture {
        repository,
        mail,
        sms,
        service,
    }
}

#[tokio::test]
async fn send_code_stores_and_mails_email_contacts() {
    let f = fixture();

    let result = f
        .service
        .send_code("user@example.com", Purpose::Registration)
        .await
        .unwrap();

    let stored = f
        .repository
        .find_by_contact("user@example.com")
        .await
        .unwrap()
        .expect("code should be stored");
    assert_eq!(stored.code.len(), 6);
    assert!(result.expires_at > Utc::now());

    let sent = f.mail.sent.read().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "user@example.com");
    assert_eq!(sent[0].code, stored.code);
    assert_eq!(sent[0].purpose, Purpose::Registration);
    assert!(f.sms.sent.read().await.is_empty());
}

#[tokio::test]
async fn send_code_routes_phone_contacts_to_sms() {
    let f = fixture();

    f.service
        .send_code("13812345678", Purpose::PasswordReset)
        .await
        .unwrap();

    let sent = f.sms.sent.read().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "13812345678");
    assert_eq!(sent[0].purpose, Purpose::PasswordReset);
    assert!(f.mail.sent.read().await.is_empty());
}

#[tokio::test]
async fn send_code_rejects_invalid_contacts() {
    let f = fixture();

    let result = f.service.send_code("not-a-contact", Purpose::Registration).await;
    assert!(matches!(result, Err(DomainError::InvalidFormat { .. })));
    assert!(f.repository.is_empty().await);
    assert!(f.mail.sent.read().await.is_empty());
}

#[tokio::test]
async fn second_issuance_within_cooldown_is_rate_limited() {
    let f = fixture();

    f.service
        .send_code("user@example.com", Purpose::Registration)
        .await
        .unwrap();
    let first = f
        .repository
        .find_by_contact("user@example.com")
        .await
        .unwrap()
        .unwrap();

    let result = f
        .service
        .send_code("user@example.com", Purpose::Registration)
        .await;
    match result {
        Err(DomainError::RateLimited { retry_after_secs }) => {
            assert!(retry_after_secs > 0 && retry_after_secs <= 60);
        }
        other => panic!("expected RateLimited, got {:?}", other.map(|_| ())),
    }

    // The stored code is untouched and only one message went out
    let second = f
        .repository
        .find_by_contact("user@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(f.mail.sent.read().await.len(), 1);
}

#[tokio::test]
async fn issuance_after_cooldown_overwrites_previous_code() {
    let f = fixture();

    let mut old = VerificationCode::new("user@example.com".to_string());
    old.created_at = Utc::now() - Duration::seconds(61);
    f.repository.upsert(old.clone()).await.unwrap();

    f.service
        .send_code("user@example.com", Purpose::Registration)
        .await
        .unwrap();

    let current = f
        .repository
        .find_by_contact("user@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(current.created_at > old.created_at);
    assert_eq!(f.repository.len().await, 1);
}

#[tokio::test]
async fn delivery_failure_keeps_stored_code_valid() {
    let f = fixture();
    f.mail.set_fail(true);

    let result = f
        .service
        .send_code("user@example.com", Purpose::Registration)
        .await;
    assert!(matches!(result, Err(DomainError::DeliveryFailed { .. })));

    // The row was not rolled back; the code still verifies
    let stored = f
        .repository
        .find_by_contact("user@example.com")
        .await
        .unwrap()
        .expect("code should survive the failed delivery");
    let outcome = f
        .service
        .verify_code("user@example.com", &stored.code)
        .await
        .unwrap();
    assert_eq!(outcome, VerifyOutcome::Valid);
}

#[tokio::test]
async fn valid_code_verifies_exactly_once() {
    let f = fixture();

    f.service
        .send_code("user@example.com", Purpose::Registration)
        .await
        .unwrap();
    let stored = f
        .repository
        .find_by_contact("user@example.com")
        .await
        .unwrap()
        .unwrap();

    let first = f
        .service
        .verify_code("user@example.com", &stored.code)
        .await
        .unwrap();
    assert!(first.is_valid());

    let second = f
        .service
        .verify_code("user@example.com", &stored.code)
        .await
        .unwrap();
    assert_eq!(second, VerifyOutcome::NotFound);
}

#[tokio::test]
async fn expired_code_is_consumed_and_reported() {
    let f = fixture();

    let mut code = VerificationCode::new("13812345678".to_string());
    code.expires_at = Utc::now() - Duration::seconds(1);
    f.repository.upsert(code.clone()).await.unwrap();

    let outcome = f
        .service
        .verify_code("13812345678", &code.code)
        .await
        .unwrap();
    assert_eq!(outcome, VerifyOutcome::Expired);

    // The expired row was deleted; the same code now reports not-found
    let again = f
        .service
        .verify_code("13812345678", &code.code)
        .await
        .unwrap();
    assert_eq!(again, VerifyOutcome::NotFound);
}

#[tokio::test]
async fn wrong_code_consumes_nothing() {
    let f = fixture();

    f.service
        .send_code("user@example.com", Purpose::Registration)
        .await
        .unwrap();
    let stored = f
        .repository
        .find_by_contact("user@example.com")
        .await
        .unwrap()
        .unwrap();

    let wrong = if stored.code == "000000" { "000001" } else { "000000" };
    let outcome = f
        .service
        .verify_code("user@example.com", wrong)
        .await
        .unwrap();
    assert_eq!(outcome, VerifyOutcome::NotFound);

    // The live row is still there and the right code still works
    let outcome = f
        .service
        .verify_code("user@example.com", &stored.code)
        .await
        .unwrap();
    assert!(outcome.is_valid());
}

#[tokio::test]
async fn malformed_code_short_circuits_without_store_hit() {
    let f = fixture();

    let outcome = f.service.verify_code("user@example.com", "12ab!").await.unwrap();
    assert_eq!(outcome, VerifyOutcome::NotFound);
}

#[tokio::test]
async fn code_pending_reflects_live_rows_only() {
    let f = fixture();

    assert!(!f.service.code_pending("user@example.com").await.unwrap());

    f.service
        .send_code("user@example.com", Purpose::Registration)
        .await
        .unwrap();
    assert!(f.service.code_pending("user@example.com").await.unwrap());

    let mut expired = VerificationCode::new("13812345678".to_string());
    expired.expires_at = Utc::now() - Duration::seconds(1);
    f.repository.upsert(expired).await.unwrap();
    assert!(!f.service.code_pending("13812345678").await.unwrap());
}

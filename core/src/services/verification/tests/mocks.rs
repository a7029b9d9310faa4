//! Mock transports for verification service tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::services::verification::traits::{MailTransport, SmsTransport};
use crate::services::verification::types::Purpose;

/// A message captured by a mock transport
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub to: String,
    pub code: String,
    pub purpose: Purpose,
}

/// Mock mail transport recording every send
pub struct MockMail {
    pub sent: Arc<RwLock<Vec<SentMessage>>>,
    fail: AtomicBool,
}

impl MockMail {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            fail: AtomicBool::new(false),
        }
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl MailTransport for MockMail {
    async fn send_verification_code(
        &self,
        to: &str,
        code: &str,
        purpose: Purpose,
    ) -> Result<String, String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("smtp connection refused".to_string());
        }
        self.sent.write().await.push(SentMessage {
            to: to.to_string(),
            code: code.to_string(),
            purpose,
        });
        Ok(format!("mail-{}", self.sent.read().await.len()))
    }
}

/// Mock SMS transport recording every send
pub struct MockSms {
    pub sent: Arc<RwLock<Vec<SentMessage>>>,
    fail: AtomicBool,
}

impl MockSms {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            fail: AtomicBool::new(false),
        }
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SmsTransport for MockSms {
    async fn send_verification_code(
        &self,
        phone: &str,
        code: &str,
        purpose: Purpose,
    ) -> Result<String, String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("provider rejected request".to_string());
        }
        self.sent.write().await.push(SentMessage {
            to: phone.to_string(),
            code: code.to_string(),
            purpose,
        });
        Ok(format!("sms-{}", self.sent.read().await.len()))
    }
}

//! Mock implementation of VerificationCodeRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;

use super::trait_::VerificationCodeRepository;

/// In-memory verification code repository for testing
pub struct MockVerificationCodeRepository {
    codes: Arc<RwLock<HashMap<String, VerificationCode>>>,
    fail_writes: AtomicBool,
}

impl MockVerificationCodeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make subsequent writes fail with a store error
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of rows currently stored
    pub async fn len(&self) -> usize {
        self.codes.read().await.len()
    }

    /// Whether the store holds no rows
    pub async fn is_empty(&self) -> bool {
        self.codes.read().await.is_empty()
    }
}

impl Default for MockVerificationCodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationCodeRepository for MockVerificationCodeRepository {
    async fn upsert(&self, code: VerificationCode) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable {
                message: "mock write failure".to_string(),
            });
        }
        let mut codes = self.codes.write().await;
        codes.insert(code.contact.clone(), code);
        Ok(())
    }

    async fn find_by_contact(
        &self,
        contact: &str,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes.get(contact).cloned())
    }

    async fn find_by_contact_and_code(
        &self,
        contact: &str,
        code: &str,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes
            .get(contact)
            .filter(|row| row.code == code)
            .cloned())
    }

    async fn delete(&self, contact: &str) -> Result<bool, DomainError> {
        let mut codes = self.codes.write().await;
        Ok(codes.remove(contact).is_some())
    }
}

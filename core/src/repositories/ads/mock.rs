//! Mock implementation of AdRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::advertisement::Advertisement;
use crate::errors::DomainError;

use super::trait_::AdRepository;

/// In-memory advertisement repository for testing
pub struct MockAdRepository {
    ads: Arc<RwLock<HashMap<String, Advertisement>>>,
    fail_all: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockAdRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            ads: Arc::new(RwLock::new(HashMap::new())),
            fail_all: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every operation fail with a store error
    pub fn set_fail_all(&self, fail: bool) {
        self.fail_all.store(fail, Ordering::SeqCst);
    }

    /// Make write operations fail while reads keep working
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of stored advertisements
    pub async fn len(&self) -> usize {
        self.ads.read().await.len()
    }

    fn store_error() -> DomainError {
        DomainError::StoreUnavailable {
            message: "mock store failure".to_string(),
        }
    }
}

impl Default for MockAdRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdRepository for MockAdRepository {
    async fn list_recent(&self) -> Result<Vec<Advertisement>, DomainError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(Self::store_error());
        }
        let ads = self.ads.read().await;
        let mut list: Vec<Advertisement> = ads.values().cloned().collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    async fn create(&self, ad: Advertisement) -> Result<Advertisement, DomainError> {
        if self.fail_all.load(Ordering::SeqCst) || self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::store_error());
        }
        let mut ads = self.ads.write().await;
        ads.insert(ad.id.clone(), ad.clone());
        Ok(ad)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Advertisement>, DomainError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(Self::store_error());
        }
        let ads = self.ads.read().await;
        Ok(ads.get(id).cloned())
    }

    async fn update_link(
        &self,
        id: &str,
        link: &str,
    ) -> Result<Option<Advertisement>, DomainError> {
        if self.fail_all.load(Ordering::SeqCst) || self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::store_error());
        }
        let mut ads = self.ads.write().await;
        match ads.get_mut(id) {
            Some(ad) => {
                ad.link = link.to_string();
                Ok(Some(ad.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        if self.fail_all.load(Ordering::SeqCst) || self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::store_error());
        }
        let mut ads = self.ads.write().await;
        Ok(ads.remove(id).is_some())
    }
}

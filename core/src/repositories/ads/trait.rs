//! Advertisement repository trait.

use async_trait::async_trait;

use crate::domain::entities::advertisement::Advertisement;
use crate::errors::DomainError;

/// Repository trait for advertisement persistence
#[async_trait]
pub trait AdRepository: Send + Sync {
    /// List all advertisements, newest first
    async fn list_recent(&self) -> Result<Vec<Advertisement>, DomainError>;

    /// Persist a new advertisement and return the stored record
    async fn create(&self, ad: Advertisement) -> Result<Advertisement, DomainError>;

    /// Find an advertisement by id
    async fn find_by_id(&self, id: &str) -> Result<Option<Advertisement>, DomainError>;

    /// Update the destination link of an advertisement.
    ///
    /// # Returns
    /// * `Ok(Some(ad))` - updated record
    /// * `Ok(None)` - no advertisement with that id
    async fn update_link(
        &self,
        id: &str,
        link: &str,
    ) -> Result<Option<Advertisement>, DomainError>;

    /// Delete an advertisement by id.
    ///
    /// # Returns
    /// * `Ok(true)` - a record was deleted
    /// * `Ok(false)` - no record existed
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}

//! Advertisement CRUD with a built-in fallback list.
//!
//! Listing never fails the caller: store trouble and an empty store both
//! degrade to the fixed house banners. Creation degrades the same way by
//! synthesizing a locally-timestamped record when the store write fails.

use std::sync::Arc;
use tracing;

use crate::domain::entities::advertisement::Advertisement;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AdRepository;

/// Advertisement directory service
pub struct AdService<R: AdRepository> {
    repository: Arc<R>,
}

impl<R: AdRepository> AdService<R> {
    /// Create a new advertisement service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List advertisements, newest first.
    ///
    /// Returns the fallback set when the store errors or holds no records.
    /// The fallback entries are never persisted.
    pub async fn list(&self) -> Vec<Advertisement> {
        match self.repository.list_recent().await {
            Ok(ads) if !ads.is_empty() => ads,
            Ok(_) => {
                tracing::info!(
                    event = "ads_fallback",
                    reason = "empty",
                    "Ad store is empty, serving fallback banners"
                );
                Advertisement::fallback_set()
            }
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    event = "ads_fallback",
                    reason = "store_error",
                    "Ad store unavailable, serving fallback banners"
                );
                Advertisement::fallback_set()
            }
        }
    }

    /// Create an advertisement.
    ///
    /// Both `image_url` and `link` are required. When the store write
    /// fails the record is synthesized locally with a fresh timestamp and
    /// returned anyway.
    pub async fn create(&self, image_url: &str, link: &str) -> DomainResult<Advertisement> {
        if image_url.trim().is_empty() {
            return Err(DomainError::MissingField {
                field: "image_url".to_string(),
            });
        }
        if link.trim().is_empty() {
            return Err(DomainError::MissingField {
                field: "link".to_string(),
            });
        }

        let ad = Advertisement::new(image_url.trim(), link.trim());
        match self.repository.create(ad.clone()).await {
            Ok(created) => Ok(created),
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    ad_id = %ad.id,
                    event = "ad_create_degraded",
                    "Ad store write failed, returning synthesized record"
                );
                Ok(ad)
            }
        }
    }

    /// Fetch one advertisement by id
    pub async fn get(&self, id: &str) -> DomainResult<Advertisement> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("advertisement {}", id),
            })
    }

    /// Update the destination link of an advertisement
    pub async fn update_link(&self, id: &str, link: &str) -> DomainResult<Advertisement> {
        if link.trim().is_empty() {
            return Err(DomainError::MissingField {
                field: "link".to_string(),
            });
        }

        self.repository
            .update_link(id, link.trim())
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("advertisement {}", id),
            })
    }

    /// Delete an advertisement by id, unconditionally
    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        let deleted = self.repository.delete(id).await?;
        tracing::info!(ad_id = id, deleted, event = "ad_deleted", "Ad delete handled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockAdRepository;

    fn service(repo: Arc<MockAdRepository>) -> AdService<MockAdRepository> {
        AdService::new(repo)
    }

    #[tokio::test]
    async fn empty_store_lists_the_three_fallback_banners() {
        let svc = service(Arc::new(MockAdRepository::new()));

        let ads = svc.list().await;
        let ids: Vec<&str> = ads.iter().map(|ad| ad.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn store_error_also_lists_the_fallback_banners() {
        let repo = Arc::new(MockAdRepository::new());
        repo.set_fail_all(true);
        let svc = service(repo);

        let ads = svc.list().await;
        assert_eq!(ads.len(), 3);
        assert_eq!(ads[0].id, "1");
    }

    #[tokio::test]
    async fn stored_records_shadow_the_fallback() {
        let repo = Arc::new(MockAdRepository::new());
        let svc = service(repo.clone());

        let created = svc.create("/img/a.png", "https://a.example.com").await.unwrap();
        let ads = svc.list().await;
        assert_eq!(ads.len(), 1);
        assert_eq!(ads[0].id, created.id);
    }

    #[tokio::test]
    async fn create_requires_both_fields() {
        let repo = Arc::new(MockAdRepository::new());
        let svc = service(repo.clone());

        let err = svc.create("/img/a.png", "").await.unwrap_err();
        assert!(matches!(err, DomainError::MissingField { ref field } if field == "link"));

        let err = svc.create("  ", "https://a.example.com").await.unwrap_err();
        assert!(matches!(err, DomainError::MissingField { ref field } if field == "image_url"));

        // Nothing was persisted by the rejected calls
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn create_synthesizes_record_when_store_write_fails() {
        let repo = Arc::new(MockAdRepository::new());
        repo.set_fail_writes(true);
        let svc = service(repo.clone());

        let ad = svc.create("/img/a.png", "https://a.example.com").await.unwrap();
        assert!(!ad.id.is_empty());
        assert_eq!(ad.link, "https://a.example.com");
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn get_and_update_and_delete_round_trip() {
        let repo = Arc::new(MockAdRepository::new());
        let svc = service(repo.clone());

        let created = svc.create("/img/a.png", "https://a.example.com").await.unwrap();

        let fetched = svc.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);

        let updated = svc
            .update_link(&created.id, "https://b.example.com")
            .await
            .unwrap();
        assert_eq!(updated.link, "https://b.example.com");
        assert_eq!(updated.id, created.id);

        svc.delete(&created.id).await.unwrap();
        assert!(matches!(
            svc.get(&created.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn update_requires_link_and_existing_record() {
        let svc = service(Arc::new(MockAdRepository::new()));

        let err = svc.update_link("missing", "").await.unwrap_err();
        assert!(matches!(err, DomainError::MissingField { .. }));

        let err = svc
            .update_link("missing", "https://a.example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_is_unconditional() {
        let svc = service(Arc::new(MockAdRepository::new()));
        // Deleting an id that never existed is not an error
        assert!(svc.delete("ghost").await.is_ok());
    }
}

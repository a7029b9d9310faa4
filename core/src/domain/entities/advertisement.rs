//! Advertisement banner entity and the built-in fallback set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rotating advertisement banner shown on the directory pages.
///
/// `id` is immutable once created; only `link` may change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advertisement {
    /// Unique identifier
    pub id: String,

    /// Banner image URL
    pub image_url: String,

    /// Destination the banner links to
    pub link: String,

    /// Creation timestamp, listing is newest-first by this field
    pub created_at: DateTime<Utc>,
}

impl Advertisement {
    /// Create a new advertisement with a generated id and current timestamp
    pub fn new(image_url: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            image_url: image_url.into(),
            link: link.into(),
            created_at: Utc::now(),
        }
    }

    /// The built-in house banners served when the store yields nothing.
    ///
    /// These are never persisted.
    pub fn fallback_set() -> Vec<Advertisement> {
        let now = Utc::now();
        vec![
            Advertisement {
                id: "1".to_string(),
                image_url: "/static/banners/submit-your-app.png".to_string(),
                link: "/submit".to_string(),
                created_at: now,
            },
            Advertisement {
                id: "2".to_string(),
                image_url: "/static/banners/weekly-rankings.png".to_string(),
                link: "/rankings".to_string(),
                created_at: now,
            },
            Advertisement {
                id: "3".to_string(),
                image_url: "/static/banners/become-a-sponsor.png".to_string(),
                link: "/sponsor".to_string(),
                created_at: now,
            },
        ]
    }
}

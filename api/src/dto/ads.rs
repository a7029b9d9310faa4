//! DTOs for the advertisement endpoints
//!
//! Create/update fields are optional at the wire level so a missing field
//! surfaces as a domain MissingField error instead of a deserialization
//! failure.

use serde::{Deserialize, Serialize};

/// Request body for POST /ads
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdRequest {
    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub link: Option<String>,
}

/// Request body for PUT /ads/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAdRequest {
    #[serde(default)]
    pub link: Option<String>,
}

/// Response body for DELETE /ads/{id}
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAdResponse {
    pub message: String,
}

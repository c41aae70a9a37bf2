//! Generic API response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::UserPage;

/// Successful listing response; the page is wrapped in `data`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserPageResponse {
    pub data: UserPage,
}

impl From<UserPage> for UserPageResponse {
    fn from(data: UserPage) -> Self {
        Self { data }
    }
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}

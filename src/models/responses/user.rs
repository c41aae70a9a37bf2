//! User listing response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{PaginationMetadata, User};

/// A user annotated with the number of posts they authored.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// User's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// User's display name
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// Number of posts owned by the user
    #[schema(example = 3)]
    pub post_count: u64,
}

impl UserSummary {
    pub fn new(user: User, post_count: u64) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            post_count,
        }
    }
}

/// One page of user summaries with its pagination metadata.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct UserPage {
    pub users: Vec<UserSummary>,
    pub pagination: PaginationMetadata,
}

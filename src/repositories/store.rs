//! Store interfaces consumed by the service layer.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::errors::ApiError;
use crate::models::User;

/// Read access to the user collection.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Count every user document.
    async fn count_all(&self) -> Result<u64, ApiError>;

    /// Fetch up to `limit` users after skipping `skip`, ordered by `_id`.
    ///
    /// A negative `skip` or a non-positive `limit` is a store error.
    async fn find_page(&self, skip: i64, limit: i64) -> Result<Vec<User>, ApiError>;
}

/// Read access to the post collection.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Count posts per owner for the given owner ids.
    ///
    /// Owners without posts are absent from the returned map.
    async fn count_grouped_by_owner(
        &self,
        owner_ids: &[ObjectId],
    ) -> Result<HashMap<ObjectId, u64>, ApiError>;

    /// Count posts owned by a single user.
    async fn count_by_owner(&self, owner_id: ObjectId) -> Result<u64, ApiError>;
}

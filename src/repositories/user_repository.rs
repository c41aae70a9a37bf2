//! User repository for MongoDB operations on the users collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, from_document, Document};
use mongodb::{Collection, Database};

use crate::constants::COLLECTION_USERS;
use crate::errors::ApiError;
use crate::models::User;
use crate::repositories::UserStore;

/// Repository for user-related database operations.
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// Create a new UserRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }
}

/// Build the page window pipeline. The server validates `skip` and `limit`.
fn page_pipeline(skip: i64, limit: i64) -> Vec<Document> {
    vec![
        doc! { "$sort": { "_id": 1 } },
        doc! { "$skip": skip },
        doc! { "$limit": limit },
    ]
}

#[async_trait]
impl UserStore for UserRepository {
    async fn count_all(&self) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn find_page(&self, skip: i64, limit: i64) -> Result<Vec<User>, ApiError> {
        debug!("Repository: Finding users page skip={} limit={}", skip, limit);
        let cursor = self.collection.aggregate(page_pipeline(skip, limit)).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        documents
            .into_iter()
            .map(|document| from_document(document).map_err(ApiError::from))
            .collect()
    }
}

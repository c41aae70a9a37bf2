//! Post repository for MongoDB operations on the posts collection.

use std::collections::HashMap;

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::{COLLECTION_POSTS, ERR_MALFORMED_POST_COUNT, FIELD_POST_OWNER};
use crate::errors::ApiError;
use crate::models::Post;
use crate::repositories::PostStore;

/// Repository for post-related database operations.
pub struct PostRepository {
    collection: Collection<Post>,
}

impl PostRepository {
    /// Create a new PostRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_POSTS),
        }
    }

    /// Create database indexes for the post owner reference.
    ///
    /// Called once during startup so the grouped count can use an index.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for posts collection...");

        let mut keys = Document::new();
        keys.insert(FIELD_POST_OWNER, 1);
        self.collection
            .create_index(IndexModel::builder().keys(keys).build())
            .await?;

        info!("Database indexes created successfully");
        Ok(())
    }
}

fn owner_filter(owner: impl Into<Bson>) -> Document {
    let mut filter = Document::new();
    filter.insert(FIELD_POST_OWNER, owner);
    filter
}

/// Match posts of the given owners, then group them per owner into a count.
fn grouped_count_pipeline(owner_ids: &[ObjectId]) -> Vec<Document> {
    vec![
        doc! { "$match": owner_filter(doc! { "$in": owner_ids.to_vec() }) },
        doc! {
            "$group": {
                "_id": format!("${}", FIELD_POST_OWNER),
                "count": { "$sum": 1 },
            }
        },
    ]
}

fn parse_group(group: &Document) -> Result<(ObjectId, u64), ApiError> {
    let malformed = || ApiError::Decode(ERR_MALFORMED_POST_COUNT.to_string());

    let owner = group.get_object_id("_id").map_err(|_| malformed())?;
    let count = match group.get("count") {
        Some(Bson::Int32(n)) => u64::try_from(*n).map_err(|_| malformed())?,
        Some(Bson::Int64(n)) => u64::try_from(*n).map_err(|_| malformed())?,
        _ => return Err(malformed()),
    };

    Ok((owner, count))
}

#[async_trait]
impl PostStore for PostRepository {
    async fn count_grouped_by_owner(
        &self,
        owner_ids: &[ObjectId],
    ) -> Result<HashMap<ObjectId, u64>, ApiError> {
        if owner_ids.is_empty() {
            return Ok(HashMap::new());
        }

        debug!("Repository: Counting posts for {} owners", owner_ids.len());
        let cursor = self
            .collection
            .aggregate(grouped_count_pipeline(owner_ids))
            .await?;
        let groups: Vec<Document> = cursor.try_collect().await?;

        groups.iter().map(parse_group).collect()
    }

    async fn count_by_owner(&self, owner_id: ObjectId) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(owner_filter(owner_id)).await?)
    }
}

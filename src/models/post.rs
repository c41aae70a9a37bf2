use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Post document stored in MongoDB. `user_id` references the author's `_id`.
///
/// Only the identity and owner reference are mapped; content is not needed
/// for counting.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "userId")]
    pub user_id: ObjectId,
}

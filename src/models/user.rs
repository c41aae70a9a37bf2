use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User document stored in MongoDB.
///
/// Only the fields the listing needs are mapped; other profile fields on the
/// stored document are ignored on deserialization.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

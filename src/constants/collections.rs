//! MongoDB collection and field names.

pub const COLLECTION_USERS: &str = "users";
pub const COLLECTION_POSTS: &str = "posts";

/// Field on a post document referencing the owning user's `_id`.
pub const FIELD_POST_OWNER: &str = "userId";

//! In-memory stores for exercising services and handlers without MongoDB.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::errors::ApiError;
use crate::models::{Post, User};
use crate::repositories::{PostStore, UserStore};

// Mirror the server's rejection of invalid `$skip` and `$limit` stages.
pub const ERR_NEGATIVE_SKIP: &str = "$skip must be a non-negative integer";
pub const ERR_NON_POSITIVE_LIMIT: &str = "the limit must be positive";

/// Deterministic ObjectId whose ordering follows `n`.
pub fn object_id(n: u32) -> ObjectId {
    let mut bytes = [0u8; 12];
    bytes[8..].copy_from_slice(&n.to_be_bytes());
    ObjectId::from_bytes(bytes)
}

pub fn user(n: u32) -> User {
    User {
        id: object_id(n),
        name: Some(format!("User {}", n)),
    }
}

pub fn post(n: u32, owner: ObjectId) -> Post {
    Post {
        id: object_id(100_000 + n),
        user_id: owner,
    }
}

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Vec<User>,
    failure: Option<String>,
}

impl InMemoryUserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            failure: None,
        }
    }

    /// A store whose every call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            users: Vec::new(),
            failure: Some(message.to_string()),
        }
    }

    fn check(&self) -> Result<(), ApiError> {
        match &self.failure {
            Some(message) => Err(ApiError::Database(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn count_all(&self) -> Result<u64, ApiError> {
        self.check()?;
        Ok(self.users.len() as u64)
    }

    async fn find_page(&self, skip: i64, limit: i64) -> Result<Vec<User>, ApiError> {
        self.check()?;
        let skip =
            usize::try_from(skip).map_err(|_| ApiError::Database(ERR_NEGATIVE_SKIP.to_string()))?;
        if limit <= 0 {
            return Err(ApiError::Database(ERR_NON_POSITIVE_LIMIT.to_string()));
        }
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        let mut users = self.users.clone();
        users.sort_by_key(|u| u.id);
        Ok(users.into_iter().skip(skip).take(limit).collect())
    }
}

#[derive(Default)]
pub struct InMemoryPostStore {
    posts: Vec<Post>,
    failure: Option<String>,
}

impl InMemoryPostStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            posts: Vec::new(),
            failure: Some(message.to_string()),
        }
    }

    fn check(&self) -> Result<(), ApiError> {
        match &self.failure {
            Some(message) => Err(ApiError::Database(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn count_grouped_by_owner(
        &self,
        owner_ids: &[ObjectId],
    ) -> Result<HashMap<ObjectId, u64>, ApiError> {
        self.check()?;
        let owners: HashSet<&ObjectId> = owner_ids.iter().collect();

        let mut counts = HashMap::new();
        for post in self.posts.iter().filter(|p| owners.contains(&p.user_id)) {
            *counts.entry(post.user_id).or_insert(0) += 1;
        }
        Ok(counts)
    }

    async fn count_by_owner(&self, owner_id: ObjectId) -> Result<u64, ApiError> {
        self.check()?;
        Ok(self.posts.iter().filter(|p| p.user_id == owner_id).count() as u64)
    }
}

//! Repository layer for database operations.
//!
//! Services depend on the [`UserStore`] and [`PostStore`] traits rather than on
//! MongoDB directly, so the listing logic can run against any backing store.

pub mod post_repository;
pub mod store;
pub mod user_repository;

#[cfg(test)]
pub mod memory;

pub use post_repository::PostRepository;
pub use store::{PostStore, UserStore};
pub use user_repository::UserRepository;

//! Request models for API endpoints.

pub mod pagination;

pub use pagination::*;

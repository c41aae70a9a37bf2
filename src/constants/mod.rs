//! Application constants module.
//!
//! This module centralizes constant strings and numbers used throughout the
//! application: collection names, pagination defaults, and response messages.

pub mod collections;
pub mod messages;
pub mod pagination;

pub use collections::*;
pub use messages::*;
pub use pagination::*;

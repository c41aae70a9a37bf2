//! Data models organized by type.

pub mod post;
pub mod requests;
pub mod responses;
pub mod user;

pub use post::*;
pub use requests::*;
pub use responses::*;
pub use user::*;

//! Services organized by domain concern.

pub mod user_summary_service;

pub use user_summary_service::UserSummaryService;

//! Message constants used in responses and errors.

// Health
pub const MSG_HEALTH_STATUS: &str = "OK";
pub const MSG_SERVER_RUNNING: &str = "Server is running";

// Store errors
pub const ERR_MALFORMED_POST_COUNT: &str = "Malformed post count group in aggregation result";

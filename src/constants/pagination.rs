//! Pagination constants for list endpoints.

/// Default number of items per page when not specified in the request.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Default starting page number.
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

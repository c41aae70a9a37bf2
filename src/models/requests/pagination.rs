//! Pagination request models.

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::utils::parse_leading_int;

/// Raw pagination query parameters, kept as strings so that malformed values
/// fall back to defaults instead of rejecting the request.
#[derive(Debug, Default)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    /// Collect `page` and `limit` from decoded query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };

        Self {
            page: first("page"),
            limit: first("limit"),
        }
    }

    /// Coerce the raw values into a [`PageRequest`].
    ///
    /// Missing, non-numeric and zero values take the defaults. Negative values
    /// are passed through untouched.
    pub fn to_page_request(&self) -> PageRequest {
        PageRequest {
            page: coerce(self.page.as_deref(), DEFAULT_PAGE_NUMBER),
            limit: coerce(self.limit.as_deref(), DEFAULT_PAGE_SIZE),
        }
    }
}

fn coerce(value: Option<&str>, default: i64) -> i64 {
    match value.and_then(parse_leading_int) {
        Some(0) | None => default,
        Some(n) => n,
    }
}

/// A normalized page window request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Number of documents preceding this page.
    pub fn skip(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}

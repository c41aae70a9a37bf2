//! Pagination response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::PageRequest;

/// Position of a page within the full user collection.
///
/// Every field is derived from `total_docs`, `page` and `limit`. A page past
/// the end is not rejected; the metadata is still computed from the formulas.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    /// Total number of users
    #[schema(example = 25)]
    pub total_docs: u64,
    /// Items per page
    #[schema(example = 10)]
    pub limit: i64,
    /// Current page number
    #[schema(example = 1)]
    pub page: i64,
    /// Total number of pages
    #[schema(example = 3)]
    pub total_pages: i64,
    /// One-based position of the first item on this page
    #[schema(example = 1)]
    pub paging_counter: i64,
    pub has_prev_page: bool,
    pub has_next_page: bool,
    pub prev_page: Option<i64>,
    pub next_page: Option<i64>,
}

impl PaginationMetadata {
    pub fn new(total_docs: u64, request: PageRequest) -> Self {
        let PageRequest { page, limit } = request;
        let total_pages = (total_docs as f64 / limit as f64).ceil() as i64;
        let has_prev_page = page > 1;
        let has_next_page = page < total_pages;

        Self {
            total_docs,
            limit,
            page,
            total_pages,
            paging_counter: request.skip().saturating_add(1),
            has_prev_page,
            has_next_page,
            prev_page: has_prev_page.then(|| page - 1),
            next_page: has_next_page.then(|| page + 1),
        }
    }
}

//! User listing handler.

use actix_web::{web, HttpResponse};
use log::{info, warn};

use crate::errors::ApiError;
use crate::models::{PageQuery, UserPageResponse};
use crate::services::UserSummaryService;

/// List users with their post counts, one page at a time
///
/// Failures are reported with status 200 and an `{"error": ...}` body.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(
        ("page" = Option<String>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<String>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of users with post counts, or an error body", body = UserPageResponse)
    )
)]
pub async fn get_users_with_post_count(
    service: web::Data<UserSummaryService>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, ApiError> {
    let request = PageQuery::from_pairs(&query).to_page_request();

    let page = service.get_page(request).await.map_err(|err| {
        warn!(
            "Listing users failed for page={} limit={}: {}",
            request.page, request.limit, err
        );
        err
    })?;

    info!(
        "Listed {} users (page {} of {})",
        page.users.len(),
        page.pagination.page,
        page.pagination.total_pages
    );
    Ok(HttpResponse::Ok().json(UserPageResponse::from(page)))
}

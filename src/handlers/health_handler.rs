use actix_web::HttpResponse;

use crate::constants::{MSG_HEALTH_STATUS, MSG_SERVER_RUNNING};
use crate::models::HealthResponse;

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: MSG_HEALTH_STATUS.to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::models::{HealthResponse, PaginationMetadata, UserPage, UserPageResponse, UserSummary};

/// OpenAPI documentation for the user listing API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Post Summary API",
        version = "0.1.0",
        description = "Paginated listing of users annotated with the number of posts each one authored.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User listing with post counts")
    ),
    paths(
        crate::handlers::get_users_with_post_count,
        crate::handlers::health_check
    ),
    components(
        schemas(
            UserSummary,
            PaginationMetadata,
            UserPage,
            UserPageResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;

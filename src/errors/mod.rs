use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Body returned for any failure while serving a request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Failure message
    #[schema(example = "Kind: Server selection timeout")]
    pub error: String,
}

/// Every failure collapses to a message. The listing endpoint reports failures
/// with a 200 status and an `{"error": ...}` body, so the variants only exist
/// for logging and conversion purposes.
#[derive(Debug)]
pub enum ApiError {
    Database(String),
    Decode(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Database(message) | ApiError::Decode(message) => message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Ok().json(ErrorResponse {
            error: self.message().to_string(),
        })
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::Database(err.to_string())
    }
}

impl From<mongodb::bson::de::Error> for ApiError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

//! Error type shared by every HTTP handler.
//!
//! Handlers return `Result<_, ApiError>`; the `IntoResponse` implementation
//! turns each variant into a status code and an [`ErrorResponse`] body.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::{error, warn};

use crate::schemas::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The row addressed by the request does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The request body could not be turned into the expected typed request:
    /// malformed JSON, a missing required key, a wrong type or an unknown enum value.
    #[error("{0}")]
    BadRequest(String),
    /// A unique column (name, email or primary key) already holds this value.
    #[error("{0}")]
    Conflict(String),
    /// Any other persistence failure.
    #[error(transparent)]
    Store(DbErr),
}

impl ApiError {
    pub fn not_found(resource: &str, id: i32) -> Self {
        ApiError::NotFound(format!("{} {} not found", resource, id))
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Conflict(_) => "ALREADY_EXISTS",
            ApiError::Store(_) => "DATABASE_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => ApiError::Conflict(format!(
                "A record with the same unique value already exists: {}",
                detail
            )),
            _ => ApiError::Store(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Store(err) => {
                error!("Database error: {}", err);
                "Internal server error".to_string()
            }
            other => {
                warn!("Request failed with {}: {}", status, other);
                other.to_string()
            }
        };

        let body = ErrorResponse {
            error: message,
            code: self.code().to_string(),
            success: false,
        };

        (status, Json(body)).into_response()
    }
}

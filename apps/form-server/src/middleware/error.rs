//! Error handling - every failure becomes a bare 500.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use magdalene_core::{DomainError, RepoError, SchemaError};
use magdalene_shared::INTERNAL_ERROR;

/// Application-level error type.
///
/// The cause is logged; the client only ever sees `Internal Server Error`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed request body: {0}")]
    Payload(String),

    #[error(transparent)]
    Validation(#[from] SchemaError),

    #[error(transparent)]
    Storage(#[from] RepoError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Payload(_) | AppError::Validation(_) => {
                tracing::error!(error = %self, "Submission rejected");
            }
            AppError::Storage(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "Submission failed");
            }
        }

        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(INTERNAL_ERROR)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(e) => AppError::Validation(e),
            DomainError::Storage(e) => AppError::Storage(e),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

//! Domain-level error types.

use thiserror::Error;

use crate::ports::AuthError;
use crate::schema::SchemaError;

/// Domain errors - submission handling failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] SchemaError),

    #[error(transparent)]
    Storage(#[from] RepoError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        DomainError::Internal(err.to_string())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<SchemaError> for RepoError {
    fn from(err: SchemaError) -> Self {
        RepoError::Constraint(err.to_string())
    }
}

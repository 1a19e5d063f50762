use async_trait::async_trait;

use crate::domain::Credential;
use crate::error::RepoError;

/// Write side of one collection. Records are only ever appended.
#[async_trait]
pub trait SubmissionRepository<T>: Send + Sync {
    /// Insert a new record. Either one record is created or none is.
    async fn insert(&self, record: T) -> Result<T, RepoError>;
}

/// Credential collection - the only one that is read back.
#[async_trait]
pub trait CredentialRepository: SubmissionRepository<Credential> {
    /// Every credential stored under exactly this email (case-sensitive).
    async fn find_by_email(&self, email: &str) -> Result<Vec<Credential>, RepoError>;
}

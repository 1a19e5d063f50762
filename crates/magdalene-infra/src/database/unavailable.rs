//! Store used when the configured database could not be reached at startup.

use std::sync::Arc;

use async_trait::async_trait;

use magdalene_core::domain::Credential;
use magdalene_core::error::RepoError;
use magdalene_core::ports::{CredentialRepository, SubmissionRepository};
use magdalene_core::service::SubmissionStores;

/// Fails every read and write with a connection error.
///
/// Lets the server keep serving pages while submissions report failure.
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn stores(reason: impl Into<String>) -> SubmissionStores {
        let store = Arc::new(Self::new(reason));
        SubmissionStores {
            credentials: store.clone(),
            purchases: store.clone(),
            bookings: store.clone(),
            quotes: store,
        }
    }

    fn error(&self) -> RepoError {
        RepoError::Connection(self.reason.clone())
    }
}

#[async_trait]
impl<T: Send + 'static> SubmissionRepository<T> for UnavailableStore {
    async fn insert(&self, _record: T) -> Result<T, RepoError> {
        Err(self.error())
    }
}

#[async_trait]
impl CredentialRepository for UnavailableStore {
    async fn find_by_email(&self, _email: &str) -> Result<Vec<Credential>, RepoError> {
        Err(self.error())
    }
}

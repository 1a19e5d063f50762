//! In-memory collections - used when no database is configured, and in tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use magdalene_core::domain::{Booking, Credential, PurchaseRequest, QuoteRequest};
use magdalene_core::error::RepoError;
use magdalene_core::ports::{CredentialRepository, SubmissionRepository};
use magdalene_core::schema::Record;
use magdalene_core::service::SubmissionStores;

use super::mask_email;

/// Append-only collection held in process memory.
///
/// Writes are checked against the record's schema just like the database
/// tables check their constraints. Data is lost on process restart.
pub struct InMemoryCollection<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Snapshot of every stored record, oldest first.
    pub async fn records(&self) -> Vec<T> {
        self.records.read().await.clone()
    }
}

impl<T: Record> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> SubmissionRepository<T> for InMemoryCollection<T> {
    async fn insert(&self, record: T) -> Result<T, RepoError> {
        record.check()?;

        let mut records = self.records.write().await;
        records.push(record.clone());

        tracing::debug!(
            collection = T::schema().collection,
            count = records.len(),
            "Record stored in memory"
        );
        Ok(record)
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCollection<Credential> {
    async fn find_by_email(&self, email: &str) -> Result<Vec<Credential>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding credentials by email");

        let records = self.records.read().await;
        Ok(records.iter().filter(|c| c.email == email).cloned().collect())
    }
}

/// One in-memory collection per submission kind.
///
/// Keeps typed handles so callers (and tests) can inspect what was stored.
#[derive(Clone, Default)]
pub struct InMemoryStores {
    pub credentials: Arc<InMemoryCollection<Credential>>,
    pub purchases: Arc<InMemoryCollection<PurchaseRequest>>,
    pub bookings: Arc<InMemoryCollection<Booking>>,
    pub quotes: Arc<InMemoryCollection<QuoteRequest>>,
}

impl InMemoryStores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stores(&self) -> SubmissionStores {
        SubmissionStores {
            credentials: self.credentials.clone(),
            purchases: self.purchases.clone(),
            bookings: self.bookings.clone(),
            quotes: self.quotes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use magdalene_core::Document;

    use super::*;

    fn credential(email: &str) -> Credential {
        Credential::new(email.to_string(), "$argon2id$v=19$stub".to_string())
    }

    #[tokio::test]
    async fn test_insert_and_find_by_email() {
        let collection = InMemoryCollection::<Credential>::new();
        collection.insert(credential("a@b.com")).await.unwrap();
        collection.insert(credential("a@b.com")).await.unwrap();
        collection.insert(credential("c@d.com")).await.unwrap();

        assert_eq!(collection.len().await, 3);
        assert_eq!(collection.find_by_email("a@b.com").await.unwrap().len(), 2);
        assert!(collection.find_by_email("A@B.COM").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_schema_violation_stores_nothing() {
        let collection = InMemoryCollection::<Credential>::new();
        let err = collection.insert(credential("")).await.unwrap_err();

        assert!(matches!(err, RepoError::Constraint(_)));
        assert!(collection.is_empty().await);
    }

    #[tokio::test]
    async fn test_stores_share_collections() {
        let memory = InMemoryStores::new();
        let stores = memory.stores();

        let doc = Document::new()
            .with("name", Some("A"))
            .with("email", Some("a@b.com"))
            .with("phone", Some("1"))
            .with("service", Some("detailing"))
            .with("quantity", Some(1.0))
            .with("budget", Some("$10,000+"))
            .with("timeline", Some("asap"));
        stores
            .quotes
            .insert(QuoteRequest::try_from(doc).unwrap())
            .await
            .unwrap();

        assert_eq!(memory.quotes.len().await, 1);
        assert!(memory.purchases.is_empty().await);
    }
}

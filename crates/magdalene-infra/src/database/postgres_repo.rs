//! PostgreSQL repository implementations.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder};

use magdalene_core::domain::Credential;
use magdalene_core::error::RepoError;
use magdalene_core::ports::CredentialRepository;
use magdalene_core::service::SubmissionStores;

use super::entity::booking::Entity as BookingEntity;
use super::entity::credential::{self, Entity as CredentialEntity};
use super::entity::purchase_request::Entity as PurchaseRequestEntity;
use super::entity::quote_request::Entity as QuoteRequestEntity;
use super::mask_email;
use super::postgres_base::{PostgresCollection, map_db_err};

pub type PostgresCredentialRepository = PostgresCollection<CredentialEntity>;
pub type PostgresPurchaseRepository = PostgresCollection<PurchaseRequestEntity>;
pub type PostgresBookingRepository = PostgresCollection<BookingEntity>;
pub type PostgresQuoteRepository = PostgresCollection<QuoteRequestEntity>;

/// Wire every collection to the same connection pool.
pub fn postgres_stores(db: &DbConn) -> SubmissionStores {
    SubmissionStores {
        credentials: Arc::new(PostgresCredentialRepository::new(db.clone())),
        purchases: Arc::new(PostgresPurchaseRepository::new(db.clone())),
        bookings: Arc::new(PostgresBookingRepository::new(db.clone())),
        quotes: Arc::new(PostgresQuoteRepository::new(db.clone())),
    }
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn find_by_email(&self, email: &str) -> Result<Vec<Credential>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding credentials by email");

        let result = CredentialEntity::find()
            .filter(credential::Column::Email.eq(email))
            .order_by_asc(credential::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel};

use magdalene_core::error::RepoError;
use magdalene_core::ports::SubmissionRepository;
use magdalene_core::schema::Record;

/// One PostgreSQL table used as an append-only collection.
pub struct PostgresCollection<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PostgresCollection<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T> SubmissionRepository<T> for PostgresCollection<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    T: Record + Into<E::ActiveModel>,
{
    async fn insert(&self, record: T) -> Result<T, RepoError> {
        // Same rules as the table constraints, checked before the round trip.
        record.check()?;

        let active_model: E::ActiveModel = record.clone().into();
        active_model.insert(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(collection = T::schema().collection, "Record inserted");
        Ok(record)
    }
}

pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => {
            let message = other.to_string();
            if message.contains("violates") || message.contains("constraint") {
                RepoError::Constraint(message)
            } else {
                RepoError::Query(message)
            }
        }
    }
}

//! Credential entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "credentials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Credential.
impl From<Model> for magdalene_core::domain::Credential {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain Credential to SeaORM ActiveModel.
impl From<magdalene_core::domain::Credential> for ActiveModel {
    fn from(credential: magdalene_core::domain::Credential) -> Self {
        Self {
            id: Set(credential.id),
            email: Set(credential.email),
            password_hash: Set(credential.password_hash),
            created_at: Set(credential.created_at.into()),
        }
    }
}

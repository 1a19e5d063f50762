//! Purchase request entity for SeaORM.
//!
//! `country` and `selectcar` are plain text columns; the table's CHECK
//! constraints hold them to the same closed sets as the domain enums.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use magdalene_core::domain::PurchaseRequest;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "purchase_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub country: String,
    pub selectcar: String,
    pub phone: String,
    pub state: String,
    pub address: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<PurchaseRequest> for ActiveModel {
    fn from(request: PurchaseRequest) -> Self {
        Self {
            id: Set(request.id),
            name: Set(request.name),
            email: Set(request.email),
            country: Set(request.country.as_str().to_string()),
            selectcar: Set(request.car.as_str().to_string()),
            phone: Set(request.phone),
            state: Set(request.state),
            address: Set(request.address),
            created_at: Set(request.created_at.into()),
        }
    }
}

//! Quote request entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use magdalene_core::domain::QuoteRequest;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quote_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    #[sea_orm(column_type = "Double")]
    pub quantity: f64,
    pub budget: String,
    pub timeline: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<QuoteRequest> for ActiveModel {
    fn from(quote: QuoteRequest) -> Self {
        Self {
            id: Set(quote.id),
            name: Set(quote.name),
            email: Set(quote.email),
            phone: Set(quote.phone),
            service: Set(quote.service),
            quantity: Set(quote.quantity),
            budget: Set(quote.budget.as_str().to_string()),
            timeline: Set(quote.timeline),
            comments: Set(quote.comments),
            created_at: Set(quote.created_at.into()),
        }
    }
}

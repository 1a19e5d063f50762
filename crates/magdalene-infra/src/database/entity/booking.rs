//! Booking entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use magdalene_core::domain::Booking;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub selectaservice: String,
    pub date: String,
    #[sea_orm(column_type = "Text")]
    pub specialrequest: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Booking> for ActiveModel {
    fn from(booking: Booking) -> Self {
        Self {
            id: Set(booking.id),
            name: Set(booking.name),
            email: Set(booking.email),
            selectaservice: Set(booking.service.as_str().to_string()),
            date: Set(booking.date),
            specialrequest: Set(booking.special_request),
            created_at: Set(booking.created_at.into()),
        }
    }
}

//! One table per submission collection.
//!
//! Required text columns reject empty strings and the closed-set columns
//! carry CHECK constraints built from the domain enums, so the database
//! refuses anything the schema validator would.

use magdalene_core::domain::{BudgetBracket, CarModel, Country, ServiceType};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden, Clone, Copy)]
enum Credentials {
    Table,
    Id,
    Email,
    PasswordHash,
    CreatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum PurchaseRequests {
    Table,
    Id,
    Name,
    Email,
    Country,
    Selectcar,
    Phone,
    State,
    Address,
    CreatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Bookings {
    Table,
    Id,
    Name,
    Email,
    Selectaservice,
    Date,
    Specialrequest,
    CreatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum QuoteRequests {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Service,
    Quantity,
    Budget,
    Timeline,
    Comments,
    CreatedAt,
}

fn id<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).uuid().not_null().primary_key().to_owned()
}

fn created_at<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

/// Non-empty text.
fn required<T: IntoIden + Copy + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .string()
        .not_null()
        .check(Expr::col(col).ne(""))
        .to_owned()
}

/// Text restricted to a closed set of values.
fn one_of<T: IntoIden + Copy + 'static>(col: T, allowed: &[&'static str]) -> ColumnDef {
    ColumnDef::new(col)
        .string()
        .not_null()
        .check(Expr::col(col).is_in(allowed.iter().copied()))
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Credentials::Table)
                    .if_not_exists()
                    .col(id(Credentials::Id))
                    .col(required(Credentials::Email))
                    .col(required(Credentials::PasswordHash))
                    .col(created_at(Credentials::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Lookups during login; emails are not unique.
        manager
            .create_index(
                Index::create()
                    .name("idx_credentials_email")
                    .table(Credentials::Table)
                    .col(Credentials::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PurchaseRequests::Table)
                    .if_not_exists()
                    .col(id(PurchaseRequests::Id))
                    .col(required(PurchaseRequests::Name))
                    .col(required(PurchaseRequests::Email))
                    .col(one_of(PurchaseRequests::Country, Country::ALLOWED))
                    .col(one_of(PurchaseRequests::Selectcar, CarModel::ALLOWED))
                    .col(required(PurchaseRequests::Phone))
                    .col(required(PurchaseRequests::State))
                    .col(required(PurchaseRequests::Address))
                    .col(created_at(PurchaseRequests::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(id(Bookings::Id))
                    .col(required(Bookings::Name))
                    .col(required(Bookings::Email))
                    .col(one_of(Bookings::Selectaservice, ServiceType::ALLOWED))
                    .col(required(Bookings::Date))
                    .col(
                        ColumnDef::new(Bookings::Specialrequest)
                            .text()
                            .not_null()
                            .check(Expr::col(Bookings::Specialrequest).ne("")),
                    )
                    .col(created_at(Bookings::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(QuoteRequests::Table)
                    .if_not_exists()
                    .col(id(QuoteRequests::Id))
                    .col(required(QuoteRequests::Name))
                    .col(required(QuoteRequests::Email))
                    .col(required(QuoteRequests::Phone))
                    .col(required(QuoteRequests::Service))
                    .col(ColumnDef::new(QuoteRequests::Quantity).double().not_null())
                    .col(one_of(QuoteRequests::Budget, BudgetBracket::ALLOWED))
                    .col(required(QuoteRequests::Timeline))
                    .col(ColumnDef::new(QuoteRequests::Comments).text().null())
                    .col(created_at(QuoteRequests::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuoteRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PurchaseRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Credentials::Table).to_owned())
            .await
    }
}

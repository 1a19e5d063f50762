//! SeaORM entities - one table per submission collection.

pub mod booking;
pub mod credential;
pub mod purchase_request;
pub mod quote_request;

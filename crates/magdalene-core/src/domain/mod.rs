//! Domain records - one type per submission kind.

mod booking;
mod choices;
mod credential;
mod purchase;
mod quote;

pub use booking::{BOOKING_SCHEMA, Booking};
pub use choices::{BudgetBracket, CarModel, Country, ServiceType, UnknownChoice};
pub use credential::{CREDENTIAL_SCHEMA, Credential, LoginAttempt};
pub use purchase::{PURCHASE_SCHEMA, PurchaseRequest};
pub use quote::{QUOTE_SCHEMA, QuoteRequest};

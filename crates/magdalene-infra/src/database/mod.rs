//! Submission storage - PostgreSQL tables, in-memory collections, and the
//! fallback used when the database is unreachable.

mod connections;
mod memory;
mod unavailable;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
mod postgres_repo;

pub use connections::DatabaseConfig;
pub use memory::{InMemoryCollection, InMemoryStores};
pub use unavailable::UnavailableStore;

#[cfg(feature = "postgres")]
pub use connections::DocumentStore;
#[cfg(feature = "postgres")]
pub use postgres_base::PostgresCollection;
#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresBookingRepository, PostgresCredentialRepository, PostgresPurchaseRepository,
    PostgresQuoteRepository, postgres_stores,
};

/// Mask an email for logging to avoid PII in logs.
pub(crate) fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) if local.chars().count() > 1 => format!("{first}***@{domain}"),
            _ => format!("***@{domain}"),
        },
        None => "***".to_string(),
    }
}


#[cfg(test)]
mod mask_tests {
    use super::mask_email;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("ada@example.com"), "a***@example.com");
        assert_eq!(mask_email("a@example.com"), "***@example.com");
        assert_eq!(mask_email("no-at-sign"), "***");
    }
}

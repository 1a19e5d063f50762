//! # Magdalene Infrastructure
//!
//! Concrete implementations of the ports defined in `magdalene-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory store only
//! - `postgres` - PostgreSQL submission store via SeaORM
//! - `rate-limit` - Per-client rate limiting via governor

pub mod auth;
pub mod database;

#[cfg(feature = "rate-limit")]
pub mod rate_limit;

pub use auth::{Argon2PasswordService, PasswordHashConfig};
pub use database::{DatabaseConfig, InMemoryStores, UnavailableStore};

#[cfg(feature = "postgres")]
pub use database::{DocumentStore, postgres_stores};

#[cfg(feature = "rate-limit")]
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};

//! Middleware and request extractors.

pub mod error;
pub mod extract;
pub mod rate_limit;

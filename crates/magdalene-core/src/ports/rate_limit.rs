//! Rate limiting port.

use async_trait::async_trait;
use std::time::Duration;

/// Per-client request limiter guarding the form endpoints.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Count one request against `key` (usually the client IP).
    async fn check(&self, key: &str) -> Result<RateLimitResult, RateLimitError>;
}

/// Result of a rate limit check.
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    pub allowed: bool,
    /// Time until the next request from the same key would be accepted.
    pub retry_after: Duration,
}

/// Rate limit errors.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Backend error: {0}")]
    Backend(String),
}

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use magdalene_infra::{DatabaseConfig, PasswordHashConfig};

#[cfg(feature = "rate-limit")]
use magdalene_infra::RateLimitConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Root of the storefront pages and assets.
    pub static_dir: PathBuf,
    /// `None` runs against the in-memory store.
    pub database: Option<DatabaseConfig>,
    pub password: PasswordHashConfig,
    pub rate_limit_enabled: bool,
    /// Key the rate limiter on `Forwarded`/`X-Forwarded-For` instead of the
    /// socket peer. Only safe behind a proxy that overwrites those headers.
    pub trust_proxy: bool,
    #[cfg(feature = "rate-limit")]
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL")
            .or_else(|_| env::var("MONGO_URL"))
            .ok()
            .filter(|url| !url.is_empty())
            .map(|url| {
                let mut config = DatabaseConfig::new(url);
                config.max_connections = parse_or("DB_MAX_CONNECTIONS", config.max_connections);
                config.min_connections = parse_or("DB_MIN_CONNECTIONS", config.min_connections);
                config
            });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or("PORT", 3000),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("Magdalene-WebPages")),
            database,
            password: PasswordHashConfig::from_env(),
            rate_limit_enabled: env::var("RATE_LIMIT_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            trust_proxy: env::var("TRUST_PROXY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            #[cfg(feature = "rate-limit")]
            rate_limit: RateLimitConfig::from_env(),
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(fallback)
}

//! # Magdalene Form Server
//!
//! Serves the storefront pages and accepts its login, registration,
//! purchase, booking, and quote forms.

use std::io;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use magdalene_core::ports::RateLimiter;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;


use config::AppConfig;
use middleware::rate_limit::RateLimitMiddleware;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        static_dir = %config.static_dir.display(),
        "Starting Magdalene form server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await.map_err(io::Error::other)?;
    let limiter = rate_limiter(&config)?;

    let static_dir = config.static_dir.clone();
    let trust_proxy = config.trust_proxy;
    let app_state = state.clone();

    HttpServer::new(move || {
        let static_dir = static_dir.clone();
        App::new()
            .wrap(RateLimitMiddleware::new(limiter.clone(), trust_proxy))
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(app_state.clone()))
            .configure(move |cfg| handlers::configure_routes(cfg, &static_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    #[cfg(feature = "postgres")]
    if let Some(db) = state.db {
        if let Err(e) = db.close().await {
            tracing::warn!(error = %e, "Error closing submission store");
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(feature = "rate-limit")]
fn rate_limiter(config: &AppConfig) -> io::Result<Option<Arc<dyn RateLimiter>>> {
    use magdalene_infra::InMemoryRateLimiter;

    if !config.rate_limit_enabled {
        tracing::info!("Rate limiting disabled");
        return Ok(None);
    }

    let limiter =
        Arc::new(InMemoryRateLimiter::new(&config.rate_limit).map_err(io::Error::other)?);

    // Forget idle clients once per window.
    let pruned = limiter.clone();
    let every = config.rate_limit.window;
    actix_rt::spawn(async move {
        let mut ticker = actix_rt::time::interval(every);
        loop {
            ticker.tick().await;
            pruned.prune();
        }
    });

    tracing::info!(
        max_requests = config.rate_limit.max_requests,
        window_secs = config.rate_limit.window.as_secs(),
        "Rate limiting enabled"
    );
    Ok(Some(limiter))
}

#[cfg(not(feature = "rate-limit"))]
fn rate_limiter(config: &AppConfig) -> io::Result<Option<Arc<dyn RateLimiter>>> {
    if config.rate_limit_enabled {
        tracing::warn!("RATE_LIMIT_ENABLED ignored: built without the rate-limit feature");
    }
    Ok(None)
}

//! HTTP handlers and route configuration.

mod auth;
mod health;
mod submissions;

use std::path::Path;

use actix_files::Files;
use actix_web::web;

/// Asset directories served under their own prefix.
const ASSET_PREFIXES: [&str; 4] = ["css", "img", "lib", "scss"];

/// Configure all application routes.
///
/// Form endpoints are registered first; the static site is mounted last at
/// `/` so that pages such as `/buynow.html` resolve and `GET /` serves
/// `index.html`.
pub fn configure_routes(cfg: &mut web::ServiceConfig, static_dir: &Path) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/login", web::post().to(auth::login))
        .route("/register", web::post().to(auth::register))
        .route("/buynow", web::post().to(submissions::buy_now))
        .route("/booking", web::post().to(submissions::booking))
        .route("/getaquote", web::post().to(submissions::get_a_quote));

    if !static_dir.is_dir() {
        tracing::warn!(path = %static_dir.display(), "Static directory not found; pages disabled");
        return;
    }

    for prefix in ASSET_PREFIXES {
        let dir = static_dir.join(prefix);
        if dir.is_dir() {
            cfg.service(Files::new(&format!("/{prefix}"), dir));
        }
    }

    cfg.service(Files::new("/", static_dir).index_file("index.html"));
}

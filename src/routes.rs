//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Landing page (`{static_dir}/index.html`)
//! - `GET  /static/*`    - Static assets
//! - `GET  /health`      - Health check
//! - `POST /new`         - Shorten a URL
//! - `GET  /{short_id}`  - Redirect to the original URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Routes and middleware, without path normalization.
///
/// Static routes take precedence over `/{short_id}`, so `health` or `new`
/// never reach the redirect handler.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route("/new", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{short_id}", get(redirect_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/aZ3x9Qm/` redirects
/// like `/aZ3x9Qm`.
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}

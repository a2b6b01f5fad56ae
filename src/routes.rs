//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`           - HTML landing page with the shorten form
//! - `POST /shorten`    - Issue a new short link (JSON)
//! - `GET  /{code}`     - Short link redirect
//! - `GET  /health`     - Health check: registry size
//! - `/static/*`        - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::handlers::{health_handler, index_handler, redirect_handler, shorten_handler};
use crate::middlewares::trace;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(trace::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

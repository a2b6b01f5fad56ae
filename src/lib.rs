//! # Shortlinks
//!
//! A small in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! The crate is split into thin layers around a single domain type:
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::Registry`] and its entries
//! - **HTTP Layer** ([`handlers`], [`dto`], [`routes`]) - Axum handlers, request/response types, router
//! - **Web Layer** ([`handlers::index`]) - HTML landing page and expired-link page
//!
//! ## Features
//!
//! - Six-character alphanumeric short codes with collision retry
//! - Optional per-link expiry with lazy eviction
//! - JSON API plus a minimal HTML front page
//! - Structured request logging
//!
//! ## Quick Start
//!
//! ```bash
//! # Everything has a default; just start the service
//! cargo run
//!
//! # Or override the bind address and public prefix
//! cargo run -- --listen 127.0.0.1:9000 --base-url https://sho.rt
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod domain;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middlewares;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::{Entry, Registry, ResolveError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

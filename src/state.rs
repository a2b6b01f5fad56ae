use std::sync::Arc;

use crate::domain::Registry;

/// Shared application state injected into every handler.
///
/// The registry is constructed once in [`crate::server::run`] and shared by
/// reference; tests build isolated instances of their own.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub base_url: String,
}

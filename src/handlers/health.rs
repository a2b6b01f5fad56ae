//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": {
///       "status": "ok",
///       "message": "Entries: 42"
///     }
///   }
/// }
/// ```
///
/// The registry lives in process memory, so the check cannot fail; it
/// reports the current entry count, counting expired entries that have
/// not been evicted yet.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let entries = state.registry.len();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("Entries: {entries}")),
            },
        },
    })
}

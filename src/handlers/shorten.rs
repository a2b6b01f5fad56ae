//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use serde_json::json;

use crate::dto::shorten::{ShortenRequest, ShortenResponse, parse_expiry};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for the given URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "expiry": "3600"  // optional: "never" or seconds
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8000/Ab3xYz",
///   "code": "Ab3xYz"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the expiry selector is invalid.
/// Returns 500 Internal Server Error when code generation keeps colliding,
/// which only happens with the registry near saturation.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let ttl = parse_expiry(payload.expiry.as_deref())?;

    let code = state.registry.create(payload.url, ttl).map_err(|e| {
        AppError::internal(
            "Failed to generate a unique code",
            json!({ "cause": e.to_string() }),
        )
    })?;

    let short_url = format!("{}/{}", state.base_url.trim_end_matches('/'), code);

    tracing::info!(code = %code, "short link created");

    Ok(Json(ShortenResponse { short_url, code }))
}

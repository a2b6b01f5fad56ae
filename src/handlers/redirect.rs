//! Handler for short URL redirect.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use tracing::debug;

use crate::domain::ResolveError;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the expired-link page.
///
/// Renders `templates/expired.html`, served with 410 Gone.
#[derive(Template, WebTemplate)]
#[template(path = "expired.html")]
struct ExpiredTemplate {}

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - **307 Temporary Redirect** to the stored destination
/// - **410 Gone** with an HTML notice when this lookup observed the expiry;
///   the entry is evicted, so subsequent lookups return 404
/// - **404 Not Found** (JSON) for unknown or already-evicted codes
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.registry.resolve(&code) {
        Ok(destination) => {
            debug!(code = %code, "redirecting");
            Ok(Redirect::temporary(&destination).into_response())
        }
        Err(ResolveError::Expired) => {
            debug!(code = %code, "link expired, evicted");
            Ok((StatusCode::GONE, ExpiredTemplate {}).into_response())
        }
        Err(ResolveError::NotFound) => Err(AppError::not_found(
            "Unknown short code",
            json!({ "code": code }),
        )),
    }
}

//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page with the shorten form.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    PageTemplate {}
}

//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::JsonOrForm;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or reuses) the short code for a URL.
///
/// # Endpoint
///
/// `POST /new`
///
/// # Request Body
///
/// JSON `{ "url": "https://example.com/page" }` or the form `url=https%3A%2F%2F...`.
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com/page", "short_id": "aZ3x9Qm" }
/// ```
///
/// Submitting the same URL again returns the same `short_id`.
///
/// # Errors
///
/// - 400 `{ "error": "invalid url" }` if the body or URL is malformed
/// - 404 `{ "error": "address not found" }` if the host does not resolve
/// - 503 / 504 if the store fails or times out
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state.link_service.shorten(&payload.url).await?;

    Ok(Json(link.into()))
}

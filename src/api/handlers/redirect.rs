//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Body of the 404 page shown for unknown codes.
pub const NOT_FOUND_MESSAGE: &str = "Uh oh. We couldn't find a link at that URL";

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// # Responses
///
/// - **302 Found** with `Location` set to the original URL
/// - **404 Not Found** with a plain-text message for unknown codes, including
///   paths that do not decode to UTF-8
/// - **503 / 504** JSON error if the store fails or times out
pub async fn redirect_handler(
    short_id: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Response {
    let Ok(Path(short_id)) = short_id else {
        return (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response();
    };

    match state.link_service.resolve(&short_id).await {
        Ok(link) => (StatusCode::FOUND, [(header::LOCATION, link.original_url)]).into_response(),
        Err(AppError::NotFound(_)) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
        Err(e) => e.into_response(),
    }
}

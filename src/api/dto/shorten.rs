//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to shorten a URL.
///
/// Accepted as JSON or as an urlencoded form; both carry a single `url` field.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten, at most 2048 characters. Parsed and normalized
    /// by the link service, which caps the normalized form at 2048 bytes.
    #[validate(length(min = 1, max = 2048))]
    pub url: String,
}

/// The stored mapping for the submitted URL.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_id: String,
}

impl From<Link> for ShortenResponse {
    fn from(link: Link) -> Self {
        Self {
            original_url: link.original_url,
            short_id: link.short_id,
        }
    }
}

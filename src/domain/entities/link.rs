//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored mapping between a short code and its target URL.
///
/// Links are immutable: once created, neither side of the mapping changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_id: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_id: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_id,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub original_url: String,
    pub short_id: String,
}

/// Result of an insert-if-absent on the link store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// No link existed for the URL; this one was stored.
    Created(Link),
    /// The URL was already shortened; the stored link is returned unchanged.
    Existing(Link),
    /// The candidate short code belongs to a different URL.
    ShortIdTaken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "https://example.com/page".to_string(),
            "aZ3x9Qm".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.original_url, "https://example.com/page");
        assert_eq!(link.short_id, "aZ3x9Qm");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_link_serializes_mapping_fields() {
        let link = Link::new(
            7,
            "https://rust-lang.org/".to_string(),
            "Rust123".to_string(),
            Utc::now(),
        );

        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["original_url"], "https://rust-lang.org/");
        assert_eq!(json["short_id"], "Rust123");
    }
}

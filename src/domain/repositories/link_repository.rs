//! Repository trait for short link data access.

use crate::domain::entities::{InsertOutcome, Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local maps
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores `new_link` unless a link for the same `original_url` exists.
    ///
    /// Must be atomic with respect to concurrent calls for the same URL:
    /// exactly one of them gets [`InsertOutcome::Created`], all others get
    /// [`InsertOutcome::Existing`] with the winner's record.
    ///
    /// # Returns
    ///
    /// - `Created(Link)` if the link was stored
    /// - `Existing(Link)` if the URL already had a link
    /// - `ShortIdTaken` if `new_link.short_id` is used by another URL
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, AppError>;

    /// Finds a link by its exact short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Link>, AppError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks that the store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if it does not.
    async fn ping(&self) -> Result<(), AppError>;
}

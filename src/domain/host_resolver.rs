//! Host reachability check applied before a URL is stored.

use crate::error::AppError;
use async_trait::async_trait;

/// Decides whether the host of a submitted URL exists.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::DnsHostResolver`] - system resolver lookup
/// - [`crate::infrastructure::dns::NoopHostResolver`] - accepts every host
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::HostNotFound`] if the host has no address.
    async fn resolve(&self, host: &str) -> Result<(), AppError>;
}

//! Link creation and resolution service.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::HostResolver;
use crate::domain::entities::{InsertOutcome, Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_short_id, is_valid_short_id};
use crate::utils::url_normalizer::normalize_url;

/// How many fresh codes to try before giving up on a collision streak.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving shortened links.
///
/// Owns its collaborators: the link store and the host resolver are passed
/// in at construction, so handlers and tests choose the implementations.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    host_resolver: Arc<dyn HostResolver>,
    store_timeout: Duration,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `store_timeout` bounds every individual repository call.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        host_resolver: Arc<dyn HostResolver>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            link_repository,
            host_resolver,
            store_timeout,
        }
    }

    /// Returns the link for `url`, creating it on first use.
    ///
    /// # Flow
    ///
    /// 1. Normalize the URL (no I/O)
    /// 2. Resolve its host
    /// 3. Insert-if-absent with a fresh code, retrying on code collisions
    ///
    /// Shortening the same normalized URL again returns the stored link
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if the URL is not an absolute http(s) URL
    /// - [`AppError::HostNotFound`] if the host does not resolve
    /// - [`AppError::StoreUnavailable`] / [`AppError::StoreTimeout`] on store failures
    /// - [`AppError::Internal`] if every generated code collided
    pub async fn shorten(&self, url: &str) -> Result<Link, AppError> {
        let normalized = normalize_url(url)?;

        if !normalized.is_ip_literal() {
            self.host_resolver.resolve(normalized.host()).await?;
        }

        let original_url = normalized.into_string();

        for attempt in 1..=MAX_ATTEMPTS {
            let new_link = NewLink {
                original_url: original_url.clone(),
                short_id: generate_short_id(),
            };

            match self
                .with_timeout(self.link_repository.insert_if_absent(new_link))
                .await?
            {
                InsertOutcome::Created(link) => {
                    tracing::info!(short_id = %link.short_id, url = %link.original_url, "Link created");
                    return Ok(link);
                }
                InsertOutcome::Existing(link) => {
                    tracing::debug!(short_id = %link.short_id, url = %link.original_url, "Link reused");
                    return Ok(link);
                }
                InsertOutcome::ShortIdTaken => {
                    tracing::warn!(attempt, "Short code collision, retrying");
                }
            }
        }

        Err(AppError::Internal(format!(
            "no free short code after {MAX_ATTEMPTS} attempts"
        )))
    }

    /// Looks up the link for a short code.
    ///
    /// Codes that could never have been issued are rejected without a store
    /// round trip.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no link has this code
    /// - [`AppError::StoreUnavailable`] / [`AppError::StoreTimeout`] on store failures
    pub async fn resolve(&self, short_id: &str) -> Result<Link, AppError> {
        if !is_valid_short_id(short_id) {
            return Err(AppError::NotFound(short_id.to_string()));
        }

        self.with_timeout(self.link_repository.find_by_short_id(short_id))
            .await?
            .ok_or_else(|| AppError::NotFound(short_id.to_string()))
    }

    /// Number of stored links.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.with_timeout(self.link_repository.count()).await
    }

    /// Checks that the store answers within the timeout.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.with_timeout(self.link_repository.ping()).await
    }

    async fn with_timeout<T>(
        &self,
        operation: impl Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        tokio::time::timeout(self.store_timeout, operation)
            .await
            .map_err(|_| AppError::StoreTimeout(self.store_timeout.as_millis()))?
    }
}

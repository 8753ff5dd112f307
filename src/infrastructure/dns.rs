//! DNS-backed host checks.

use async_trait::async_trait;
use std::net::IpAddr;
use std::time::Duration;

use crate::domain::HostResolver;
use crate::error::AppError;

/// Resolves hosts through the system resolver (`getaddrinfo`).
///
/// IP literals are accepted without a lookup. A lookup that errors, returns
/// no addresses, or exceeds the timeout counts as "host not found".
#[derive(Debug, Clone)]
pub struct DnsHostResolver {
    timeout: Duration,
}

impl DnsHostResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for DnsHostResolver {
    async fn resolve(&self, host: &str) -> Result<(), AppError> {
        if host.parse::<IpAddr>().is_ok() {
            return Ok(());
        }

        match tokio::time::timeout(self.timeout, tokio::net::lookup_host((host, 0))).await {
            Ok(Ok(mut addrs)) => match addrs.next() {
                Some(_) => Ok(()),
                None => {
                    tracing::debug!(host, "DNS lookup returned no addresses");
                    Err(AppError::HostNotFound(host.to_string()))
                }
            },
            Ok(Err(e)) => {
                tracing::debug!(host, error = %e, "DNS lookup failed");
                Err(AppError::HostNotFound(host.to_string()))
            }
            Err(_) => {
                tracing::warn!(host, timeout_ms = self.timeout.as_millis(), "DNS lookup timed out");
                Err(AppError::HostNotFound(host.to_string()))
            }
        }
    }
}

/// Accepts every host. Used when `DNS_CHECK=false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHostResolver;

#[async_trait]
impl HostResolver for NoopHostResolver {
    async fn resolve(&self, _host: &str) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> DnsHostResolver {
        DnsHostResolver::new(Duration::from_secs(3))
    }

    #[tokio::test]
    async fn test_ip_literals_skip_lookup() {
        assert!(resolver().resolve("127.0.0.1").await.is_ok());
        assert!(resolver().resolve("::1").await.is_ok());
    }

    #[tokio::test]
    async fn test_localhost_resolves() {
        assert!(resolver().resolve("localhost").await.is_ok());
    }

    #[tokio::test]
    async fn test_reserved_tld_does_not_resolve() {
        let result = resolver().resolve("no-such-host.invalid").await;
        assert!(matches!(result, Err(AppError::HostNotFound(_))));
    }

    #[tokio::test]
    async fn test_noop_accepts_anything() {
        assert!(NoopHostResolver.resolve("no-such-host.invalid").await.is_ok());
    }
}

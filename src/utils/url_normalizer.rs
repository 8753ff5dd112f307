//! URL validation and normalization.
//!
//! Two submissions that point at the same resource should map to the same
//! stored string, otherwise deduplication misses them.

use url::{Host, Url};

/// Longest normalized URL accepted, in bytes.
///
/// Percent-encoding can grow the input several times over; the limit applies
/// to what is stored and indexed.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,

    #[error("URL is {0} bytes long once normalized (max {MAX_URL_LENGTH})")]
    TooLong(usize),
}

/// A URL that passed validation, kept together with its host for the DNS check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    href: String,
    host: String,
    is_ip_literal: bool,
}

impl NormalizedUrl {
    /// Canonical string form, used as the deduplication key.
    pub fn as_str(&self) -> &str {
        &self.href
    }

    /// Host name (or IP literal, without brackets).
    pub fn host(&self) -> &str {
        &self.host
    }

    /// True when the host is an IPv4 or IPv6 literal.
    pub fn is_ip_literal(&self) -> bool {
        self.is_ip_literal
    }

    pub fn into_string(self) -> String {
        self.href
    }
}

/// Validates and normalizes a URL to a canonical form.
///
/// # Normalization Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed
/// 2. **Host**: Required, converted to lowercase (IDNs become punycode)
/// 3. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 4. **Empty path**: Becomes `/`
/// 5. **Query and fragment**: Preserved as-is
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed or relative URLs.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlNormalizationError::MissingHost`] when the host is empty.
/// Returns [`UrlNormalizationError::TooLong`] when the normalized form exceeds
/// [`MAX_URL_LENGTH`] bytes.
///
/// # Examples
///
/// ```ignore
/// let url = normalize_url("HTTPS://EXAMPLE.COM:443/Path").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/Path");
/// assert_eq!(url.host(), "example.com");
/// ```
pub fn normalize_url(input: &str) -> Result<NormalizedUrl, UrlNormalizationError> {
    let url = Url::parse(input.trim())
        .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    let (host, is_ip_literal) = match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => (domain.to_ascii_lowercase(), false),
        Some(Host::Ipv4(addr)) => (addr.to_string(), true),
        Some(Host::Ipv6(addr)) => (addr.to_string(), true),
        _ => return Err(UrlNormalizationError::MissingHost),
    };

    let href = url.to_string();
    if href.len() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong(href.len()));
    }

    Ok(NormalizedUrl {
        href,
        host,
        is_ip_literal,
    })
}

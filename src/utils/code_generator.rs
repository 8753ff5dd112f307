//! Short code generation and shape checks.

use rand::{Rng, distr::Alphanumeric};

/// Number of characters in a generated short code.
///
/// 62^7 gives roughly 3.5 trillion codes.
pub const SHORT_ID_LENGTH: usize = 7;

/// Generates a random short code of [`SHORT_ID_LENGTH`] characters from `[A-Za-z0-9]`.
///
/// Uniqueness is not guaranteed here; the store's unique constraint catches
/// collisions and the caller retries.
///
/// # Examples
///
/// ```ignore
/// let code = generate_short_id();
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_short_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SHORT_ID_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `code` could have been produced by [`generate_short_id`].
pub fn is_valid_short_id(code: &str) -> bool {
    code.len() == SHORT_ID_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

//! Domain layer containing business entities and the contracts the
//! application layer depends on.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`host_resolver`] - DNS check contract
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; concrete implementations live in [`crate::infrastructure`].

pub mod entities;
pub mod host_resolver;
pub mod repositories;

pub use host_resolver::HostResolver;

#[cfg(test)]
pub use host_resolver::MockHostResolver;

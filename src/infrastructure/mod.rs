//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`dns`] - Host resolution for submitted URLs
//! - [`persistence`] - Link storage (PostgreSQL and in-memory)

pub mod dns;
pub mod persistence;

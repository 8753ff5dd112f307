//! Core domain entities.
//!
//! - [`Link`] - A stored short code to URL mapping
//! - [`NewLink`] - Input for creating a link
//! - [`InsertOutcome`] - What an insert-if-absent did

pub mod link;

pub use link::{InsertOutcome, Link, NewLink};

//! Utility functions for code generation and URL processing.
//!
//! - [`code_generator`] - Short code generation and shape checks
//! - [`url_normalizer`] - URL validation and normalization
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
pub mod url_normalizer;

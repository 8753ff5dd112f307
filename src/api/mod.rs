//! HTTP API layer.
//!
//! Translates HTTP requests into link service calls and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`extract`] - JSON-or-form body extractor
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;

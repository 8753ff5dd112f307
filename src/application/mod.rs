//! Application layer services implementing business logic.
//!
//! Services coordinate validation, host checks and repository calls, and
//! give HTTP handlers and the admin CLI one API to call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;

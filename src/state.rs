//! Shared state handed to every request handler.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Application state, cloned per request by axum.
///
/// Holds only the service; the service owns the store handle.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}

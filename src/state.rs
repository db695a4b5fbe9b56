//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Handles shared by all requests.
///
/// Built once at startup, after the database connection has been established,
/// and cloned into each request by axum.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Builds the state around a link repository.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
        }
    }
}

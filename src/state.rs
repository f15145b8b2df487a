//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// State handed to every request task.
///
/// The registry is built once at startup and only reachable through the
/// service, so all access goes through its synchronized `get`/`put`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
}

impl AppState {
    pub fn new(link_repository: Arc<InMemoryLinkRepository>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
        }
    }
}

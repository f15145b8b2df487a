#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use link_cloaker::domain::entities::LinkEntry;
use link_cloaker::domain::repositories::LinkRepository;
use link_cloaker::infrastructure::persistence::InMemoryLinkRepository;
use link_cloaker::state::AppState;
use std::sync::Arc;

pub const BOT_UA: &str = "Mozilla/5.0 (compatible; Googlebot/2.1)";
pub const HUMAN_UA: &str = "Mozilla/5.0 (Macintosh) AppleWebKit Safari";

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    (AppState::new(repo.clone()), repo)
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, id: &str, real: &str, bot: &str) {
    repo.put(id, LinkEntry::new(real, bot)).await;
}

/// Production route table without path normalization or tracing.
pub fn test_router(state: AppState) -> Router {
    link_cloaker::routes::routes().with_state(state)
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(test_router(state)).unwrap()
}

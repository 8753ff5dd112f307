#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use link_shortener::prelude::*;
use link_shortener::routes::router;
use std::sync::Arc;
use std::time::Duration;

pub const STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Service over a fresh in-memory store with the DNS check disabled.
pub fn memory_service() -> (Arc<LinkService>, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let service = Arc::new(LinkService::new(
        repo.clone(),
        Arc::new(NoopHostResolver),
        STORE_TIMEOUT,
    ));
    (service, repo)
}

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let (service, repo) = memory_service();
    (AppState::new(service), repo)
}

pub fn create_test_app() -> (Router, Arc<InMemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    (router(state, "public"), repo)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (app, repo) = create_test_app();
    (TestServer::new(app).unwrap(), repo)
}

/// Seeds a link directly into the store.
pub async fn create_test_link(repo: &InMemoryLinkRepository, url: &str, code: &str) {
    let outcome = repo
        .insert_if_absent(NewLink {
            original_url: url.to_string(),
            short_id: code.to_string(),
        })
        .await
        .unwrap();
    assert!(matches!(outcome, InsertOutcome::Created(_)));
}

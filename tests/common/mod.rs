#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shortlink::domain::entities::{Link, NewLink};
use shortlink::domain::repositories::LinkRepository;
use shortlink::error::AppError;
use shortlink::infrastructure::persistence::InMemoryLinkRepository;
use shortlink::routes::app_router;
use shortlink::state::AppState;
use std::sync::Arc;

/// Static directory shipped with the crate; integration tests run from the
/// package root.
pub const STATIC_DIR: &str = "static";

/// Repository whose every operation fails, for exercising error paths.
pub struct FailingLinkRepository;

fn storage_error() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(storage_error())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(storage_error())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Err(storage_error())
    }

    async fn update_long_url(&self, _code: &str, _long_url: &str) -> Result<bool, AppError> {
        Err(storage_error())
    }

    async fn delete_by_code(&self, _code: &str) -> Result<bool, AppError> {
        Err(storage_error())
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repo.clone());

    (state, repo)
}

/// Full application router over an empty in-memory store.
pub fn make_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(app_router(state, STATIC_DIR)).unwrap();

    (server, repo)
}

/// Full application router over a store that always fails.
pub fn make_failing_server() -> TestServer {
    let state = AppState::new(Arc::new(FailingLinkRepository));
    TestServer::new(app_router(state, STATIC_DIR)).unwrap()
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, code: &str, url: &str) -> Link {
    repo.create(NewLink {
        code: code.to_string(),
        long_url: url.to_string(),
    })
    .await
    .unwrap()
}

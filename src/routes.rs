//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/`, `/urls/*`, `/u/{id}` - Link pages and redirect (see [`crate::web::routes`])
//! - `/static/*`               - Static assets
//!
//! # Middleware
//!
//! Applied outside routing, outermost first:
//!
//! - **Tracing** - Structured request/response logging
//! - **Method override** - `POST` + `_method` re-dispatched as `PUT`/`PATCH`/`DELETE`
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::middleware::{MethodOverrideLayer, tracing};
use axum::Router;
use std::path::Path;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served verbatim under `/static`
///
/// The page router is mounted as the fallback of an empty outer router so that
/// the method override and path normalization run before any route is matched.
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let pages = web::routes::routes()
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state);

    Router::new()
        .fallback_service(pages)
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(MethodOverrideLayer)
        .layer(tracing::layer())
}

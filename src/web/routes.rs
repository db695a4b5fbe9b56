//! Link page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    create_link_handler, delete_link_handler, edit_link_handler, home_handler, link_info_handler,
    links_handler, new_link_handler, redirect_handler, update_link_handler,
};
use axum::{Router, routing::get};

/// All page routes.
///
/// `{id}` is always a short code, never a database identifier.
///
/// # Endpoints
///
/// - `GET    /`                - Redirect to `/urls`
/// - `GET    /urls`            - Listing of all links
/// - `POST   /urls`            - Create a link, re-render the listing
/// - `GET    /urls/new`        - Creation form
/// - `GET    /urls/{id}`       - Link details
/// - `PUT    /urls/{id}`       - Change the long URL, redirect to `/urls`
/// - `DELETE /urls/{id}`       - Delete the link, redirect to `/urls`
/// - `GET    /urls/show/{id}`  - Edit form
/// - `GET    /u/{id}`          - Public redirect to the long URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/urls", get(links_handler).post(create_link_handler))
        .route("/urls/new", get(new_link_handler))
        .route(
            "/urls/{id}",
            get(link_info_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
        .route("/urls/show/{id}", get(edit_link_handler))
        .route("/u/{id}", get(redirect_handler))
}

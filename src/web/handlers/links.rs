//! Link management pages: listing, creation, details, editing and deletion.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

/// Where every mutating flow sends the browser afterwards.
const LISTING_PATH: &str = "/urls";

/// Form body submitted by the create and edit pages.
#[derive(Debug, Deserialize)]
pub struct LinkForm {
    /// Raw long URL as typed by the user; normalized before storage.
    #[serde(rename = "longURL", default)]
    pub long_url: String,
}

/// Listing of every stored link, each row with edit and delete actions.
#[derive(Template, WebTemplate)]
#[template(path = "urls_index.html")]
pub struct UrlsIndexTemplate {
    pub urls: Vec<Link>,
}

/// Empty creation form.
#[derive(Template, WebTemplate)]
#[template(path = "urls_new.html")]
pub struct UrlsNewTemplate {}

/// Detail view of a single link.
#[derive(Template, WebTemplate)]
#[template(path = "urls_info.html")]
pub struct UrlsInfoTemplate {
    pub short_url: String,
    pub long_url: String,
    pub created_at: String,
}

impl From<Link> for UrlsInfoTemplate {
    fn from(link: Link) -> Self {
        Self {
            created_at: link.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            short_url: link.code,
            long_url: link.long_url,
        }
    }
}

/// Edit form pre-filled with the current long URL.
#[derive(Template, WebTemplate)]
#[template(path = "urls_show.html")]
pub struct UrlsShowTemplate {
    pub short_url: String,
    pub long_url: String,
}

/// Sends visitors of the site root to the listing.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> Redirect {
    Redirect::to(LISTING_PATH)
}

/// Renders the listing of all links.
///
/// # Endpoint
///
/// `GET /urls`
pub async fn links_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let urls = state.link_service.list_links().await?;

    Ok(UrlsIndexTemplate { urls }.into_response())
}

/// Renders the empty creation form.
///
/// # Endpoint
///
/// `GET /urls/new`
pub async fn new_link_handler() -> impl IntoResponse {
    UrlsNewTemplate {}
}

/// Shortens the submitted URL and re-renders the listing.
///
/// # Endpoint
///
/// `POST /urls` with form field `longURL`
///
/// # Errors
///
/// Returns 500 with the storage error text if the insert fails.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Form(form): Form<LinkForm>,
) -> Result<Response, AppError> {
    state.link_service.create_link(&form.long_url).await?;

    let urls = state.link_service.list_links().await?;

    Ok(UrlsIndexTemplate { urls }.into_response())
}

/// Shows the details of one link.
///
/// # Endpoint
///
/// `GET /urls/{id}`
///
/// # Errors
///
/// Returns 404 with the not-found page if the code is unknown.
pub async fn link_info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(UrlsInfoTemplate::from(link).into_response())
}

/// Renders the edit form for one link.
///
/// # Endpoint
///
/// `GET /urls/show/{id}`
///
/// # Errors
///
/// Returns 404 with a generic failure message if the code is unknown or the
/// lookup fails.
pub async fn edit_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = match state.link_service.find_link(&code).await {
        Ok(Some(link)) => link,
        Ok(None) => return Err(AppError::Unavailable),
        Err(e) => {
            tracing::error!(code, error = %e, "Lookup for edit form failed");
            return Err(AppError::Unavailable);
        }
    };

    Ok(UrlsShowTemplate {
        short_url: link.code,
        long_url: link.long_url,
    }
    .into_response())
}

/// Replaces the long URL of a link and returns to the listing.
///
/// # Endpoint
///
/// `PUT /urls/{id}` with form field `longURL` (or `POST /urls/{id}?_method=PUT`)
///
/// The target is not checked for existence: an unknown code redirects exactly
/// like a successful update.
///
/// # Errors
///
/// Returns 500 with the storage error text if the update fails.
pub async fn update_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Form(form): Form<LinkForm>,
) -> Result<Redirect, AppError> {
    state
        .link_service
        .update_long_url(&code, &form.long_url)
        .await?;

    Ok(Redirect::to(LISTING_PATH))
}

/// Deletes a link and returns to the listing.
///
/// # Endpoint
///
/// `DELETE /urls/{id}` (or `POST /urls/{id}?_method=DELETE`)
///
/// # Errors
///
/// Returns 404 with a generic failure message if the code is unknown.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Redirect::to(LISTING_PATH))
}

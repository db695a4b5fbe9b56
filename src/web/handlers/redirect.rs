//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_normalizer::encode_location;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /u/{id}`
///
/// Returns 307 Temporary Redirect with the stored long URL as `Location`,
/// percent-encoded where the header would otherwise be invalid.
///
/// # Errors
///
/// Returns 404 with the not-found page if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.get_link(&code).await.inspect_err(|e| {
        if matches!(e, AppError::NotFound { .. }) {
            debug!(code, "Redirect requested for unknown short link");
        }
    })?;

    Ok(Redirect::temporary(&encode_location(&link.long_url)))
}

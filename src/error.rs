//! Application error type and its HTTP rendering.
//!
//! Every handler returns `Result<_, AppError>`; the variant alone decides what the
//! client sees:
//!
//! | Variant         | Status | Body                                   |
//! |-----------------|--------|----------------------------------------|
//! | `NotFound`      | 404    | rendered `not_found.html` with the code |
//! | `Unavailable`   | 404    | `Something went wrong!`                |
//! | `Database`      | 500    | the storage error text                 |

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Generic failure text returned by the edit and delete flows.
pub const GENERIC_FAILURE: &str = "Something went wrong!";

/// Page shown when a short code has no matching link.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub short_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No link is stored under the requested short code.
    #[error("short link '{code}' not found")]
    NotFound { code: String },

    /// The requested record could not be loaded; details are not disclosed.
    #[error("Something went wrong!")]
    Unavailable,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } | AppError::Unavailable => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::NotFound { code } => {
                (status, NotFoundTemplate { short_url: code }).into_response()
            }
            AppError::Unavailable => (status, GENERIC_FAILURE).into_response(),
            AppError::Database(e) => {
                tracing::error!(error = %e, "Storage operation failed");
                (status, format!("database error: {e}")).into_response()
            }
        }
    }
}

//! Link creation, lookup, editing and removal.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;

/// Service for managing short links.
///
/// Each method performs at most one lookup and one mutation against the
/// repository. Long URLs are normalized before they are stored.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Returns every stored link in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Shortens `long_url` under a freshly generated code.
    ///
    /// The code is not checked against existing links; a collision yields two
    /// records sharing one code, and lookups resolve to the older one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the insert fails.
    pub async fn create_link(&self, long_url: &str) -> Result<Link, AppError> {
        let new_link = NewLink {
            code: generate_code(),
            long_url: normalize_url(long_url),
        };

        let link = self.link_repository.create(new_link).await?;
        tracing::info!(code = %link.code, long_url = %link.long_url, "Short link created");

        Ok(link)
    }

    /// Looks up a link by its short code. Absence is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn find_link(&self, code: &str) -> Result<Option<Link>, AppError> {
        self.link_repository.find_by_code(code).await
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.find_link(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))
    }

    /// Points the link `code` at a new (normalized) long URL.
    ///
    /// Updating a code that does not exist is a silent no-op; the return value
    /// only reports whether a record matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn update_long_url(&self, code: &str, long_url: &str) -> Result<bool, AppError> {
        let long_url = normalize_url(long_url);
        let updated = self.link_repository.update_long_url(code, &long_url).await?;

        if updated {
            tracing::info!(code, long_url = %long_url, "Short link updated");
        } else {
            tracing::debug!(code, "Update matched no short link");
        }

        Ok(updated)
    }

    /// Deletes the link `code` after checking that it exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the link is missing or the existence
    /// check fails. Returns [`AppError::Database`] if the delete itself fails.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        match self.link_repository.find_by_code(code).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                tracing::debug!(code, "Delete requested for unknown short link");
                return Err(AppError::Unavailable);
            }
            Err(e) => {
                tracing::error!(code, error = %e, "Lookup before delete failed");
                return Err(AppError::Unavailable);
            }
        }

        self.link_repository.delete_by_code(code).await?;
        tracing::info!(code, "Short link deleted");

        Ok(())
    }
}

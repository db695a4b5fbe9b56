//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link collection.
///
/// Every lookup is an exact match on the short code. When several records share a
/// code, the earliest inserted one is the one found, updated or deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link. No uniqueness check is performed on the code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists every link in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Replaces the long URL of the link with the given code.
    ///
    /// Returns `Ok(false)` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn update_long_url(&self, code: &str, long_url: &str) -> Result<bool, AppError>;

    /// Removes the link with the given code.
    ///
    /// Returns `Ok(false)` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError>;
}

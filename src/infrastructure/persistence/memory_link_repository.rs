//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{PoisonError, RwLock};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Inner {
    links: Vec<Link>,
    next_id: i64,
}

/// Process-local link store.
///
/// Keeps links in a `Vec` so listing returns insertion order, and mirrors the
/// PostgreSQL repository's "first match wins" rule for duplicate codes.
/// Never returns an error.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    inner: RwLock<Inner>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .links
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        inner.next_id += 1;
        let link = Link::new(inner.next_id, new_link.code, new_link.long_url, Utc::now());
        inner.links.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);

        Ok(inner.links.iter().find(|l| l.code == code).cloned())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);

        Ok(inner.links.clone())
    }

    async fn update_long_url(&self, code: &str, long_url: &str) -> Result<bool, AppError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        match inner.links.iter_mut().find(|l| l.code == code) {
            Some(link) => {
                link.long_url = long_url.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        match inner.links.iter().position(|l| l.code == code) {
            Some(index) => {
                inner.links.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

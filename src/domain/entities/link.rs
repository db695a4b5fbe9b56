//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// `code` is generated once at creation and never changes; it is the key every
/// lookup, update and delete goes through. Codes are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            long_url,
            created_at,
        }
    }

    /// Path of the public redirect endpoint for this link.
    pub fn short_path(&self) -> String {
        format!("/u/{}", self.code)
    }
}

/// Input data for creating a new link.
///
/// `long_url` is expected to be normalized already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
}

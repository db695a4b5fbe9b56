//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape of the `urls` table.
#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    id: i64,
    short_url: String,
    long_url: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.short_url, row.long_url, row.created_at)
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Records live in the `urls` table; insertion order is the `id` order.
/// Updates and deletes touch only the earliest record carrying the code.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO urls (short_url, long_url)
            VALUES ($1, $2)
            RETURNING id, short_url, long_url, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.long_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, short_url, long_url, created_at
            FROM urls
            WHERE short_url = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            "SELECT id, short_url, long_url, created_at FROM urls ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn update_long_url(&self, code: &str, long_url: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE urls
            SET long_url = $2
            WHERE id = (SELECT id FROM urls WHERE short_url = $1 ORDER BY id LIMIT 1)
            "#,
        )
        .bind(code)
        .bind(long_url)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM urls
            WHERE id = (SELECT id FROM urls WHERE short_url = $1 ORDER BY id LIMIT 1)
            "#,
        )
        .bind(code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

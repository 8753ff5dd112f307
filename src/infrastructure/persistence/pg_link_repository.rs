//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{InsertOutcome, Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_short_id;

/// Row shape of the `links` table.
#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    id: i64,
    original_url: String,
    short_id: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.original_url, row.short_id, row.created_at)
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Deduplication relies on the `links_original_url_key` constraint and
/// `ON CONFLICT DO NOTHING`, so concurrent inserts of one URL serialize in
/// the database rather than in this process.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, original_url, short_id, created_at
            FROM links
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let inserted = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (original_url, short_id)
            VALUES ($1, $2)
            ON CONFLICT (original_url) DO NOTHING
            RETURNING id, original_url, short_id, created_at
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_id)
        .fetch_optional(self.pool.as_ref())
        .await;

        match inserted {
            Ok(Some(row)) => Ok(InsertOutcome::Created(row.into())),
            // The conflicting row was committed before our INSERT gave up on
            // it, so a fresh statement is guaranteed to see it.
            Ok(None) => self
                .find_by_original_url(&new_link.original_url)
                .await?
                .map(InsertOutcome::Existing)
                .ok_or_else(|| {
                    AppError::Internal(format!(
                        "link for {} conflicted but could not be read back",
                        new_link.original_url
                    ))
                }),
            Err(e) if is_unique_violation_on_short_id(&e) => Ok(InsertOutcome::ShortIdTaken),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, original_url, short_id, created_at
            FROM links
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool, Row};

use crate::model::{Page, PageRequest, Sample, SampleId, SortDirection, SortField};
use crate::store::traits::SampleStore;

/// PostgreSQL-backed store. One `samples` table, primary key = id.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool })
    }

    /// Create the samples table if it does not exist yet. The schema is a
    /// single keyed table; there is nothing to version or migrate beyond it.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS samples (
                id BIGINT PRIMARY KEY,
                name TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create samples table")?;

        Ok(())
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// LIMIT/OFFSET are bound parameters; the ORDER BY clause cannot be, so it is
// assembled from this fixed whitelist.
fn order_by_clause(request: &PageRequest) -> &'static str {
    match (request.sort.field, request.sort.direction) {
        (SortField::Id, SortDirection::Asc) => "id ASC",
        (SortField::Id, SortDirection::Desc) => "id DESC",
        (SortField::Name, SortDirection::Asc) => "name ASC, id ASC",
        (SortField::Name, SortDirection::Desc) => "name DESC, id DESC",
    }
}

#[async_trait::async_trait]
impl SampleStore for PostgresStore {
    async fn find_by_id(&self, id: SampleId) -> Result<Option<Sample>> {
        let row = sqlx::query("SELECT id, name FROM samples WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch sample")?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Sample {
            id: row.get("id"),
            name: row.get("name"),
        }))
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Sample>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM samples")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count samples")?;

        let sql = format!(
            "SELECT id, name FROM samples ORDER BY {} LIMIT $1 OFFSET $2",
            order_by_clause(request)
        );
        let rows = sqlx::query(&sql)
            .bind(i64::from(request.size))
            .bind(request.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .context("Failed to fetch samples page")?;

        let items = rows
            .into_iter()
            .map(|row| Sample {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect();

        Ok(Page::new(items, request, total as u64))
    }

    async fn save(&self, sample: Sample) -> Result<Sample> {
        sqlx::query(
            r#"
            INSERT INTO samples (id, name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name
            "#,
        )
        .bind(sample.id)
        .bind(&sample.name)
        .execute(&self.pool)
        .await
        .context("Failed to upsert sample")?;

        Ok(sample)
    }

    async fn delete(&self, sample: &Sample) -> Result<()> {
        sqlx::query("DELETE FROM samples WHERE id = $1")
            .bind(sample.id)
            .execute(&self.pool)
            .await
            .context("Failed to delete sample")?;

        Ok(())
    }
}

//! Repository for the `product_sales_summaries` table.

use async_trait::async_trait;
use salesboard_core::pagination::{Page, PageRequest};
use salesboard_core::types::DbId;
use sqlx::PgPool;

use super::{RepoResult, SalesSummaryRepository};
use crate::models::sales_summary::{SalesSummary, SalesSummarySortField};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, product_name, region, period_start, period_end, units_sold, revenue_cents";

/// PostgreSQL-backed sales summary storage.
#[derive(Clone)]
pub struct PgSalesSummaryRepo {
    pool: PgPool,
}

impl PgSalesSummaryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, entity: &SalesSummary) -> RepoResult<SalesSummary> {
        let query = format!(
            "INSERT INTO product_sales_summaries
                (product_name, region, period_start, period_end, units_sold, revenue_cents)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SalesSummary>(&query)
            .bind(&entity.product_name)
            .bind(&entity.region)
            .bind(entity.period_start)
            .bind(entity.period_end)
            .bind(entity.units_sold)
            .bind(entity.revenue_cents)
            .fetch_one(&self.pool)
            .await
    }

    /// Insert-or-overwrite under an explicit id.
    ///
    /// When the id is beyond what the sequence has handed out, the sequence
    /// is advanced in the same transaction so later inserts cannot collide.
    async fn upsert(&self, id: DbId, entity: &SalesSummary) -> RepoResult<SalesSummary> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            "INSERT INTO product_sales_summaries
                (id, product_name, region, period_start, period_end, units_sold, revenue_cents)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (id) DO UPDATE SET
                product_name = EXCLUDED.product_name,
                region = EXCLUDED.region,
                period_start = EXCLUDED.period_start,
                period_end = EXCLUDED.period_end,
                units_sold = EXCLUDED.units_sold,
                revenue_cents = EXCLUDED.revenue_cents,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        let saved = sqlx::query_as::<_, SalesSummary>(&query)
            .bind(id)
            .bind(&entity.product_name)
            .bind(&entity.region)
            .bind(entity.period_start)
            .bind(entity.period_end)
            .bind(entity.units_sold)
            .bind(entity.revenue_cents)
            .fetch_one(&mut *tx)
            .await?;

        let resynced = sqlx::query(
            "SELECT setval('product_sales_summaries_id_seq', $1)
             WHERE $1 >= (SELECT last_value FROM product_sales_summaries_id_seq)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        if resynced.rows_affected() > 0 {
            tracing::debug!(id, "Advanced product_sales_summaries_id_seq past explicit id");
        }

        tx.commit().await?;
        Ok(saved)
    }
}

#[async_trait]
impl SalesSummaryRepository for PgSalesSummaryRepo {
    async fn save(&self, entity: SalesSummary) -> RepoResult<SalesSummary> {
        match entity.id {
            None => self.insert(&entity).await,
            Some(id) => self.upsert(id, &entity).await,
        }
    }

    async fn find_all(
        &self,
        request: &PageRequest<SalesSummarySortField>,
    ) -> RepoResult<Page<SalesSummary>> {
        // The sort column comes from a closed enum, never from caller input.
        let query = format!(
            "SELECT {COLUMNS} FROM product_sales_summaries
             ORDER BY {column} {direction} NULLS LAST, id ASC
             LIMIT $1 OFFSET $2",
            column = request.sort.key.column(),
            direction = request.sort.direction.as_sql(),
        );
        let items = sqlx::query_as::<_, SalesSummary>(&query)
            .bind(request.size)
            .bind(request.offset())
            .fetch_all(&self.pool)
            .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM product_sales_summaries")
            .fetch_one(&self.pool)
            .await?;

        Ok(Page::new(items, request, total))
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<SalesSummary>> {
        let query = format!("SELECT {COLUMNS} FROM product_sales_summaries WHERE id = $1");
        sqlx::query_as::<_, SalesSummary>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete_by_id(&self, id: DbId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM product_sales_summaries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> RepoResult<()> {
        crate::health_check(&self.pool).await
    }
}

//! Repository layer.
//!
//! [`SalesSummaryRepository`] is the storage capability the HTTP resource is
//! constructed with. Two implementations exist: [`PgSalesSummaryRepo`] for
//! production and [`InMemorySalesSummaryRepo`] for tests and local runs
//! without a database.

use async_trait::async_trait;
use salesboard_core::pagination::{Page, PageRequest};
use salesboard_core::types::DbId;

use crate::models::sales_summary::{SalesSummary, SalesSummarySortField};

pub mod memory_repo;
pub mod sales_summary_repo;

pub use memory_repo::InMemorySalesSummaryRepo;
pub use sales_summary_repo::PgSalesSummaryRepo;

/// Result type shared by all repository implementations.
pub type RepoResult<T> = Result<T, sqlx::Error>;

/// Storage operations for product sales summaries.
#[async_trait]
pub trait SalesSummaryRepository: Send + Sync {
    /// Persist `entity`.
    ///
    /// Without an id a new record is inserted and assigned one. With an id
    /// the record under that id is overwritten, or created if it does not
    /// exist yet.
    async fn save(&self, entity: SalesSummary) -> RepoResult<SalesSummary>;

    /// Fetch one window of the collection plus the total record count.
    async fn find_all(
        &self,
        request: &PageRequest<SalesSummarySortField>,
    ) -> RepoResult<Page<SalesSummary>>;

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<SalesSummary>>;

    /// Remove the record with `id`. Returns `true` if a record was removed;
    /// a missing record is not an error.
    async fn delete_by_id(&self, id: DbId) -> RepoResult<bool>;

    /// Verify the backing store is reachable.
    async fn health_check(&self) -> RepoResult<()>;
}

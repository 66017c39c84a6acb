//! In-process sales summary storage.
//!
//! Mirrors the PostgreSQL repository's observable behaviour (id assignment,
//! upsert under explicit ids, ordering with `id` as tie-breaker) so the HTTP
//! layer can be exercised without a database.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use salesboard_core::pagination::{Direction, Page, PageRequest};
use salesboard_core::types::DbId;
use tokio::sync::RwLock;

use super::{RepoResult, SalesSummaryRepository};
use crate::models::sales_summary::{SalesSummary, SalesSummarySortField};

#[derive(Debug)]
struct Store {
    rows: BTreeMap<DbId, SalesSummary>,
    /// `None` once an id of `i64::MAX` has been handed out or stored.
    next_id: Option<DbId>,
}

/// Sales summaries held in a `BTreeMap` behind a `RwLock`.
#[derive(Debug)]
pub struct InMemorySalesSummaryRepo {
    store: RwLock<Store>,
}

impl Default for InMemorySalesSummaryRepo {
    fn default() -> Self {
        Self {
            store: RwLock::new(Store {
                rows: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }
}

impl InMemorySalesSummaryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.store.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn compare(a: &SalesSummary, b: &SalesSummary, field: SalesSummarySortField) -> Ordering {
    match field {
        SalesSummarySortField::Id => a.id.cmp(&b.id),
        SalesSummarySortField::ProductName => a.product_name.cmp(&b.product_name),
        SalesSummarySortField::Region => a.region.cmp(&b.region),
        SalesSummarySortField::PeriodStart => a.period_start.cmp(&b.period_start),
        SalesSummarySortField::PeriodEnd => a.period_end.cmp(&b.period_end),
        SalesSummarySortField::UnitsSold => a.units_sold.cmp(&b.units_sold),
        SalesSummarySortField::RevenueCents => a.revenue_cents.cmp(&b.revenue_cents),
    }
}

#[async_trait]
impl SalesSummaryRepository for InMemorySalesSummaryRepo {
    async fn save(&self, mut entity: SalesSummary) -> RepoResult<SalesSummary> {
        let mut store = self.store.write().await;
        let id = match entity.id {
            Some(id) => {
                if store.next_id.is_some_and(|next| id >= next) {
                    store.next_id = id.checked_add(1);
                }
                id
            }
            None => {
                let id = store.next_id.ok_or_else(|| {
                    sqlx::Error::Protocol("sales summary id sequence exhausted".into())
                })?;
                store.next_id = id.checked_add(1);
                id
            }
        };
        tracing::debug!(id, "Stored sales summary in memory");
        entity.id = Some(id);
        store.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn find_all(
        &self,
        request: &PageRequest<SalesSummarySortField>,
    ) -> RepoResult<Page<SalesSummary>> {
        let store = self.store.read().await;
        let mut rows: Vec<&SalesSummary> = store.rows.values().collect();
        rows.sort_by(|a, b| {
            let ord = match (request.sort.key, &a.region, &b.region) {
                // NULLS LAST in both directions, matching the SQL query.
                (SalesSummarySortField::Region, Some(_), None) => Ordering::Less,
                (SalesSummarySortField::Region, None, Some(_)) => Ordering::Greater,
                _ => match request.sort.direction {
                    Direction::Asc => compare(a, b, request.sort.key),
                    Direction::Desc => compare(a, b, request.sort.key).reverse(),
                },
            };
            ord.then_with(|| a.id.cmp(&b.id))
        });

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(0);
        let items = rows.into_iter().skip(offset).take(size).cloned().collect();
        let total = i64::try_from(store.rows.len()).unwrap_or(i64::MAX);

        Ok(Page::new(items, request, total))
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<SalesSummary>> {
        Ok(self.store.read().await.rows.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: DbId) -> RepoResult<bool> {
        Ok(self.store.write().await.rows.remove(&id).is_some())
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}

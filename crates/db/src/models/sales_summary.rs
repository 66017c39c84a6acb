//! Product sales summary entity and its sortable properties.

use chrono::NaiveDate;
use salesboard_core::pagination::SortKey;
use salesboard_core::types::DbId;
use sqlx::FromRow;

/// A row from the `product_sales_summaries` table.
///
/// `id` is `None` until the record has been saved for the first time.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct SalesSummary {
    pub id: Option<DbId>,
    pub product_name: String,
    pub region: Option<String>,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub units_sold: i64,
    pub revenue_cents: i64,
}

/// Properties a sales summary listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SalesSummarySortField {
    #[default]
    Id,
    ProductName,
    Region,
    PeriodStart,
    PeriodEnd,
    UnitsSold,
    RevenueCents,
}

impl SalesSummarySortField {
    /// Column name in `product_sales_summaries`.
    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::ProductName => "product_name",
            Self::Region => "region",
            Self::PeriodStart => "period_start",
            Self::PeriodEnd => "period_end",
            Self::UnitsSold => "units_sold",
            Self::RevenueCents => "revenue_cents",
        }
    }
}

impl SortKey for SalesSummarySortField {
    fn from_property(property: &str) -> Option<Self> {
        // Accept both the JSON (camelCase) and the column (snake_case) spelling.
        let field = match property {
            "id" => Self::Id,
            "productName" | "product_name" => Self::ProductName,
            "region" => Self::Region,
            "periodStart" | "period_start" => Self::PeriodStart,
            "periodEnd" | "period_end" => Self::PeriodEnd,
            "unitsSold" | "units_sold" => Self::UnitsSold,
            "revenueCents" | "revenue_cents" => Self::RevenueCents,
            _ => return None,
        };
        Some(field)
    }
}

//! Wire representation of a product sales summary.

use chrono::NaiveDate;
use salesboard_core::types::DbId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// JSON body accepted and returned by `/api/product-sales-summaries`.
///
/// `id` must be absent on create and present on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummaryDto {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(length(min = 1, max = 255))]
    pub product_name: String,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub region: Option<String>,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    #[validate(range(min = 0))]
    pub units_sold: i64,
    #[validate(range(min = 0))]
    pub revenue_cents: i64,
}

pub mod health;
pub mod sales_summary;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /product-sales-summaries         list, create, update
/// /product-sales-summaries/{id}    get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/product-sales-summaries", sales_summary::router())
}

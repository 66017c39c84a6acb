//! Route definitions for the `/product-sales-summaries` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sales_summary;
use crate::state::AppState;

/// Routes mounted at `/product-sales-summaries`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// PUT    /       -> update
/// GET    /{id}   -> get_by_id
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(sales_summary::list)
                .post(sales_summary::create)
                .put(sales_summary::update),
        )
        .route(
            "/{id}",
            get(sales_summary::get_by_id).delete(sales_summary::delete),
        )
}

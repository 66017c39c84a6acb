use std::sync::Arc;

use salesboard_db::repositories::SalesSummaryRepository;

use crate::headers::AlertHeaders;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Sales summary storage.
    pub repo: Arc<dyn SalesSummaryRepository>,
    /// Builders for the `X-<app>-*` notification headers.
    pub alerts: AlertHeaders,
}

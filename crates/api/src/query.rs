//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Paging parameters (`?page=&size=&sort=property,direction`).
///
/// Defaults and bounds are applied by `PageRequest::from_params`.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

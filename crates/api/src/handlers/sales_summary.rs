//! Handlers for the `/product-sales-summaries` resource.

use axum::extract::{Path, Query, State};
use axum::http::header::{HeaderValue, LOCATION};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use salesboard_core::error::CoreError;
use salesboard_core::pagination::PageRequest;
use salesboard_core::types::DbId;
use salesboard_db::models::sales_summary::SalesSummarySortField;
use validator::Validate;

use crate::dto::SalesSummaryDto;
use crate::error::{AppError, AppResult};
use crate::mapper::SalesSummaryMapper;
use crate::pagination::pagination_headers;
use crate::query::PageParams;
use crate::response::wrap_or_not_found;
use crate::state::AppState;

/// Entity name used in alert headers.
const ENTITY_NAME: &str = "productSalesSummary";

/// Public path of the collection, used for `Location` and `Link` headers.
pub const BASE_PATH: &str = "/api/product-sales-summaries";

/// POST /api/product-sales-summaries
///
/// Rejects a body that already carries an id with 400.
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<SalesSummaryDto>,
) -> AppResult<Response> {
    tracing::debug!(?dto, "REST request to save ProductSalesSummary");
    dto.validate()?;
    if dto.id.is_some() {
        let message = format!("A new {ENTITY_NAME} cannot already have an ID");
        let headers = state.alerts.failure(ENTITY_NAME, "idexists", &message);
        return Err(AppError::Alerted {
            error: CoreError::Validation(message),
            headers,
        });
    }
    save_new(&state, dto).await
}

/// PUT /api/product-sales-summaries
///
/// A body without an id is treated as a create. Otherwise the record is
/// saved under the given id without checking that it exists.
pub async fn update(
    State(state): State<AppState>,
    Json(dto): Json<SalesSummaryDto>,
) -> AppResult<Response> {
    tracing::debug!(?dto, "REST request to update ProductSalesSummary");
    dto.validate()?;
    let Some(id) = dto.id else {
        return save_new(&state, dto).await;
    };

    let saved = state.repo.save(SalesSummaryMapper::to_entity(dto)).await?;
    let result = SalesSummaryMapper::to_dto(saved);
    let headers = state.alerts.entity_update(ENTITY_NAME, id);
    Ok((StatusCode::OK, headers, Json(result)).into_response())
}

/// GET /api/product-sales-summaries?page=&size=&sort=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Response> {
    tracing::debug!(?params, "REST request to get a page of ProductSalesSummaries");
    let request = PageRequest::<SalesSummarySortField>::from_params(
        params.page,
        params.size,
        params.sort.as_deref(),
    )?;

    let page = state.repo.find_all(&request).await?;
    let headers = pagination_headers(&page, BASE_PATH)
        .map_err(|e| AppError::InternalError(format!("invalid pagination header: {e}")))?;
    let body = SalesSummaryMapper::to_dto_list(page.items);
    Ok((StatusCode::OK, headers, Json(body)).into_response())
}

/// GET /api/product-sales-summaries/{id}
///
/// Responds 404 with an empty body when no record has this id.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    tracing::debug!(id, "REST request to get ProductSalesSummary");
    let dto = state
        .repo
        .find_by_id(id)
        .await?
        .map(SalesSummaryMapper::to_dto);
    Ok(wrap_or_not_found(dto))
}

/// DELETE /api/product-sales-summaries/{id}
///
/// Always 200; deleting an unknown id is not reported as an error.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    tracing::debug!(id, "REST request to delete ProductSalesSummary");
    let removed = state.repo.delete_by_id(id).await?;
    if !removed {
        tracing::debug!(id, "No ProductSalesSummary to delete");
    }
    let headers = state.alerts.entity_deletion(ENTITY_NAME, id);
    Ok((StatusCode::OK, headers).into_response())
}

/// Insert a validated, id-less DTO and build the 201 response.
async fn save_new(state: &AppState, dto: SalesSummaryDto) -> AppResult<Response> {
    let saved = state.repo.save(SalesSummaryMapper::to_entity(dto)).await?;
    let id = saved
        .id
        .ok_or_else(|| CoreError::Internal("repository returned a record without an id".into()))?;
    let result = SalesSummaryMapper::to_dto(saved);

    let mut headers = state.alerts.entity_creation(ENTITY_NAME, id);
    let location = HeaderValue::try_from(format!("{BASE_PATH}/{id}"))
        .map_err(|e| AppError::InternalError(format!("invalid Location header: {e}")))?;
    headers.insert(LOCATION, location);

    Ok((StatusCode::CREATED, headers, Json(result)).into_response())
}

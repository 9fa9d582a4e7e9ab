use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    errors::ServiceError,
    handlers::{ListQuery, PaginatedResponse},
    services::adjustments::AdjustStockRequest,
    tenant::TenantContext,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_adjustments).post(adjust_stock))
        .route("/:id", get(get_adjustment))
        .route("/:id/details", get(adjustment_details))
}

async fn adjust_stock(
    State(state): State<AppState>,
    ctx: TenantContext,
    Json(payload): Json<AdjustStockRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let adjustment = state.adjustments.adjust_stock(&ctx, payload).await?;
    Ok((StatusCode::CREATED, Json(adjustment)))
}

async fn list_adjustments(
    State(state): State<AppState>,
    ctx: TenantContext,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let (page, per_page) = query.resolve(&state.config);
    let (items, total) = state
        .adjustments
        .list_adjustments(&ctx, page, per_page)
        .await?;
    Ok(Json(PaginatedResponse::new(items, total, page, per_page)))
}

async fn get_adjustment(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.adjustments.get_adjustment(&ctx, id).await?))
}

async fn adjustment_details(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.adjustments.details_for(&ctx, id).await?))
}

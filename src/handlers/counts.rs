use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::{
    errors::ServiceError,
    handlers::{ListQuery, PaginatedResponse},
    services::counts::{AddCountDetailRequest, StartCountRequest},
    tenant::TenantContext,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_counts).post(start_count))
        .route("/:id", get(get_count))
        .route("/:id/details", get(count_details).post(add_count_detail))
        .route("/:id/complete", post(complete_count))
        .route("/:id/cancel", post(cancel_count))
}

async fn start_count(
    State(state): State<AppState>,
    ctx: TenantContext,
    Json(payload): Json<StartCountRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let count = state.counts.start_count(&ctx, payload).await?;
    Ok((StatusCode::CREATED, Json(count)))
}

async fn add_count_detail(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
    Json(payload): Json<AddCountDetailRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let detail = state.counts.add_count_detail(&ctx, id, payload).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

async fn complete_count(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.counts.complete_count(&ctx, id).await?))
}

async fn cancel_count(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.counts.cancel_count(&ctx, id).await?))
}

async fn list_counts(
    State(state): State<AppState>,
    ctx: TenantContext,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let (page, per_page) = query.resolve(&state.config);
    let (items, total) = state.counts.list_counts(&ctx, page, per_page).await?;
    Ok(Json(PaginatedResponse::new(items, total, page, per_page)))
}

async fn get_count(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.counts.get_count(&ctx, id).await?))
}

async fn count_details(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.counts.details_for(&ctx, id).await?))
}

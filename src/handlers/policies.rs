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
    services::policies::{NewInventoryPolicy, UpdateInventoryPolicy},
    tenant::TenantContext,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_policies).post(create_policy))
        .route("/:id", get(get_policy).put(update_policy))
        .route("/product/:product_id", get(find_by_product))
        .route("/product/:product_id/reorder", get(reorder_check))
}

async fn create_policy(
    State(state): State<AppState>,
    ctx: TenantContext,
    Json(payload): Json<NewInventoryPolicy>,
) -> Result<impl IntoResponse, ServiceError> {
    let policy = state.policies.create_policy(&ctx, payload).await?;
    Ok((StatusCode::CREATED, Json(policy)))
}

async fn update_policy(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInventoryPolicy>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.policies.update_policy(&ctx, id, payload).await?))
}

async fn get_policy(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.policies.get_policy(&ctx, id).await?))
}

async fn list_policies(
    State(state): State<AppState>,
    ctx: TenantContext,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let (page, per_page) = query.resolve(&state.config);
    let (items, total) = state.policies.list_policies(&ctx, page, per_page).await?;
    Ok(Json(PaginatedResponse::new(items, total, page, per_page)))
}

async fn find_by_product(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.policies.find_by_product(&ctx, product_id).await?))
}

async fn reorder_check(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.policies.reorder_needed(&ctx, product_id).await?))
}

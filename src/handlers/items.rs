use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    entities::inventory_item::ItemStatus,
    errors::ServiceError,
    handlers::{ListQuery, PaginatedResponse},
    services::items::{NewInventoryItem, UpdateInventoryItem},
    tenant::TenantContext,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
        .route("/product/:product_id", get(find_by_product))
        .route("/status/:status", get(find_by_status))
        .route("/in-stock", get(find_with_stock))
}

async fn list_items(
    State(state): State<AppState>,
    ctx: TenantContext,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let (page, per_page) = query.resolve(&state.config);
    let (items, total) = state.items.list_items(&ctx, page, per_page).await?;
    Ok(Json(PaginatedResponse::new(items, total, page, per_page)))
}

async fn create_item(
    State(state): State<AppState>,
    ctx: TenantContext,
    Json(payload): Json<NewInventoryItem>,
) -> Result<impl IntoResponse, ServiceError> {
    let item = state.items.create_item(&ctx, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn get_item(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.items.get_item(&ctx, id).await?))
}

async fn update_item(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInventoryItem>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.items.update_item(&ctx, id, payload).await?))
}

async fn delete_item(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.items.delete_item(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn find_by_product(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.items.find_by_product(&ctx, product_id).await?))
}

async fn find_by_status(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let status = ItemStatus::from_str(&status)
        .ok_or_else(|| ServiceError::validation("status", format!("unknown status '{status}'")))?;
    Ok(Json(state.items.find_by_status(&ctx, status).await?))
}

#[derive(Debug, Deserialize)]
struct StockQuery {
    #[serde(default)]
    min: Decimal,
}

async fn find_with_stock(
    State(state): State<AppState>,
    ctx: TenantContext,
    Query(query): Query<StockQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(
        state.items.find_with_stock_above(&ctx, query.min).await?,
    ))
}

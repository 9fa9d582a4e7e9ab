use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    entities::inventory_reservation::ReservationStatus,
    errors::ServiceError,
    handlers::{ListQuery, PaginatedResponse},
    services::reservations::ReserveStockRequest,
    tenant::TenantContext,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reservations).post(reserve_stock))
        .route("/:id", get(get_reservation))
        .route("/:id/details", get(reservation_details))
        .route("/:id/release", post(release_reservation))
        .route("/:id/confirm", post(confirm_reservation))
}

async fn reserve_stock(
    State(state): State<AppState>,
    ctx: TenantContext,
    Json(payload): Json<ReserveStockRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let reservation = state.reservations.reserve_stock(&ctx, payload).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

async fn release_reservation(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.reservations.release_reservation(&ctx, id).await?))
}

async fn confirm_reservation(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.reservations.confirm_reservation(&ctx, id).await?))
}

#[derive(Debug, Deserialize)]
struct ReservationListQuery {
    status: Option<ReservationStatus>,
    page: Option<u64>,
    per_page: Option<u64>,
}

async fn list_reservations(
    State(state): State<AppState>,
    ctx: TenantContext,
    Query(query): Query<ReservationListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let list = ListQuery {
        page: query.page,
        per_page: query.per_page,
    };
    let (page, per_page) = list.resolve(&state.config);
    let (items, total) = state
        .reservations
        .list_reservations(&ctx, query.status, page, per_page)
        .await?;
    Ok(Json(PaginatedResponse::new(items, total, page, per_page)))
}

async fn get_reservation(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.reservations.get_reservation(&ctx, id).await?))
}

async fn reservation_details(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.reservations.details_for(&ctx, id).await?))
}

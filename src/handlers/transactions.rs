use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    entities::inventory_transaction::TransactionType,
    errors::ServiceError,
    handlers::{ListQuery, PaginatedResponse},
    services::transactions::RecordMovementRequest,
    tenant::TenantContext,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_transactions))
        .route("/receipts", post(record_receipt))
        .route("/issues", post(record_issue))
        .route("/transfers", post(record_transfer))
        .route("/:id", get(get_transaction))
        .route("/:id/details", get(transaction_details))
}

async fn record_receipt(
    State(state): State<AppState>,
    ctx: TenantContext,
    Json(payload): Json<RecordMovementRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let header = state.transactions.record_receipt(&ctx, payload).await?;
    Ok((StatusCode::CREATED, Json(header)))
}

async fn record_issue(
    State(state): State<AppState>,
    ctx: TenantContext,
    Json(payload): Json<RecordMovementRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let header = state.transactions.record_issue(&ctx, payload).await?;
    Ok((StatusCode::CREATED, Json(header)))
}

async fn record_transfer(
    State(state): State<AppState>,
    ctx: TenantContext,
    Json(payload): Json<RecordMovementRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let header = state.transactions.record_transfer(&ctx, payload).await?;
    Ok((StatusCode::CREATED, Json(header)))
}

#[derive(Debug, Deserialize)]
struct TransactionListQuery {
    transaction_type: Option<String>,
    page: Option<u64>,
    per_page: Option<u64>,
}

async fn list_transactions(
    State(state): State<AppState>,
    ctx: TenantContext,
    Query(query): Query<TransactionListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let transaction_type = query
        .transaction_type
        .as_deref()
        .map(|raw| {
            TransactionType::from_str(raw).ok_or_else(|| {
                ServiceError::validation(
                    "transaction_type",
                    format!("unknown transaction type '{raw}'"),
                )
            })
        })
        .transpose()?;

    let list = ListQuery {
        page: query.page,
        per_page: query.per_page,
    };
    let (page, per_page) = list.resolve(&state.config);
    let (items, total) = state
        .transactions
        .list_transactions(&ctx, transaction_type, page, per_page)
        .await?;
    Ok(Json(PaginatedResponse::new(items, total, page, per_page)))
}

async fn get_transaction(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.transactions.get_transaction(&ctx, id).await?))
}

async fn transaction_details(
    State(state): State<AppState>,
    ctx: TenantContext,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.transactions.details_for(&ctx, id).await?))
}

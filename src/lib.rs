//! Multi-tenant warehouse inventory ledger.
//!
//! Stock for every tenant lives in one schema; isolation is enforced by the
//! store layer, which scopes every query and insert to the tenant resolved
//! from the request. All quantity changes flow through four movement
//! protocols (adjustments, transactions, reservations, counts), each of
//! which journals what it did in the same database transaction that moves
//! the stock.

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod services;
pub mod store;
pub mod tenant;

use std::sync::Arc;

use axum::Router;

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::services::{
    InventoryAdjustmentService, InventoryCountService, InventoryItemService,
    InventoryPolicyService, InventoryReservationService, InventoryTransactionService,
};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
    pub config: AppConfig,
    pub items: Arc<InventoryItemService>,
    pub adjustments: Arc<InventoryAdjustmentService>,
    pub transactions: Arc<InventoryTransactionService>,
    pub reservations: Arc<InventoryReservationService>,
    pub counts: Arc<InventoryCountService>,
    pub policies: Arc<InventoryPolicyService>,
}

impl AppState {
    pub fn new(db: Arc<DbPool>, config: AppConfig) -> Self {
        Self {
            items: Arc::new(InventoryItemService::new(db.clone())),
            adjustments: Arc::new(InventoryAdjustmentService::new(db.clone())),
            transactions: Arc::new(InventoryTransactionService::new(db.clone())),
            reservations: Arc::new(InventoryReservationService::new(db.clone())),
            counts: Arc::new(InventoryCountService::new(db.clone())),
            policies: Arc::new(InventoryPolicyService::new(db.clone())),
            db,
            config,
        }
    }
}

/// Versioned API surface. Every route below requires the tenant header.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/inventory/items", handlers::items::router())
        .nest("/inventory/adjustments", handlers::adjustments::router())
        .nest("/inventory/transactions", handlers::transactions::router())
        .nest("/inventory/reservations", handlers::reservations::router())
        .nest("/inventory/counts", handlers::counts::router())
        .nest("/inventory/policies", handlers::policies::router())
}

/// Full application router: health endpoints plus the v1 API.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::health::router())
        .nest("/api/v1", api_v1_routes())
        .with_state(state)
}

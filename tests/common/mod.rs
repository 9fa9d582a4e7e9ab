use std::sync::Arc;

use rust_decimal::Decimal;
use wms_inventory_api::{
    db::{establish_connection_with_config, run_migrations, DbConfig, DbPool},
    entities::inventory_item,
    services::items::{InventoryItemService, NewInventoryItem},
    tenant::TenantContext,
};

/// Fresh in-memory database per test. A single connection keeps the whole
/// test on one SQLite memory instance.
pub async fn setup_db() -> Arc<DbPool> {
    let config = DbConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let pool = establish_connection_with_config(&config)
        .await
        .expect("Failed to connect to test database");
    run_migrations(&pool).await.expect("Failed to run migrations");
    Arc::new(pool)
}

pub async fn seed_item(
    db: &Arc<DbPool>,
    ctx: &TenantContext,
    product_id: i32,
    on_hand: Decimal,
) -> inventory_item::Model {
    let service = InventoryItemService::new(db.clone());
    service
        .create_item(
            ctx,
            NewInventoryItem {
                product_id,
                variant_id: None,
                lot_number: None,
                serial_number: None,
                condition: None,
                quantity_on_hand: on_hand,
                unit_of_measure: Some("EA".to_string()),
                location_id: 1,
                facility_id: Some(1),
                expiry_date: None,
                manufacture_date: None,
                unit_cost: None,
                notes: None,
            },
        )
        .await
        .expect("Failed to seed inventory item")
}

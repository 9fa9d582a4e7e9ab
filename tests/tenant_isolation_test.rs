mod common;

use assert_matches::assert_matches;
use rust_decimal_macros::dec;
use wms_inventory_api::{
    entities::inventory_adjustment::AdjustmentType,
    errors::ServiceError,
    services::{
        adjustments::AdjustStockRequest, items::InventoryItemService,
        policies::NewInventoryPolicy, InventoryAdjustmentService, InventoryPolicyService,
    },
    tenant::TenantContext,
};

#[tokio::test]
async fn tenants_cannot_see_each_others_items() {
    let db = common::setup_db().await;
    let acme = TenantContext::for_tenant(1);
    let globex = TenantContext::for_tenant(2);

    let acme_item = common::seed_item(&db, &acme, 100, dec!(50)).await;
    common::seed_item(&db, &globex, 100, dec!(5)).await;

    let items = InventoryItemService::new(db.clone());

    // Lookup across the boundary reads exactly like a missing row.
    let err = items.get_item(&globex, acme_item.item_id).await.unwrap_err();
    assert_matches!(err, ServiceError::NotFound { .. });
    assert_eq!(
        err.to_string(),
        format!("InventoryItem with id {} not found", acme_item.item_id)
    );

    let (globex_items, total) = items.list_items(&globex, 0, 10).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(globex_items[0].quantity_on_hand, dec!(5));
}

#[tokio::test]
async fn mutations_cannot_cross_the_tenant_boundary() {
    let db = common::setup_db().await;
    let acme = TenantContext::for_tenant(1);
    let globex = TenantContext::for_tenant(2);

    let acme_item = common::seed_item(&db, &acme, 100, dec!(50)).await;

    let adjustments = InventoryAdjustmentService::new(db.clone());
    let err = adjustments
        .adjust_stock(
            &globex,
            AdjustStockRequest {
                item_id: acme_item.item_id,
                adjustment_type: AdjustmentType::Decrease,
                quantity: dec!(10),
                reason_code: None,
                reference_number: None,
                reference_type: None,
                reference_id: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::NotFound { .. });

    let items = InventoryItemService::new(db.clone());
    let untouched = items.get_item(&acme, acme_item.item_id).await.unwrap();
    assert_eq!(untouched.quantity_on_hand, dec!(50));
}

#[tokio::test]
async fn privileged_scope_sees_every_tenant_but_cannot_insert() {
    let db = common::setup_db().await;
    let acme = TenantContext::for_tenant(1);
    let globex = TenantContext::for_tenant(2);

    common::seed_item(&db, &acme, 100, dec!(50)).await;
    common::seed_item(&db, &globex, 200, dec!(5)).await;

    let items = InventoryItemService::new(db.clone());
    let (all, total) = items
        .list_items(&TenantContext::privileged(), 0, 10)
        .await
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(all.len(), 2);

    // Inserts require a concrete tenant to stamp.
    let policies = InventoryPolicyService::new(db.clone());
    let err = policies
        .create_policy(
            &TenantContext::privileged(),
            NewInventoryPolicy {
                product_id: 100,
                variant_id: None,
                min_stock_level: None,
                max_stock_level: None,
                reorder_point: None,
                reorder_quantity: None,
                valuation_method: None,
                abc_class: None,
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::MissingTenant);
}

#[tokio::test]
async fn soft_deleted_items_disappear_from_scoped_queries() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(50)).await;

    let items = InventoryItemService::new(db.clone());
    items.delete_item(&ctx, item.item_id).await.unwrap();

    let err = items.get_item(&ctx, item.item_id).await.unwrap_err();
    assert_matches!(err, ServiceError::NotFound { .. });

    let (listed, total) = items.list_items(&ctx, 0, 10).await.unwrap();
    assert!(listed.is_empty());
    assert_eq!(total, 0);
}

#[tokio::test]
async fn reorder_check_is_tenant_scoped() {
    let db = common::setup_db().await;
    let acme = TenantContext::for_tenant(1);
    let globex = TenantContext::for_tenant(2);

    common::seed_item(&db, &acme, 100, dec!(3)).await;
    common::seed_item(&db, &globex, 100, dec!(500)).await;

    let policies = InventoryPolicyService::new(db.clone());
    policies
        .create_policy(
            &acme,
            NewInventoryPolicy {
                product_id: 100,
                variant_id: None,
                min_stock_level: Some(dec!(2)),
                max_stock_level: Some(dec!(100)),
                reorder_point: Some(dec!(10)),
                reorder_quantity: Some(dec!(50)),
                valuation_method: None,
                abc_class: Some("A".to_string()),
            },
        )
        .await
        .unwrap();

    // Only acme's 3 units count against acme's reorder point; globex's
    // 500 units of the same product id are invisible.
    let check = policies.reorder_needed(&acme, 100).await.unwrap();
    assert_eq!(check.on_hand_total, dec!(3));
    assert!(check.reorder_needed);

    let check = policies.reorder_needed(&globex, 100).await.unwrap();
    assert_eq!(check.on_hand_total, dec!(500));
    assert!(!check.reorder_needed);
}

mod common;

use assert_matches::assert_matches;
use rust_decimal_macros::dec;
use wms_inventory_api::{
    entities::{
        inventory_adjustment::{AdjustmentStatus, AdjustmentType},
        inventory_transaction::{TransactionStatus, TransactionType},
    },
    errors::{ServiceError, StockAction},
    services::{
        adjustments::AdjustStockRequest, items::InventoryItemService,
        reservations::ReserveStockRequest, transactions::RecordMovementRequest,
        InventoryAdjustmentService, InventoryReservationService, InventoryTransactionService,
    },
    tenant::TenantContext,
};

fn movement(item_id: i32, quantity: rust_decimal::Decimal) -> RecordMovementRequest {
    RecordMovementRequest {
        item_id,
        quantity,
        reference_number: None,
        reference_type: None,
        reference_id: None,
        from_location_id: None,
        to_location_id: None,
        notes: None,
    }
}

#[tokio::test]
async fn adjustment_increase_and_decrease_move_on_hand() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(50)).await;

    let adjustments = InventoryAdjustmentService::new(db.clone());
    let items = InventoryItemService::new(db.clone());

    let adjustment = adjustments
        .adjust_stock(
            &ctx,
            AdjustStockRequest {
                item_id: item.item_id,
                adjustment_type: AdjustmentType::Increase,
                quantity: dec!(25),
                reason_code: Some("FOUND".to_string()),
                reference_number: None,
                reference_type: None,
                reference_id: None,
                notes: None,
            },
        )
        .await
        .expect("increase failed");
    assert_eq!(adjustment.status(), Some(AdjustmentStatus::Approved));
    assert!(adjustment.adjustment_number.starts_with("ADJ-"));

    let after = items.get_item(&ctx, item.item_id).await.unwrap();
    assert_eq!(after.quantity_on_hand, dec!(75));
    assert_eq!(after.quantity_available, dec!(75));
    assert_eq!(after.version, item.version + 1);

    adjustments
        .adjust_stock(
            &ctx,
            AdjustStockRequest {
                item_id: item.item_id,
                adjustment_type: AdjustmentType::Decrease,
                quantity: dec!(30),
                reason_code: Some("DAMAGED".to_string()),
                reference_number: None,
                reference_type: None,
                reference_id: None,
                notes: None,
            },
        )
        .await
        .expect("decrease failed");

    let after = items.get_item(&ctx, item.item_id).await.unwrap();
    assert_eq!(after.quantity_on_hand, dec!(45));
}

#[tokio::test]
async fn adjustment_detail_records_before_and_after() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(10)).await;

    let adjustments = InventoryAdjustmentService::new(db.clone());
    let adjustment = adjustments
        .adjust_stock(
            &ctx,
            AdjustStockRequest {
                item_id: item.item_id,
                adjustment_type: AdjustmentType::Increase,
                quantity: dec!(5),
                reason_code: None,
                reference_number: None,
                reference_type: None,
                reference_id: None,
                notes: None,
            },
        )
        .await
        .unwrap();

    let details = adjustments
        .details_for(&ctx, adjustment.adjustment_id)
        .await
        .unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].quantity_before, dec!(10));
    assert_eq!(details[0].quantity_after, dec!(15));
    assert_eq!(details[0].quantity_adjusted, dec!(5));
}

#[tokio::test]
async fn decrease_below_zero_is_rejected_and_nothing_is_written() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(10)).await;

    let adjustments = InventoryAdjustmentService::new(db.clone());
    let err = adjustments
        .adjust_stock(
            &ctx,
            AdjustStockRequest {
                item_id: item.item_id,
                adjustment_type: AdjustmentType::Decrease,
                quantity: dec!(11),
                reason_code: None,
                reference_number: None,
                reference_type: None,
                reference_id: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert_matches!(
        err,
        ServiceError::InsufficientStock {
            action: StockAction::Decrease,
            ..
        }
    );

    let items = InventoryItemService::new(db.clone());
    let after = items.get_item(&ctx, item.item_id).await.unwrap();
    assert_eq!(after.quantity_on_hand, dec!(10));

    let (headers, total) = adjustments.list_adjustments(&ctx, 0, 10).await.unwrap();
    assert!(headers.is_empty());
    assert_eq!(total, 0);
}

#[tokio::test]
async fn zero_or_negative_quantity_is_rejected() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(10)).await;

    let transactions = InventoryTransactionService::new(db.clone());
    let err = transactions
        .record_receipt(&ctx, movement(item.item_id, dec!(0)))
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::Validation { .. });

    let err = transactions
        .record_issue(&ctx, movement(item.item_id, dec!(-3)))
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::Validation { .. });
}

#[tokio::test]
async fn receipt_adds_stock_and_journals_it() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(20)).await;

    let transactions = InventoryTransactionService::new(db.clone());
    let header = transactions
        .record_receipt(&ctx, movement(item.item_id, dec!(30)))
        .await
        .expect("receipt failed");
    assert_eq!(header.transaction_type(), Some(TransactionType::Receipt));
    assert_eq!(header.status(), Some(TransactionStatus::Completed));

    let items = InventoryItemService::new(db.clone());
    let after = items.get_item(&ctx, item.item_id).await.unwrap();
    assert_eq!(after.quantity_on_hand, dec!(50));

    let details = transactions
        .details_for(&ctx, header.transaction_id)
        .await
        .unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].quantity, dec!(30));
    assert_eq!(details[0].item_id, item.item_id);
}

#[tokio::test]
async fn issue_removes_stock_and_rejects_shortage() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(20)).await;

    let transactions = InventoryTransactionService::new(db.clone());
    transactions
        .record_issue(&ctx, movement(item.item_id, dec!(15)))
        .await
        .expect("issue failed");

    let items = InventoryItemService::new(db.clone());
    let after = items.get_item(&ctx, item.item_id).await.unwrap();
    assert_eq!(after.quantity_on_hand, dec!(5));

    let err = transactions
        .record_issue(&ctx, movement(item.item_id, dec!(6)))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        ServiceError::InsufficientStock {
            action: StockAction::Issue,
            ..
        }
    );
}

#[tokio::test]
async fn transfer_journals_without_moving_quantities() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(20)).await;

    let transactions = InventoryTransactionService::new(db.clone());
    let mut request = movement(item.item_id, dec!(8));
    request.from_location_id = Some(1);
    request.to_location_id = Some(2);
    let header = transactions
        .record_transfer(&ctx, request)
        .await
        .expect("transfer failed");
    assert_eq!(header.transaction_type(), Some(TransactionType::Transfer));

    let items = InventoryItemService::new(db.clone());
    let after = items.get_item(&ctx, item.item_id).await.unwrap();
    assert_eq!(after.quantity_on_hand, dec!(20));

    let details = transactions
        .details_for(&ctx, header.transaction_id)
        .await
        .unwrap();
    assert_eq!(details[0].from_location_id, Some(1));
    assert_eq!(details[0].to_location_id, Some(2));
}

#[tokio::test]
async fn transfer_requires_stock_and_both_locations() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(5)).await;

    let transactions = InventoryTransactionService::new(db.clone());

    let mut request = movement(item.item_id, dec!(8));
    request.from_location_id = Some(1);
    request.to_location_id = Some(2);
    let err = transactions.record_transfer(&ctx, request).await.unwrap_err();
    assert_matches!(
        err,
        ServiceError::InsufficientStock {
            action: StockAction::Transfer,
            ..
        }
    );

    let err = transactions
        .record_transfer(&ctx, movement(item.item_id, dec!(2)))
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::Validation { .. });
}

#[tokio::test]
async fn issue_ignores_reservations() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(100)).await;

    let reservations = InventoryReservationService::new(db.clone());
    reservations
        .reserve_stock(
            &ctx,
            ReserveStockRequest {
                item_id: item.item_id,
                quantity: dec!(30),
                reservation_type: None,
                reference_number: None,
                reference_type: None,
                reference_id: None,
                expiry_date: None,
                priority: None,
                notes: None,
            },
        )
        .await
        .unwrap();

    // Allocations are soft holds: an issue is checked against on-hand, so
    // 80 can still leave the shelf even with 30 reserved.
    let transactions = InventoryTransactionService::new(db.clone());
    transactions
        .record_issue(&ctx, movement(item.item_id, dec!(80)))
        .await
        .expect("issue failed");

    let items = InventoryItemService::new(db.clone());
    let after = items.get_item(&ctx, item.item_id).await.unwrap();
    assert_eq!(after.quantity_on_hand, dec!(20));
    assert_eq!(after.quantity_allocated, dec!(30));
    assert_eq!(after.quantity_available, dec!(-10));
}

#[tokio::test]
async fn transaction_list_filters_by_type() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(100)).await;

    let transactions = InventoryTransactionService::new(db.clone());
    transactions
        .record_receipt(&ctx, movement(item.item_id, dec!(10)))
        .await
        .unwrap();
    transactions
        .record_issue(&ctx, movement(item.item_id, dec!(4)))
        .await
        .unwrap();

    let (all, total) = transactions
        .list_transactions(&ctx, None, 0, 10)
        .await
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(all.len(), 2);

    let (issues, total) = transactions
        .list_transactions(&ctx, Some(TransactionType::Issue), 0, 10)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(issues[0].transaction_type(), Some(TransactionType::Issue));
}

mod common;

use assert_matches::assert_matches;
use rust_decimal_macros::dec;
use wms_inventory_api::{
    entities::inventory_reservation::ReservationStatus,
    errors::{ServiceError, StockAction},
    services::{
        items::InventoryItemService, reservations::ReserveStockRequest,
        InventoryReservationService,
    },
    tenant::TenantContext,
};

fn reserve(item_id: i32, quantity: rust_decimal::Decimal) -> ReserveStockRequest {
    ReserveStockRequest {
        item_id,
        quantity,
        reservation_type: Some("SALES_ORDER".to_string()),
        reference_number: Some("SO-1001".to_string()),
        reference_type: Some("SALES_ORDER".to_string()),
        reference_id: Some(1001),
        expiry_date: None,
        priority: None,
        notes: None,
    }
}

#[tokio::test]
async fn reserving_grows_allocated_and_shrinks_available() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(50)).await;

    let reservations = InventoryReservationService::new(db.clone());
    let reservation = reservations
        .reserve_stock(&ctx, reserve(item.item_id, dec!(20)))
        .await
        .expect("reserve failed");
    assert_eq!(reservation.status(), Some(ReservationStatus::Reserved));

    let items = InventoryItemService::new(db.clone());
    let after = items.get_item(&ctx, item.item_id).await.unwrap();
    assert_eq!(after.quantity_on_hand, dec!(50));
    assert_eq!(after.quantity_allocated, dec!(20));
    assert_eq!(after.quantity_available, dec!(30));

    let details = reservations
        .details_for(&ctx, reservation.reservation_id)
        .await
        .unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].quantity_requested, dec!(20));
    assert_eq!(details[0].quantity_allocated, dec!(20));
    assert_eq!(details[0].quantity_fulfilled, dec!(0));
}

#[tokio::test]
async fn reservation_guard_uses_available_not_on_hand() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(50)).await;

    let reservations = InventoryReservationService::new(db.clone());
    reservations
        .reserve_stock(&ctx, reserve(item.item_id, dec!(40)))
        .await
        .unwrap();

    // 50 on hand but only 10 unreserved.
    let err = reservations
        .reserve_stock(&ctx, reserve(item.item_id, dec!(11)))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        ServiceError::InsufficientStock {
            action: StockAction::Reserve,
            available,
            requested,
            ..
        } if available == dec!(10) && requested == dec!(11)
    );
}

#[tokio::test]
async fn releasing_returns_the_hold() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(50)).await;

    let reservations = InventoryReservationService::new(db.clone());
    let reservation = reservations
        .reserve_stock(&ctx, reserve(item.item_id, dec!(20)))
        .await
        .unwrap();

    let released = reservations
        .release_reservation(&ctx, reservation.reservation_id)
        .await
        .expect("release failed");
    assert_eq!(released.status(), Some(ReservationStatus::Cancelled));

    let items = InventoryItemService::new(db.clone());
    let after = items.get_item(&ctx, item.item_id).await.unwrap();
    assert_eq!(after.quantity_on_hand, dec!(50));
    assert_eq!(after.quantity_allocated, dec!(0));
    assert_eq!(after.quantity_available, dec!(50));

    let details = reservations
        .details_for(&ctx, reservation.reservation_id)
        .await
        .unwrap();
    assert_eq!(details[0].quantity_allocated, dec!(0));
}

#[tokio::test]
async fn confirming_consumes_on_hand_and_allocated() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(50)).await;

    let reservations = InventoryReservationService::new(db.clone());
    let reservation = reservations
        .reserve_stock(&ctx, reserve(item.item_id, dec!(20)))
        .await
        .unwrap();

    let confirmed = reservations
        .confirm_reservation(&ctx, reservation.reservation_id)
        .await
        .expect("confirm failed");
    assert_eq!(confirmed.status(), Some(ReservationStatus::Fulfilled));

    let items = InventoryItemService::new(db.clone());
    let after = items.get_item(&ctx, item.item_id).await.unwrap();
    assert_eq!(after.quantity_on_hand, dec!(30));
    assert_eq!(after.quantity_allocated, dec!(0));
    assert_eq!(after.quantity_available, dec!(30));

    let details = reservations
        .details_for(&ctx, reservation.reservation_id)
        .await
        .unwrap();
    assert_eq!(details[0].quantity_fulfilled, dec!(20));
}

#[tokio::test]
async fn terminal_reservations_refuse_further_transitions() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(50)).await;

    let reservations = InventoryReservationService::new(db.clone());
    let reservation = reservations
        .reserve_stock(&ctx, reserve(item.item_id, dec!(20)))
        .await
        .unwrap();
    reservations
        .confirm_reservation(&ctx, reservation.reservation_id)
        .await
        .unwrap();

    // Fulfilled is terminal: releasing or re-confirming must fail and the
    // ledger must not move again.
    let err = reservations
        .release_reservation(&ctx, reservation.reservation_id)
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::InvalidStateTransition { .. });

    let err = reservations
        .confirm_reservation(&ctx, reservation.reservation_id)
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::InvalidStateTransition { .. });

    let items = InventoryItemService::new(db.clone());
    let after = items.get_item(&ctx, item.item_id).await.unwrap();
    assert_eq!(after.quantity_on_hand, dec!(30));
    assert_eq!(after.quantity_allocated, dec!(0));
}

#[tokio::test]
async fn released_reservation_cannot_be_confirmed() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(50)).await;

    let reservations = InventoryReservationService::new(db.clone());
    let reservation = reservations
        .reserve_stock(&ctx, reserve(item.item_id, dec!(20)))
        .await
        .unwrap();
    reservations
        .release_reservation(&ctx, reservation.reservation_id)
        .await
        .unwrap();

    let err = reservations
        .confirm_reservation(&ctx, reservation.reservation_id)
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::InvalidStateTransition { .. });
}

#[tokio::test]
async fn reservation_list_filters_by_status() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(100)).await;

    let reservations = InventoryReservationService::new(db.clone());
    let first = reservations
        .reserve_stock(&ctx, reserve(item.item_id, dec!(10)))
        .await
        .unwrap();
    reservations
        .reserve_stock(&ctx, reserve(item.item_id, dec!(10)))
        .await
        .unwrap();
    reservations
        .release_reservation(&ctx, first.reservation_id)
        .await
        .unwrap();

    let (open, total) = reservations
        .list_reservations(&ctx, Some(ReservationStatus::Reserved), 0, 10)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(open[0].status(), Some(ReservationStatus::Reserved));

    let (cancelled, _) = reservations
        .list_reservations(&ctx, Some(ReservationStatus::Cancelled), 0, 10)
        .await
        .unwrap();
    assert_eq!(cancelled.len(), 1);
}

mod common;

use assert_matches::assert_matches;
use rust_decimal_macros::dec;
use wms_inventory_api::{
    entities::inventory_count::CountStatus,
    errors::ServiceError,
    services::{
        counts::{AddCountDetailRequest, StartCountRequest, COUNT_VARIANCE_REASON},
        items::InventoryItemService,
        InventoryAdjustmentService, InventoryCountService,
    },
    tenant::TenantContext,
};

#[tokio::test]
async fn counting_snapshots_expected_quantity_without_touching_the_ledger() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(40)).await;

    let counts = InventoryCountService::new(db.clone());
    let count = counts
        .start_count(&ctx, StartCountRequest::default())
        .await
        .expect("start failed");
    assert_eq!(count.status(), Some(CountStatus::InProgress));
    assert!(count.count_number.starts_with("CNT-"));

    let detail = counts
        .add_count_detail(
            &ctx,
            count.count_id,
            AddCountDetailRequest {
                item_id: item.item_id,
                counted_quantity: dec!(37),
                notes: None,
            },
        )
        .await
        .expect("add detail failed");
    assert_eq!(detail.expected_quantity, dec!(40));
    assert_eq!(detail.variance, dec!(-3));

    // The ledger does not move until completion.
    let items = InventoryItemService::new(db.clone());
    let after = items.get_item(&ctx, item.item_id).await.unwrap();
    assert_eq!(after.quantity_on_hand, dec!(40));
    assert!(after.last_counted_date.is_none());
}

#[tokio::test]
async fn completing_reconciles_variances_into_adjustments() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let short_item = common::seed_item(&db, &ctx, 100, dec!(40)).await;
    let over_item = common::seed_item(&db, &ctx, 101, dec!(10)).await;
    let exact_item = common::seed_item(&db, &ctx, 102, dec!(7)).await;

    let counts = InventoryCountService::new(db.clone());
    let count = counts
        .start_count(&ctx, StartCountRequest::default())
        .await
        .unwrap();
    for (item_id, counted) in [
        (short_item.item_id, dec!(37)),
        (over_item.item_id, dec!(12)),
        (exact_item.item_id, dec!(7)),
    ] {
        counts
            .add_count_detail(
                &ctx,
                count.count_id,
                AddCountDetailRequest {
                    item_id,
                    counted_quantity: counted,
                    notes: None,
                },
            )
            .await
            .unwrap();
    }

    let completed = counts
        .complete_count(&ctx, count.count_id)
        .await
        .expect("complete failed");
    assert_eq!(completed.status(), Some(CountStatus::Completed));
    assert!(completed.end_date.is_some());

    let items = InventoryItemService::new(db.clone());
    let short_after = items.get_item(&ctx, short_item.item_id).await.unwrap();
    assert_eq!(short_after.quantity_on_hand, dec!(37));
    assert!(short_after.last_counted_date.is_some());

    let over_after = items.get_item(&ctx, over_item.item_id).await.unwrap();
    assert_eq!(over_after.quantity_on_hand, dec!(12));

    // Zero variance still stamps the count date but creates no adjustment.
    let exact_after = items.get_item(&ctx, exact_item.item_id).await.unwrap();
    assert_eq!(exact_after.quantity_on_hand, dec!(7));
    assert!(exact_after.last_counted_date.is_some());

    let adjustments = InventoryAdjustmentService::new(db.clone());
    let (headers, total) = adjustments.list_adjustments(&ctx, 0, 10).await.unwrap();
    assert_eq!(total, 2);
    for header in &headers {
        assert_eq!(header.reason_code.as_deref(), Some(COUNT_VARIANCE_REASON));
        assert_eq!(header.reference_id, Some(count.count_id));
    }
}

#[tokio::test]
async fn completed_counts_reject_further_mutation() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(5)).await;

    let counts = InventoryCountService::new(db.clone());
    let count = counts
        .start_count(&ctx, StartCountRequest::default())
        .await
        .unwrap();
    counts
        .add_count_detail(
            &ctx,
            count.count_id,
            AddCountDetailRequest {
                item_id: item.item_id,
                counted_quantity: dec!(5),
                notes: None,
            },
        )
        .await
        .unwrap();
    counts.complete_count(&ctx, count.count_id).await.unwrap();

    let err = counts
        .complete_count(&ctx, count.count_id)
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::InvalidStateTransition { .. });

    let err = counts
        .add_count_detail(
            &ctx,
            count.count_id,
            AddCountDetailRequest {
                item_id: item.item_id,
                counted_quantity: dec!(6),
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::InvalidStateTransition { .. });

    let err = counts.cancel_count(&ctx, count.count_id).await.unwrap_err();
    assert_matches!(err, ServiceError::InvalidStateTransition { .. });
}

#[tokio::test]
async fn cancelled_count_leaves_the_ledger_alone() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(40)).await;

    let counts = InventoryCountService::new(db.clone());
    let count = counts
        .start_count(&ctx, StartCountRequest::default())
        .await
        .unwrap();
    counts
        .add_count_detail(
            &ctx,
            count.count_id,
            AddCountDetailRequest {
                item_id: item.item_id,
                counted_quantity: dec!(0),
                notes: None,
            },
        )
        .await
        .unwrap();

    let cancelled = counts.cancel_count(&ctx, count.count_id).await.unwrap();
    assert_eq!(cancelled.status(), Some(CountStatus::Cancelled));

    let items = InventoryItemService::new(db.clone());
    let after = items.get_item(&ctx, item.item_id).await.unwrap();
    assert_eq!(after.quantity_on_hand, dec!(40));

    let adjustments = InventoryAdjustmentService::new(db.clone());
    let (_, total) = adjustments.list_adjustments(&ctx, 0, 10).await.unwrap();
    assert_eq!(total, 0);
}

#[tokio::test]
async fn negative_counted_quantity_is_rejected() {
    let db = common::setup_db().await;
    let ctx = TenantContext::for_tenant(1);
    let item = common::seed_item(&db, &ctx, 100, dec!(5)).await;

    let counts = InventoryCountService::new(db.clone());
    let count = counts
        .start_count(&ctx, StartCountRequest::default())
        .await
        .unwrap();

    let err = counts
        .add_count_detail(
            &ctx,
            count.count_id,
            AddCountDetailRequest {
                item_id: item.item_id,
                counted_quantity: dec!(-1),
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::Validation { .. });
}

use crate::{
    db::DbPool,
    entities::{
        inventory_adjustment::{self, AdjustmentStatus, AdjustmentType, Entity as InventoryAdjustment},
        inventory_adjustment_detail::{self, Entity as InventoryAdjustmentDetail},
    },
    errors::{ServiceError, StockAction},
    services::items::{apply_quantity_delta, load_item},
    store::{find_scoped_by_id, insert_scoped, scoped_select},
    tenant::TenantContext,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, ConnectionTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionError,
    TransactionTrait,
};
use std::sync::Arc;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

/// A stock correction to apply to one item.
#[derive(Debug, Clone, Deserialize)]
pub struct AdjustStockRequest {
    pub item_id: i32,
    pub adjustment_type: AdjustmentType,
    pub quantity: Decimal,
    pub reason_code: Option<String>,
    pub reference_number: Option<String>,
    pub reference_type: Option<String>,
    pub reference_id: Option<i32>,
    pub notes: Option<String>,
}

/// Applies a stock correction inside an already-open transaction: mutates the
/// item's on-hand quantity and writes the adjustment header and detail rows.
///
/// A decrease is refused when it would take on-hand below zero; the check is
/// against on-hand, not available, so a correction can cut into reserved
/// stock when the shelf really is short.
pub(crate) async fn adjust_stock_within<C: ConnectionTrait>(
    txn: &C,
    ctx: &TenantContext,
    request: AdjustStockRequest,
) -> Result<inventory_adjustment::Model, ServiceError> {
    if request.quantity <= Decimal::ZERO {
        return Err(ServiceError::validation("quantity", "must be positive"));
    }

    let item = load_item(txn, ctx, request.item_id).await?;

    let on_hand_delta = match request.adjustment_type {
        AdjustmentType::Increase => request.quantity,
        AdjustmentType::Decrease => {
            if item.quantity_on_hand < request.quantity {
                return Err(ServiceError::InsufficientStock {
                    item_id: item.item_id,
                    action: StockAction::Decrease,
                    available: item.quantity_on_hand,
                    requested: request.quantity,
                });
            }
            -request.quantity
        }
    };

    let updated =
        apply_quantity_delta(txn, &item, on_hand_delta, Decimal::ZERO, StockAction::Decrease)
            .await?;

    let now = Utc::now();
    let header = inventory_adjustment::ActiveModel {
        adjustment_number: Set(format!("ADJ-{}", Uuid::new_v4().simple())),
        adjustment_date: Set(now),
        status: Set(AdjustmentStatus::Approved.as_str().to_string()),
        adjustment_type: Set(request.adjustment_type.as_str().to_string()),
        reason_code: Set(request.reason_code),
        reference_number: Set(request.reference_number),
        reference_type: Set(request.reference_type),
        reference_id: Set(request.reference_id),
        notes: Set(request.notes),
        is_approved: Set(true),
        approved_at: Set(Some(now)),
        created_by: Set(0),
        updated_by: Set(0),
        is_deleted: Set(false),
        ..Default::default()
    };
    let header = insert_scoped(txn, ctx, header).await?;

    let detail = inventory_adjustment_detail::ActiveModel {
        adjustment_id: Set(header.adjustment_id),
        item_id: Set(item.item_id),
        location_id: Set(Some(item.location_id)),
        lot_number: Set(item.lot_number.clone()),
        serial_number: Set(item.serial_number.clone()),
        quantity_before: Set(item.quantity_on_hand),
        quantity_after: Set(updated.quantity_on_hand),
        quantity_adjusted: Set(on_hand_delta),
        unit_of_measure: Set(item.unit_of_measure.clone()),
        unit_cost: Set(item.unit_cost),
        total_cost: Set(item.unit_cost.map(|c| c * on_hand_delta)),
        created_by: Set(0),
        updated_by: Set(0),
        is_deleted: Set(false),
        ..Default::default()
    };
    insert_scoped(txn, ctx, detail).await?;

    Ok(header)
}

pub struct InventoryAdjustmentService {
    db_pool: Arc<DbPool>,
}

impl InventoryAdjustmentService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Corrects an item's on-hand stock. The quantity change, the adjustment
    /// header, and its detail line commit or roll back together.
    #[instrument(skip(self, request))]
    pub async fn adjust_stock(
        &self,
        ctx: &TenantContext,
        request: AdjustStockRequest,
    ) -> Result<inventory_adjustment::Model, ServiceError> {
        let ctx = *ctx;
        let adjustment = self
            .db_pool
            .transaction::<_, inventory_adjustment::Model, ServiceError>(move |txn| {
                Box::pin(async move { adjust_stock_within(txn, &ctx, request).await })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(db_err) => ServiceError::Database(db_err),
                TransactionError::Transaction(service_err) => service_err,
            })?;

        info!(
            adjustment_id = adjustment.adjustment_id,
            adjustment_number = %adjustment.adjustment_number,
            "Applied stock adjustment"
        );
        Ok(adjustment)
    }

    #[instrument(skip(self))]
    pub async fn get_adjustment(
        &self,
        ctx: &TenantContext,
        adjustment_id: i32,
    ) -> Result<inventory_adjustment::Model, ServiceError> {
        find_scoped_by_id::<InventoryAdjustment, _>(self.db_pool.as_ref(), ctx, adjustment_id)
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_adjustments(
        &self,
        ctx: &TenantContext,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<inventory_adjustment::Model>, u64), ServiceError> {
        let paginator = scoped_select::<InventoryAdjustment>(ctx)
            .order_by_desc(inventory_adjustment::Column::AdjustmentDate)
            .paginate(self.db_pool.as_ref(), per_page);
        let total = paginator.num_items().await?;
        let adjustments = paginator.fetch_page(page).await?;
        Ok((adjustments, total))
    }

    #[instrument(skip(self))]
    pub async fn details_for(
        &self,
        ctx: &TenantContext,
        adjustment_id: i32,
    ) -> Result<Vec<inventory_adjustment_detail::Model>, ServiceError> {
        // Confirm the header is visible under this scope first.
        find_scoped_by_id::<InventoryAdjustment, _>(self.db_pool.as_ref(), ctx, adjustment_id)
            .await?;
        Ok(scoped_select::<InventoryAdjustmentDetail>(ctx)
            .filter(inventory_adjustment_detail::Column::AdjustmentId.eq(adjustment_id))
            .order_by_asc(inventory_adjustment_detail::Column::DetailId)
            .all(self.db_pool.as_ref())
            .await?)
    }
}

use crate::{
    db::DbPool,
    entities::{
        inventory_transaction::{
            self, Entity as InventoryTransaction, TransactionStatus, TransactionType,
        },
        inventory_transaction_detail::{self, Entity as InventoryTransactionDetail},
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
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// A single-item stock movement to journal.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordMovementRequest {
    pub item_id: i32,
    pub quantity: Decimal,
    pub reference_number: Option<String>,
    pub reference_type: Option<String>,
    pub reference_id: Option<i32>,
    pub from_location_id: Option<i32>,
    pub to_location_id: Option<i32>,
    pub notes: Option<String>,
}

async fn record_movement_within<C: ConnectionTrait>(
    txn: &C,
    ctx: &TenantContext,
    transaction_type: TransactionType,
    request: RecordMovementRequest,
) -> Result<inventory_transaction::Model, ServiceError> {
    if request.quantity <= Decimal::ZERO {
        return Err(ServiceError::validation("quantity", "must be positive"));
    }

    let item = load_item(txn, ctx, request.item_id).await?;

    // Receipt adds stock; issue removes it; transfer is a journal entry that
    // leaves quantities untouched but still requires the stock to exist.
    let on_hand_delta = match transaction_type {
        TransactionType::Receipt => request.quantity,
        TransactionType::Issue => {
            if item.quantity_on_hand < request.quantity {
                return Err(ServiceError::InsufficientStock {
                    item_id: item.item_id,
                    action: StockAction::Issue,
                    available: item.quantity_on_hand,
                    requested: request.quantity,
                });
            }
            -request.quantity
        }
        TransactionType::Transfer => {
            if item.quantity_on_hand < request.quantity {
                return Err(ServiceError::InsufficientStock {
                    item_id: item.item_id,
                    action: StockAction::Transfer,
                    available: item.quantity_on_hand,
                    requested: request.quantity,
                });
            }
            Decimal::ZERO
        }
    };

    if on_hand_delta != Decimal::ZERO {
        let action = match transaction_type {
            TransactionType::Receipt | TransactionType::Issue => StockAction::Issue,
            TransactionType::Transfer => StockAction::Transfer,
        };
        apply_quantity_delta(txn, &item, on_hand_delta, Decimal::ZERO, action).await?;
    }

    let header = inventory_transaction::ActiveModel {
        transaction_type: Set(transaction_type.as_str().to_string()),
        transaction_date: Set(Utc::now()),
        status: Set(TransactionStatus::Completed.as_str().to_string()),
        reference_number: Set(request.reference_number),
        reference_type: Set(request.reference_type),
        reference_id: Set(request.reference_id),
        source_type: Set(request.from_location_id.map(|_| "LOCATION".to_string())),
        source_id: Set(request.from_location_id),
        destination_type: Set(request.to_location_id.map(|_| "LOCATION".to_string())),
        destination_id: Set(request.to_location_id),
        notes: Set(request.notes),
        created_by: Set(0),
        updated_by: Set(0),
        is_deleted: Set(false),
        ..Default::default()
    };
    let header = insert_scoped(txn, ctx, header).await?;

    let detail = inventory_transaction_detail::ActiveModel {
        transaction_id: Set(header.transaction_id),
        item_id: Set(item.item_id),
        quantity: Set(request.quantity),
        unit_of_measure: Set(item.unit_of_measure.clone()),
        unit_cost: Set(item.unit_cost),
        total_cost: Set(item.unit_cost.map(|c| c * request.quantity)),
        lot_number: Set(item.lot_number.clone()),
        serial_number: Set(item.serial_number.clone()),
        from_location_id: Set(request.from_location_id),
        to_location_id: Set(request.to_location_id),
        created_by: Set(0),
        updated_by: Set(0),
        is_deleted: Set(false),
        ..Default::default()
    };
    insert_scoped(txn, ctx, detail).await?;

    Ok(header)
}

pub struct InventoryTransactionService {
    db_pool: Arc<DbPool>,
}

impl InventoryTransactionService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    async fn record(
        &self,
        ctx: &TenantContext,
        transaction_type: TransactionType,
        request: RecordMovementRequest,
    ) -> Result<inventory_transaction::Model, ServiceError> {
        let ctx = *ctx;
        let header = self
            .db_pool
            .transaction::<_, inventory_transaction::Model, ServiceError>(move |txn| {
                Box::pin(async move {
                    record_movement_within(txn, &ctx, transaction_type, request).await
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(db_err) => ServiceError::Database(db_err),
                TransactionError::Transaction(service_err) => service_err,
            })?;

        info!(
            transaction_id = header.transaction_id,
            transaction_type = %header.transaction_type,
            "Recorded inventory transaction"
        );
        Ok(header)
    }

    /// Adds received stock to the item and journals the receipt.
    #[instrument(skip(self, request))]
    pub async fn record_receipt(
        &self,
        ctx: &TenantContext,
        request: RecordMovementRequest,
    ) -> Result<inventory_transaction::Model, ServiceError> {
        self.record(ctx, TransactionType::Receipt, request).await
    }

    /// Removes issued stock from the item and journals the issue.
    #[instrument(skip(self, request))]
    pub async fn record_issue(
        &self,
        ctx: &TenantContext,
        request: RecordMovementRequest,
    ) -> Result<inventory_transaction::Model, ServiceError> {
        self.record(ctx, TransactionType::Issue, request).await
    }

    /// Journals a transfer between locations. Total quantities are unchanged;
    /// the detail row carries the from/to locations.
    #[instrument(skip(self, request))]
    pub async fn record_transfer(
        &self,
        ctx: &TenantContext,
        request: RecordMovementRequest,
    ) -> Result<inventory_transaction::Model, ServiceError> {
        if request.from_location_id.is_none() || request.to_location_id.is_none() {
            return Err(ServiceError::validation(
                "from_location_id/to_location_id",
                "transfer requires both locations",
            ));
        }
        self.record(ctx, TransactionType::Transfer, request).await
    }

    #[instrument(skip(self))]
    pub async fn get_transaction(
        &self,
        ctx: &TenantContext,
        transaction_id: i32,
    ) -> Result<inventory_transaction::Model, ServiceError> {
        find_scoped_by_id::<InventoryTransaction, _>(self.db_pool.as_ref(), ctx, transaction_id)
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_transactions(
        &self,
        ctx: &TenantContext,
        transaction_type: Option<TransactionType>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<inventory_transaction::Model>, u64), ServiceError> {
        let mut query = scoped_select::<InventoryTransaction>(ctx);
        if let Some(t) = transaction_type {
            query = query.filter(inventory_transaction::Column::TransactionType.eq(t.as_str()));
        }
        let paginator = query
            .order_by_desc(inventory_transaction::Column::TransactionDate)
            .paginate(self.db_pool.as_ref(), per_page);
        let total = paginator.num_items().await?;
        let transactions = paginator.fetch_page(page).await?;
        Ok((transactions, total))
    }

    #[instrument(skip(self))]
    pub async fn details_for(
        &self,
        ctx: &TenantContext,
        transaction_id: i32,
    ) -> Result<Vec<inventory_transaction_detail::Model>, ServiceError> {
        find_scoped_by_id::<InventoryTransaction, _>(self.db_pool.as_ref(), ctx, transaction_id)
            .await?;
        Ok(scoped_select::<InventoryTransactionDetail>(ctx)
            .filter(inventory_transaction_detail::Column::TransactionId.eq(transaction_id))
            .order_by_asc(inventory_transaction_detail::Column::DetailId)
            .all(self.db_pool.as_ref())
            .await?)
    }
}

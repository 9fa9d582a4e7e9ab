use crate::{
    db::DbPool,
    entities::{
        inventory_adjustment::AdjustmentType,
        inventory_count::{self, CountStatus, Entity as InventoryCount},
        inventory_count_detail::{self, Entity as InventoryCountDetail},
        inventory_item,
    },
    errors::ServiceError,
    services::adjustments::{adjust_stock_within, AdjustStockRequest},
    services::items::load_item,
    store::{find_scoped_by_id, insert_scoped, scoped_select},
    tenant::TenantContext,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionError, TransactionTrait,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Reason code written on every adjustment produced by completing a count.
pub const COUNT_VARIANCE_REASON: &str = "Cycle Count Variance";

/// Scope of a new count session. All filters are optional; an empty request
/// is a free-form count.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartCountRequest {
    pub count_type: Option<String>,
    pub facility_id: Option<i32>,
    pub zone_id: Option<i32>,
    pub location_id: Option<i32>,
    pub product_id: Option<i32>,
    pub category_id: Option<i32>,
    pub notes: Option<String>,
}

/// One physical count observation.
#[derive(Debug, Clone, Deserialize)]
pub struct AddCountDetailRequest {
    pub item_id: i32,
    pub counted_quantity: Decimal,
    pub notes: Option<String>,
}

fn guard_in_progress(
    count: &inventory_count::Model,
    target: CountStatus,
) -> Result<(), ServiceError> {
    if count.status() != Some(CountStatus::InProgress) {
        return Err(ServiceError::InvalidStateTransition {
            entity: "InventoryCount",
            id: count.count_id,
            from: count.status.clone(),
            to: target.as_str().to_string(),
        });
    }
    Ok(())
}

pub struct InventoryCountService {
    db_pool: Arc<DbPool>,
}

impl InventoryCountService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Opens a count session. Nothing in the ledger moves until completion.
    #[instrument(skip(self, request))]
    pub async fn start_count(
        &self,
        ctx: &TenantContext,
        request: StartCountRequest,
    ) -> Result<inventory_count::Model, ServiceError> {
        let model = inventory_count::ActiveModel {
            count_number: Set(format!("CNT-{}", Uuid::new_v4().simple())),
            count_type: Set(request.count_type),
            status: Set(CountStatus::InProgress.as_str().to_string()),
            start_date: Set(Some(Utc::now())),
            facility_id: Set(request.facility_id),
            zone_id: Set(request.zone_id),
            location_id: Set(request.location_id),
            product_id: Set(request.product_id),
            category_id: Set(request.category_id),
            notes: Set(request.notes),
            is_approved: Set(false),
            created_by: Set(0),
            updated_by: Set(0),
            is_deleted: Set(false),
            ..Default::default()
        };

        let count = insert_scoped(self.db_pool.as_ref(), ctx, model).await?;
        info!(count_id = count.count_id, count_number = %count.count_number, "Started inventory count");
        Ok(count)
    }

    /// Records a counted quantity against an open session. The expected
    /// quantity is a snapshot of the item's on-hand at recording time and the
    /// variance is counted minus expected; the ledger itself is untouched.
    #[instrument(skip(self, request))]
    pub async fn add_count_detail(
        &self,
        ctx: &TenantContext,
        count_id: i32,
        request: AddCountDetailRequest,
    ) -> Result<inventory_count_detail::Model, ServiceError> {
        if request.counted_quantity < Decimal::ZERO {
            return Err(ServiceError::validation(
                "counted_quantity",
                "must not be negative",
            ));
        }

        let db = self.db_pool.as_ref();
        let count = find_scoped_by_id::<InventoryCount, _>(db, ctx, count_id).await?;
        guard_in_progress(&count, CountStatus::InProgress)?;

        let item = load_item(db, ctx, request.item_id).await?;
        let expected = item.quantity_on_hand;
        let variance = request.counted_quantity - expected;

        let detail = inventory_count_detail::ActiveModel {
            count_id: Set(count_id),
            item_id: Set(item.item_id),
            expected_quantity: Set(expected),
            counted_quantity: Set(request.counted_quantity),
            variance: Set(variance),
            unit_of_measure: Set(item.unit_of_measure.clone()),
            notes: Set(request.notes),
            is_recounted: Set(false),
            created_by: Set(0),
            updated_by: Set(0),
            is_deleted: Set(false),
            ..Default::default()
        };
        let detail = insert_scoped(db, ctx, detail).await?;

        info!(
            count_id,
            item_id = item.item_id,
            %variance,
            "Recorded count detail"
        );
        Ok(detail)
    }

    /// Closes the session and reconciles the ledger: one adjustment per
    /// non-zero variance, each counted item stamped with the count time.
    /// Completing a count twice is refused.
    #[instrument(skip(self))]
    pub async fn complete_count(
        &self,
        ctx: &TenantContext,
        count_id: i32,
    ) -> Result<inventory_count::Model, ServiceError> {
        let ctx = *ctx;
        let count = self
            .db_pool
            .transaction::<_, inventory_count::Model, ServiceError>(move |txn| {
                Box::pin(async move {
                    let count = find_scoped_by_id::<InventoryCount, _>(txn, &ctx, count_id).await?;
                    guard_in_progress(&count, CountStatus::Completed)?;

                    let details = scoped_select::<InventoryCountDetail>(&ctx)
                        .filter(inventory_count_detail::Column::CountId.eq(count_id))
                        .order_by_asc(inventory_count_detail::Column::DetailId)
                        .all(txn)
                        .await?;

                    let now = Utc::now();
                    for detail in &details {
                        if detail.variance != Decimal::ZERO {
                            let adjustment_type = if detail.variance > Decimal::ZERO {
                                AdjustmentType::Increase
                            } else {
                                AdjustmentType::Decrease
                            };
                            adjust_stock_within(
                                txn,
                                &ctx,
                                AdjustStockRequest {
                                    item_id: detail.item_id,
                                    adjustment_type,
                                    quantity: detail.variance.abs(),
                                    reason_code: Some(COUNT_VARIANCE_REASON.to_string()),
                                    reference_number: Some(count.count_number.clone()),
                                    reference_type: Some("INVENTORY_COUNT".to_string()),
                                    reference_id: Some(count.count_id),
                                    notes: None,
                                },
                            )
                            .await?;
                        }

                        inventory_item::Entity::update_many()
                            .col_expr(
                                inventory_item::Column::LastCountedDate,
                                Expr::value(Some(now)),
                            )
                            .filter(inventory_item::Column::ItemId.eq(detail.item_id))
                            .exec(txn)
                            .await?;
                    }

                    let mut active: inventory_count::ActiveModel = count.into();
                    active.status = Set(CountStatus::Completed.as_str().to_string());
                    active.end_date = Set(Some(now));
                    Ok(active.update(txn).await?)
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(db_err) => ServiceError::Database(db_err),
                TransactionError::Transaction(service_err) => service_err,
            })?;

        info!(count_id, "Completed inventory count");
        Ok(count)
    }

    /// Abandons an open session without touching the ledger.
    #[instrument(skip(self))]
    pub async fn cancel_count(
        &self,
        ctx: &TenantContext,
        count_id: i32,
    ) -> Result<inventory_count::Model, ServiceError> {
        let db = self.db_pool.as_ref();
        let count = find_scoped_by_id::<InventoryCount, _>(db, ctx, count_id).await?;
        guard_in_progress(&count, CountStatus::Cancelled)?;

        let mut active: inventory_count::ActiveModel = count.into();
        active.status = Set(CountStatus::Cancelled.as_str().to_string());
        active.end_date = Set(Some(Utc::now()));
        let count = active.update(db).await?;

        info!(count_id, "Cancelled inventory count");
        Ok(count)
    }

    #[instrument(skip(self))]
    pub async fn get_count(
        &self,
        ctx: &TenantContext,
        count_id: i32,
    ) -> Result<inventory_count::Model, ServiceError> {
        find_scoped_by_id::<InventoryCount, _>(self.db_pool.as_ref(), ctx, count_id).await
    }

    #[instrument(skip(self))]
    pub async fn list_counts(
        &self,
        ctx: &TenantContext,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<inventory_count::Model>, u64), ServiceError> {
        let paginator = scoped_select::<InventoryCount>(ctx)
            .order_by_desc(inventory_count::Column::CreatedAt)
            .paginate(self.db_pool.as_ref(), per_page);
        let total = paginator.num_items().await?;
        let counts = paginator.fetch_page(page).await?;
        Ok((counts, total))
    }

    #[instrument(skip(self))]
    pub async fn details_for(
        &self,
        ctx: &TenantContext,
        count_id: i32,
    ) -> Result<Vec<inventory_count_detail::Model>, ServiceError> {
        find_scoped_by_id::<InventoryCount, _>(self.db_pool.as_ref(), ctx, count_id).await?;
        Ok(scoped_select::<InventoryCountDetail>(ctx)
            .filter(inventory_count_detail::Column::CountId.eq(count_id))
            .order_by_asc(inventory_count_detail::Column::DetailId)
            .all(self.db_pool.as_ref())
            .await?)
    }
}

use crate::{
    db::DbPool,
    entities::inventory_item::{self, Entity as InventoryItem, ItemStatus},
    errors::{ServiceError, StockAction},
    store::{find_scoped_by_id, insert_scoped, scoped_select},
    tenant::TenantContext,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// Loads an item for mutation inside an open transaction.
pub(crate) async fn load_item<C: ConnectionTrait>(
    txn: &C,
    ctx: &TenantContext,
    item_id: i32,
) -> Result<inventory_item::Model, ServiceError> {
    find_scoped_by_id::<InventoryItem, C>(txn, ctx, item_id).await
}

/// Applies a delta to an item's on-hand and allocated quantities.
///
/// Neither quantity may go below zero; a delta that would is refused here
/// even when the caller skipped its own guard. Available is always
/// recomputed as on-hand minus allocated. The write is guarded by an
/// optimistic version check: zero rows affected means another writer
/// committed first and the enclosing transaction must roll back.
pub(crate) async fn apply_quantity_delta<C: ConnectionTrait>(
    txn: &C,
    item: &inventory_item::Model,
    on_hand_delta: Decimal,
    allocated_delta: Decimal,
    action: StockAction,
) -> Result<inventory_item::Model, ServiceError> {
    let new_on_hand = item.quantity_on_hand + on_hand_delta;
    let new_allocated = item.quantity_allocated + allocated_delta;

    if new_on_hand < Decimal::ZERO {
        return Err(ServiceError::InsufficientStock {
            item_id: item.item_id,
            action,
            available: item.quantity_on_hand,
            requested: -on_hand_delta,
        });
    }
    if new_allocated < Decimal::ZERO {
        return Err(ServiceError::InsufficientStock {
            item_id: item.item_id,
            action,
            available: item.quantity_allocated,
            requested: -allocated_delta,
        });
    }

    let new_available = new_on_hand - new_allocated;
    let now = Utc::now();

    let result = InventoryItem::update_many()
        .col_expr(
            inventory_item::Column::QuantityOnHand,
            Expr::value(new_on_hand),
        )
        .col_expr(
            inventory_item::Column::QuantityAllocated,
            Expr::value(new_allocated),
        )
        .col_expr(
            inventory_item::Column::QuantityAvailable,
            Expr::value(new_available),
        )
        .col_expr(inventory_item::Column::Version, Expr::value(item.version + 1))
        .col_expr(inventory_item::Column::UpdatedAt, Expr::value(now))
        .filter(inventory_item::Column::ItemId.eq(item.item_id))
        .filter(inventory_item::Column::Version.eq(item.version))
        .exec(txn)
        .await?;

    if result.rows_affected == 0 {
        return Err(ServiceError::Conflict {
            entity: "InventoryItem",
            id: item.item_id,
        });
    }

    Ok(inventory_item::Model {
        quantity_on_hand: new_on_hand,
        quantity_allocated: new_allocated,
        quantity_available: new_available,
        version: item.version + 1,
        updated_at: now,
        ..item.clone()
    })
}

/// Fields accepted when creating an item record.
#[derive(Debug, Clone, Deserialize)]
pub struct NewInventoryItem {
    pub product_id: i32,
    pub variant_id: Option<i32>,
    pub lot_number: Option<String>,
    pub serial_number: Option<String>,
    pub condition: Option<String>,
    #[serde(default)]
    pub quantity_on_hand: Decimal,
    pub unit_of_measure: Option<String>,
    pub location_id: i32,
    pub facility_id: Option<i32>,
    pub expiry_date: Option<chrono::DateTime<Utc>>,
    pub manufacture_date: Option<chrono::DateTime<Utc>>,
    pub unit_cost: Option<Decimal>,
    pub notes: Option<String>,
}

/// Fields accepted when updating an item record. Quantities are absent on
/// purpose: they change only through the movement protocols.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInventoryItem {
    pub status: Option<ItemStatus>,
    pub condition: Option<String>,
    pub unit_of_measure: Option<String>,
    pub location_id: Option<i32>,
    pub facility_id: Option<i32>,
    pub expiry_date: Option<chrono::DateTime<Utc>>,
    pub unit_cost: Option<Decimal>,
    pub notes: Option<String>,
}

pub struct InventoryItemService {
    db_pool: Arc<DbPool>,
}

impl InventoryItemService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn get_item(
        &self,
        ctx: &TenantContext,
        item_id: i32,
    ) -> Result<inventory_item::Model, ServiceError> {
        find_scoped_by_id::<InventoryItem, _>(self.db_pool.as_ref(), ctx, item_id).await
    }

    #[instrument(skip(self))]
    pub async fn list_items(
        &self,
        ctx: &TenantContext,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<inventory_item::Model>, u64), ServiceError> {
        let paginator = scoped_select::<InventoryItem>(ctx)
            .order_by_asc(inventory_item::Column::ItemId)
            .paginate(self.db_pool.as_ref(), per_page);
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page).await?;
        Ok((items, total))
    }

    #[instrument(skip(self, new_item))]
    pub async fn create_item(
        &self,
        ctx: &TenantContext,
        new_item: NewInventoryItem,
    ) -> Result<inventory_item::Model, ServiceError> {
        if new_item.quantity_on_hand < Decimal::ZERO {
            return Err(ServiceError::validation(
                "quantity_on_hand",
                "must not be negative",
            ));
        }

        let on_hand = new_item.quantity_on_hand;
        let model = inventory_item::ActiveModel {
            product_id: Set(new_item.product_id),
            variant_id: Set(new_item.variant_id),
            lot_number: Set(new_item.lot_number),
            serial_number: Set(new_item.serial_number),
            status: Set(ItemStatus::Available.as_str().to_string()),
            condition: Set(new_item.condition),
            quantity_on_hand: Set(on_hand),
            quantity_allocated: Set(Decimal::ZERO),
            quantity_available: Set(on_hand),
            unit_of_measure: Set(new_item.unit_of_measure),
            location_id: Set(new_item.location_id),
            facility_id: Set(new_item.facility_id),
            expiry_date: Set(new_item.expiry_date),
            manufacture_date: Set(new_item.manufacture_date),
            received_date: Set(Some(Utc::now())),
            unit_cost: Set(new_item.unit_cost),
            total_cost: Set(new_item.unit_cost.map(|c| c * on_hand)),
            notes: Set(new_item.notes),
            is_active: Set(true),
            version: Set(1),
            created_by: Set(0),
            updated_by: Set(0),
            is_deleted: Set(false),
            ..Default::default()
        };

        let created = insert_scoped(self.db_pool.as_ref(), ctx, model).await?;
        info!(item_id = created.item_id, "Created inventory item");
        Ok(created)
    }

    #[instrument(skip(self, update))]
    pub async fn update_item(
        &self,
        ctx: &TenantContext,
        item_id: i32,
        update: UpdateInventoryItem,
    ) -> Result<inventory_item::Model, ServiceError> {
        let db = self.db_pool.as_ref();
        let existing = find_scoped_by_id::<InventoryItem, _>(db, ctx, item_id).await?;

        let mut active: inventory_item::ActiveModel = existing.into();
        if let Some(status) = update.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(condition) = update.condition {
            active.condition = Set(Some(condition));
        }
        if let Some(uom) = update.unit_of_measure {
            active.unit_of_measure = Set(Some(uom));
        }
        if let Some(location_id) = update.location_id {
            active.location_id = Set(location_id);
        }
        if let Some(facility_id) = update.facility_id {
            active.facility_id = Set(Some(facility_id));
        }
        if let Some(expiry_date) = update.expiry_date {
            active.expiry_date = Set(Some(expiry_date));
        }
        if let Some(unit_cost) = update.unit_cost {
            active.unit_cost = Set(Some(unit_cost));
        }
        if let Some(notes) = update.notes {
            active.notes = Set(Some(notes));
        }

        Ok(active.update(db).await?)
    }

    /// Soft-deletes an item. The row stays for the audit trail but vanishes
    /// from every scoped query.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, ctx: &TenantContext, item_id: i32) -> Result<(), ServiceError> {
        let db = self.db_pool.as_ref();
        let existing = find_scoped_by_id::<InventoryItem, _>(db, ctx, item_id).await?;

        let mut active: inventory_item::ActiveModel = existing.into();
        active.is_deleted = Set(true);
        active.is_active = Set(false);
        active.update(db).await?;

        info!(item_id, "Soft-deleted inventory item");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn find_by_product(
        &self,
        ctx: &TenantContext,
        product_id: i32,
    ) -> Result<Vec<inventory_item::Model>, ServiceError> {
        Ok(scoped_select::<InventoryItem>(ctx)
            .filter(inventory_item::Column::ProductId.eq(product_id))
            .order_by_asc(inventory_item::Column::ItemId)
            .all(self.db_pool.as_ref())
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn find_by_status(
        &self,
        ctx: &TenantContext,
        status: ItemStatus,
    ) -> Result<Vec<inventory_item::Model>, ServiceError> {
        Ok(scoped_select::<InventoryItem>(ctx)
            .filter(inventory_item::Column::Status.eq(status.as_str()))
            .order_by_asc(inventory_item::Column::ItemId)
            .all(self.db_pool.as_ref())
            .await?)
    }

    /// Items holding more on-hand stock than the given threshold.
    #[instrument(skip(self))]
    pub async fn find_with_stock_above(
        &self,
        ctx: &TenantContext,
        threshold: Decimal,
    ) -> Result<Vec<inventory_item::Model>, ServiceError> {
        Ok(scoped_select::<InventoryItem>(ctx)
            .filter(inventory_item::Column::QuantityOnHand.gt(threshold))
            .order_by_asc(inventory_item::Column::ItemId)
            .all(self.db_pool.as_ref())
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{establish_connection_with_config, run_migrations, DbConfig};
    use assert_matches::assert_matches;
    use rust_decimal_macros::dec;

    async fn item_with_stock(on_hand: Decimal) -> (Arc<DbPool>, inventory_item::Model) {
        let config = DbConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };
        let pool = establish_connection_with_config(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let db = Arc::new(pool);

        let service = InventoryItemService::new(db.clone());
        let item = service
            .create_item(
                &TenantContext::for_tenant(1),
                NewInventoryItem {
                    product_id: 1,
                    variant_id: None,
                    lot_number: None,
                    serial_number: None,
                    condition: None,
                    quantity_on_hand: on_hand,
                    unit_of_measure: None,
                    location_id: 1,
                    facility_id: None,
                    expiry_date: None,
                    manufacture_date: None,
                    unit_cost: None,
                    notes: None,
                },
            )
            .await
            .unwrap();
        (db, item)
    }

    #[tokio::test]
    async fn delta_primitive_refuses_negative_on_hand() {
        let (db, item) = item_with_stock(dec!(5)).await;

        // No caller-side guard: the primitive itself must hold the floor.
        let err = apply_quantity_delta(
            db.as_ref(),
            &item,
            dec!(-6),
            Decimal::ZERO,
            StockAction::Issue,
        )
        .await
        .unwrap_err();
        assert_matches!(
            err,
            ServiceError::InsufficientStock {
                action: StockAction::Issue,
                available,
                requested,
                ..
            } if available == dec!(5) && requested == dec!(6)
        );

        let ctx = TenantContext::for_tenant(1);
        let service = InventoryItemService::new(db.clone());
        let after = service.get_item(&ctx, item.item_id).await.unwrap();
        assert_eq!(after.quantity_on_hand, dec!(5));
        assert_eq!(after.version, item.version);
    }

    #[tokio::test]
    async fn update_item_persists_mutable_fields() {
        let (db, item) = item_with_stock(dec!(5)).await;
        let ctx = TenantContext::for_tenant(1);
        let service = InventoryItemService::new(db);

        let updated = service
            .update_item(
                &ctx,
                item.item_id,
                UpdateInventoryItem {
                    condition: Some("DAMAGED".to_string()),
                    location_id: Some(9),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.condition.as_deref(), Some("DAMAGED"));
        assert_eq!(updated.location_id, 9);
        assert_eq!(updated.quantity_on_hand, dec!(5));
    }

    #[tokio::test]
    async fn delta_primitive_refuses_negative_allocated() {
        let (db, item) = item_with_stock(dec!(5)).await;

        let err = apply_quantity_delta(
            db.as_ref(),
            &item,
            Decimal::ZERO,
            dec!(-1),
            StockAction::Release,
        )
        .await
        .unwrap_err();
        assert_matches!(
            err,
            ServiceError::InsufficientStock {
                action: StockAction::Release,
                ..
            }
        );
    }
}

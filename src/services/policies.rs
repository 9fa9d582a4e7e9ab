use crate::{
    db::DbPool,
    entities::{
        inventory_item::{self, Entity as InventoryItem},
        inventory_policy::{self, Entity as InventoryPolicy, ValuationMethod},
    },
    errors::ServiceError,
    store::{find_scoped_by_id, insert_scoped, scoped_select},
    tenant::TenantContext,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, Clone, Deserialize)]
pub struct NewInventoryPolicy {
    pub product_id: i32,
    pub variant_id: Option<i32>,
    pub min_stock_level: Option<Decimal>,
    pub max_stock_level: Option<Decimal>,
    pub reorder_point: Option<Decimal>,
    pub reorder_quantity: Option<Decimal>,
    pub valuation_method: Option<ValuationMethod>,
    pub abc_class: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInventoryPolicy {
    pub min_stock_level: Option<Decimal>,
    pub max_stock_level: Option<Decimal>,
    pub reorder_point: Option<Decimal>,
    pub reorder_quantity: Option<Decimal>,
    pub valuation_method: Option<ValuationMethod>,
    pub abc_class: Option<String>,
    pub is_active: Option<bool>,
}

/// Outcome of a reorder check for one product.
#[derive(Debug, Clone, Serialize)]
pub struct ReorderCheck {
    pub product_id: i32,
    pub on_hand_total: Decimal,
    pub reorder_point: Option<Decimal>,
    pub reorder_quantity: Option<Decimal>,
    pub reorder_needed: bool,
}

pub struct InventoryPolicyService {
    db_pool: Arc<DbPool>,
}

impl InventoryPolicyService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self, new_policy))]
    pub async fn create_policy(
        &self,
        ctx: &TenantContext,
        new_policy: NewInventoryPolicy,
    ) -> Result<inventory_policy::Model, ServiceError> {
        if let (Some(min), Some(max)) = (new_policy.min_stock_level, new_policy.max_stock_level) {
            if min > max {
                return Err(ServiceError::validation(
                    "min_stock_level",
                    "must not exceed max_stock_level",
                ));
            }
        }

        let model = inventory_policy::ActiveModel {
            product_id: Set(new_policy.product_id),
            variant_id: Set(new_policy.variant_id),
            min_stock_level: Set(new_policy.min_stock_level),
            max_stock_level: Set(new_policy.max_stock_level),
            reorder_point: Set(new_policy.reorder_point),
            reorder_quantity: Set(new_policy.reorder_quantity),
            valuation_method: Set(new_policy
                .valuation_method
                .map(|m| m.as_str().to_string())),
            abc_class: Set(new_policy.abc_class),
            is_active: Set(true),
            created_by: Set(0),
            updated_by: Set(0),
            is_deleted: Set(false),
            ..Default::default()
        };

        insert_scoped(self.db_pool.as_ref(), ctx, model).await
    }

    #[instrument(skip(self, update))]
    pub async fn update_policy(
        &self,
        ctx: &TenantContext,
        policy_id: i32,
        update: UpdateInventoryPolicy,
    ) -> Result<inventory_policy::Model, ServiceError> {
        let db = self.db_pool.as_ref();
        let existing = find_scoped_by_id::<InventoryPolicy, _>(db, ctx, policy_id).await?;

        let mut active: inventory_policy::ActiveModel = existing.into();
        if let Some(min) = update.min_stock_level {
            active.min_stock_level = Set(Some(min));
        }
        if let Some(max) = update.max_stock_level {
            active.max_stock_level = Set(Some(max));
        }
        if let Some(point) = update.reorder_point {
            active.reorder_point = Set(Some(point));
        }
        if let Some(qty) = update.reorder_quantity {
            active.reorder_quantity = Set(Some(qty));
        }
        if let Some(method) = update.valuation_method {
            active.valuation_method = Set(Some(method.as_str().to_string()));
        }
        if let Some(abc) = update.abc_class {
            active.abc_class = Set(Some(abc));
        }
        if let Some(is_active) = update.is_active {
            active.is_active = Set(is_active);
        }

        Ok(active.update(db).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_policy(
        &self,
        ctx: &TenantContext,
        policy_id: i32,
    ) -> Result<inventory_policy::Model, ServiceError> {
        find_scoped_by_id::<InventoryPolicy, _>(self.db_pool.as_ref(), ctx, policy_id).await
    }

    #[instrument(skip(self))]
    pub async fn list_policies(
        &self,
        ctx: &TenantContext,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<inventory_policy::Model>, u64), ServiceError> {
        let paginator = scoped_select::<InventoryPolicy>(ctx)
            .order_by_asc(inventory_policy::Column::PolicyId)
            .paginate(self.db_pool.as_ref(), per_page);
        let total = paginator.num_items().await?;
        let policies = paginator.fetch_page(page).await?;
        Ok((policies, total))
    }

    #[instrument(skip(self))]
    pub async fn find_by_product(
        &self,
        ctx: &TenantContext,
        product_id: i32,
    ) -> Result<Vec<inventory_policy::Model>, ServiceError> {
        Ok(scoped_select::<InventoryPolicy>(ctx)
            .filter(inventory_policy::Column::ProductId.eq(product_id))
            .filter(inventory_policy::Column::IsActive.eq(true))
            .order_by_asc(inventory_policy::Column::PolicyId)
            .all(self.db_pool.as_ref())
            .await?)
    }

    /// Compares a product's total on-hand stock against its active policy's
    /// reorder point. No policy or no reorder point means no reorder.
    #[instrument(skip(self))]
    pub async fn reorder_needed(
        &self,
        ctx: &TenantContext,
        product_id: i32,
    ) -> Result<ReorderCheck, ServiceError> {
        let db = self.db_pool.as_ref();

        let items = scoped_select::<InventoryItem>(ctx)
            .filter(inventory_item::Column::ProductId.eq(product_id))
            .all(db)
            .await?;
        let on_hand_total: Decimal = items.iter().map(|i| i.quantity_on_hand).sum();

        let policy = scoped_select::<InventoryPolicy>(ctx)
            .filter(inventory_policy::Column::ProductId.eq(product_id))
            .filter(inventory_policy::Column::IsActive.eq(true))
            .one(db)
            .await?;

        let reorder_point = policy.as_ref().and_then(|p| p.reorder_point);
        let reorder_quantity = policy.as_ref().and_then(|p| p.reorder_quantity);
        let reorder_needed = reorder_point
            .map(|point| on_hand_total <= point)
            .unwrap_or(false);

        Ok(ReorderCheck {
            product_id,
            on_hand_total,
            reorder_point,
            reorder_quantity,
            reorder_needed,
        })
    }
}

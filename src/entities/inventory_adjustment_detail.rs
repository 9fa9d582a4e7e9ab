use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::store::{HasTenant, TenantScoped};
use crate::tenant::TenantId;

/// One item line under an adjustment header, recording the on-hand quantity
/// before and after the correction. Append-only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_adjustment_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub detail_id: i32,
    pub tenant_id: i32,
    pub adjustment_id: i32,
    pub item_id: i32,
    pub location_id: Option<i32>,
    pub lot_number: Option<String>,
    pub serial_number: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub quantity_before: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub quantity_after: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub quantity_adjusted: Decimal,
    pub unit_of_measure: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub unit_cost: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub total_cost: Option<Decimal>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: i32,
    pub updated_by: i32,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::inventory_adjustment::Entity",
        from = "Column::AdjustmentId",
        to = "super::inventory_adjustment::Column::AdjustmentId"
    )]
    Adjustment,
}

impl Related<super::inventory_adjustment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Adjustment.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C: ConnectionTrait>(self, _db: &C, insert: bool) -> Result<Self, DbErr> {
        let mut active = self;
        let now = Utc::now();
        if insert {
            if let ActiveValue::NotSet = active.created_at {
                active.created_at = Set(now);
            }
        }
        active.updated_at = Set(now);
        Ok(active)
    }
}

impl TenantScoped for Entity {
    const ENTITY_NAME: &'static str = "InventoryAdjustmentDetail";

    fn tenant_column() -> Column {
        Column::TenantId
    }

    fn deleted_column() -> Column {
        Column::IsDeleted
    }
}

impl HasTenant for ActiveModel {
    fn stamp_tenant(&mut self, tenant: TenantId) {
        if matches!(self.tenant_id, ActiveValue::NotSet) {
            self.tenant_id = Set(tenant.value());
        }
    }
}

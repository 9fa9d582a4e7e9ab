use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::store::{HasTenant, TenantScoped};
use crate::tenant::TenantId;

/// One counted item under a count session. `expected_quantity` is a snapshot
/// of on-hand taken when the line is recorded; `variance` is always
/// `counted_quantity - expected_quantity`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_count_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub detail_id: i32,
    pub tenant_id: i32,
    pub count_id: i32,
    pub item_id: i32,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub expected_quantity: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub counted_quantity: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub variance: Decimal,
    pub unit_of_measure: Option<String>,
    pub notes: Option<String>,
    pub is_recounted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: i32,
    pub updated_by: i32,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::inventory_count::Entity",
        from = "Column::CountId",
        to = "super::inventory_count::Column::CountId"
    )]
    Count,
}

impl Related<super::inventory_count::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Count.def()
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
    const ENTITY_NAME: &'static str = "InventoryCountDetail";

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

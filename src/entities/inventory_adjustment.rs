use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::store::{HasTenant, TenantScoped};
use crate::tenant::TenantId;

/// Direction of a stock adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentType {
    Increase,
    Decrease,
}

impl AdjustmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentType::Increase => "INCREASE",
            AdjustmentType::Decrease => "DECREASE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "INCREASE" => Some(AdjustmentType::Increase),
            "DECREASE" => Some(AdjustmentType::Decrease),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentStatus {
    Pending,
    Approved,
    Cancelled,
}

impl AdjustmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentStatus::Pending => "PENDING",
            AdjustmentStatus::Approved => "APPROVED",
            AdjustmentStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(AdjustmentStatus::Pending),
            "APPROVED" => Some(AdjustmentStatus::Approved),
            "CANCELLED" => Some(AdjustmentStatus::Cancelled),
            _ => None,
        }
    }
}

/// Header row of a manual or count-driven stock correction. The before/after
/// quantities per item live in `inventory_adjustment_detail`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_adjustments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub adjustment_id: i32,
    pub tenant_id: i32,
    pub adjustment_number: String,
    pub adjustment_date: DateTime<Utc>,
    pub status: String, // stored as string, converted via AdjustmentStatus
    pub adjustment_type: String,
    pub reason_code: Option<String>,
    pub reference_number: Option<String>,
    pub reference_type: Option<String>,
    pub reference_id: Option<i32>,
    pub notes: Option<String>,
    pub is_approved: bool,
    pub approved_by: Option<i32>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: i32,
    pub updated_by: i32,
    pub is_deleted: bool,
}

impl Model {
    pub fn adjustment_type(&self) -> Option<AdjustmentType> {
        AdjustmentType::from_str(&self.adjustment_type)
    }

    pub fn status(&self) -> Option<AdjustmentStatus> {
        AdjustmentStatus::from_str(&self.status)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::inventory_adjustment_detail::Entity")]
    Details,
}

impl Related<super::inventory_adjustment_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Details.def()
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
    const ENTITY_NAME: &'static str = "InventoryAdjustment";

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

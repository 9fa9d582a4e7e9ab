use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::store::{HasTenant, TenantScoped};
use crate::tenant::TenantId;

/// How item cost is derived for valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValuationMethod {
    Fifo,
    Lifo,
    Average,
    Standard,
}

impl ValuationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValuationMethod::Fifo => "FIFO",
            ValuationMethod::Lifo => "LIFO",
            ValuationMethod::Average => "AVERAGE",
            ValuationMethod::Standard => "STANDARD",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "FIFO" => Some(ValuationMethod::Fifo),
            "LIFO" => Some(ValuationMethod::Lifo),
            "AVERAGE" => Some(ValuationMethod::Average),
            "STANDARD" => Some(ValuationMethod::Standard),
            _ => None,
        }
    }
}

/// Per-product replenishment and valuation policy. Reference data: consulted
/// by reorder checks, never written by the movement protocols.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_policies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub policy_id: i32,
    pub tenant_id: i32,
    pub product_id: i32,
    pub variant_id: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub min_stock_level: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub max_stock_level: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub reorder_point: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub reorder_quantity: Option<Decimal>,
    pub valuation_method: Option<String>, // converted via ValuationMethod
    pub abc_class: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: i32,
    pub updated_by: i32,
    pub is_deleted: bool,
}

impl Model {
    pub fn valuation_method(&self) -> Option<ValuationMethod> {
        self.valuation_method
            .as_deref()
            .and_then(ValuationMethod::from_str)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

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
    const ENTITY_NAME: &'static str = "InventoryPolicy";

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

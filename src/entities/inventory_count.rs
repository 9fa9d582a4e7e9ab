use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::store::{HasTenant, TenantScoped};
use crate::tenant::TenantId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CountStatus {
    InProgress,
    Completed,
    Cancelled,
}

impl CountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountStatus::InProgress => "IN_PROGRESS",
            CountStatus::Completed => "COMPLETED",
            CountStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "IN_PROGRESS" => Some(CountStatus::InProgress),
            "COMPLETED" => Some(CountStatus::Completed),
            "CANCELLED" => Some(CountStatus::Cancelled),
            _ => None,
        }
    }
}

/// Header row of a cycle count session. Counting never mutates the ledger;
/// only completion turns non-zero variances into adjustments.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_counts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub count_id: i32,
    pub tenant_id: i32,
    pub count_number: String,
    pub count_type: Option<String>,
    pub status: String, // stored as string, converted via CountStatus
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub facility_id: Option<i32>,
    pub zone_id: Option<i32>,
    pub location_id: Option<i32>,
    pub product_id: Option<i32>,
    pub category_id: Option<i32>,
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
    pub fn status(&self) -> Option<CountStatus> {
        CountStatus::from_str(&self.status)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::inventory_count_detail::Entity")]
    Details,
}

impl Related<super::inventory_count_detail::Entity> for Entity {
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
    const ENTITY_NAME: &'static str = "InventoryCount";

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

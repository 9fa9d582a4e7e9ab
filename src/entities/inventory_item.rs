use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::store::{HasTenant, TenantScoped};
use crate::tenant::TenantId;

/// Status of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Available,
    Allocated,
    Quarantined,
    Damaged,
    Expired,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Available => "AVAILABLE",
            ItemStatus::Allocated => "ALLOCATED",
            ItemStatus::Quarantined => "QUARANTINED",
            ItemStatus::Damaged => "DAMAGED",
            ItemStatus::Expired => "EXPIRED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "AVAILABLE" => Some(ItemStatus::Available),
            "ALLOCATED" => Some(ItemStatus::Allocated),
            "QUARANTINED" => Some(ItemStatus::Quarantined),
            "DAMAGED" => Some(ItemStatus::Damaged),
            "EXPIRED" => Some(ItemStatus::Expired),
            _ => None,
        }
    }
}

/// The authoritative quantity record per (product, lot/serial, location).
///
/// Invariants after every committed mutation:
/// `quantity_on_hand >= quantity_allocated >= 0` and
/// `quantity_available == quantity_on_hand - quantity_allocated`.
/// `version` backs the optimistic check in the ledger's delta primitive.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub item_id: i32,
    pub tenant_id: i32,
    pub product_id: i32,
    pub variant_id: Option<i32>,
    pub lot_number: Option<String>,
    pub serial_number: Option<String>,
    pub status: String, // stored as string, converted via ItemStatus
    pub condition: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub quantity_on_hand: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub quantity_allocated: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub quantity_available: Decimal,
    pub unit_of_measure: Option<String>,
    pub location_id: i32,
    pub facility_id: Option<i32>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub manufacture_date: Option<DateTime<Utc>>,
    pub received_date: Option<DateTime<Utc>>,
    pub last_counted_date: Option<DateTime<Utc>>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub unit_cost: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub total_cost: Option<Decimal>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: i32,
    pub updated_by: i32,
    pub is_deleted: bool,
}

impl Model {
    pub fn status(&self) -> Option<ItemStatus> {
        ItemStatus::from_str(&self.status)
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
    const ENTITY_NAME: &'static str = "InventoryItem";

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_status_round_trip() {
        for status in [
            ItemStatus::Available,
            ItemStatus::Allocated,
            ItemStatus::Quarantined,
            ItemStatus::Damaged,
            ItemStatus::Expired,
        ] {
            assert_eq!(ItemStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(ItemStatus::from_str("available"), None);
    }
}

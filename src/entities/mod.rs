//! Sea-ORM entities for the inventory ledger.
//!
//! Every table except `inventory_policies`' reference data is mutated only
//! through the movement protocols in `crate::services`; the detail tables
//! are append-only audit records.

pub mod inventory_adjustment;
pub mod inventory_adjustment_detail;
pub mod inventory_count;
pub mod inventory_count_detail;
pub mod inventory_item;
pub mod inventory_policy;
pub mod inventory_reservation;
pub mod inventory_reservation_detail;
pub mod inventory_transaction;
pub mod inventory_transaction_detail;

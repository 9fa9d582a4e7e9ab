//! Service layer: every stock mutation runs here, inside one database
//! transaction per operation, against tenant-scoped queries.

pub mod adjustments;
pub mod counts;
pub mod items;
pub mod policies;
pub mod reservations;
pub mod transactions;

pub use adjustments::InventoryAdjustmentService;
pub use counts::InventoryCountService;
pub use items::InventoryItemService;
pub use policies::InventoryPolicyService;
pub use reservations::InventoryReservationService;
pub use transactions::InventoryTransactionService;

use crate::{
    db::DbPool,
    entities::{
        inventory_reservation::{self, Entity as InventoryReservation, ReservationStatus},
        inventory_reservation_detail::{self, Entity as InventoryReservationDetail},
    },
    errors::{ServiceError, StockAction},
    services::items::{apply_quantity_delta, load_item},
    store::{find_scoped_by_id, insert_scoped, scoped_select},
    tenant::TenantContext,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionError, TransactionTrait,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// A soft hold to place on one item's stock.
#[derive(Debug, Clone, Deserialize)]
pub struct ReserveStockRequest {
    pub item_id: i32,
    pub quantity: Decimal,
    pub reservation_type: Option<String>,
    pub reference_number: Option<String>,
    pub reference_type: Option<String>,
    pub reference_id: Option<i32>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub priority: Option<i32>,
    pub notes: Option<String>,
}

async fn load_reservation_with_details<C: ConnectionTrait>(
    txn: &C,
    ctx: &TenantContext,
    reservation_id: i32,
) -> Result<
    (
        inventory_reservation::Model,
        Vec<inventory_reservation_detail::Model>,
    ),
    ServiceError,
> {
    let reservation =
        find_scoped_by_id::<InventoryReservation, C>(txn, ctx, reservation_id).await?;
    let details = scoped_select::<InventoryReservationDetail>(ctx)
        .filter(inventory_reservation_detail::Column::ReservationId.eq(reservation_id))
        .order_by_asc(inventory_reservation_detail::Column::DetailId)
        .all(txn)
        .await?;
    Ok((reservation, details))
}

fn guard_not_terminal(
    reservation: &inventory_reservation::Model,
    target: ReservationStatus,
) -> Result<(), ServiceError> {
    let terminal = reservation.status().map(|s| s.is_terminal()).unwrap_or(false);
    if terminal {
        return Err(ServiceError::InvalidStateTransition {
            entity: "InventoryReservation",
            id: reservation.reservation_id,
            from: reservation.status.clone(),
            to: target.as_str().to_string(),
        });
    }
    Ok(())
}

pub struct InventoryReservationService {
    db_pool: Arc<DbPool>,
}

impl InventoryReservationService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Places a hold on available stock: allocated grows, on-hand does not
    /// move. Fails when the unreserved quantity cannot cover the request.
    #[instrument(skip(self, request))]
    pub async fn reserve_stock(
        &self,
        ctx: &TenantContext,
        request: ReserveStockRequest,
    ) -> Result<inventory_reservation::Model, ServiceError> {
        if request.quantity <= Decimal::ZERO {
            return Err(ServiceError::validation("quantity", "must be positive"));
        }

        let ctx = *ctx;
        let reservation = self
            .db_pool
            .transaction::<_, inventory_reservation::Model, ServiceError>(move |txn| {
                Box::pin(async move {
                    let item = load_item(txn, &ctx, request.item_id).await?;

                    let available = item.quantity_on_hand - item.quantity_allocated;
                    if available < request.quantity {
                        return Err(ServiceError::InsufficientStock {
                            item_id: item.item_id,
                            action: StockAction::Reserve,
                            available,
                            requested: request.quantity,
                        });
                    }

                    apply_quantity_delta(
                        txn,
                        &item,
                        Decimal::ZERO,
                        request.quantity,
                        StockAction::Reserve,
                    )
                    .await?;

                    let header = inventory_reservation::ActiveModel {
                        reservation_type: Set(request.reservation_type),
                        status: Set(ReservationStatus::Reserved.as_str().to_string()),
                        reference_number: Set(request.reference_number),
                        reference_type: Set(request.reference_type),
                        reference_id: Set(request.reference_id),
                        requested_date: Set(Some(Utc::now())),
                        expiry_date: Set(request.expiry_date),
                        priority: Set(request.priority),
                        notes: Set(request.notes),
                        created_by: Set(0),
                        updated_by: Set(0),
                        is_deleted: Set(false),
                        ..Default::default()
                    };
                    let header = insert_scoped(txn, &ctx, header).await?;

                    let detail = inventory_reservation_detail::ActiveModel {
                        reservation_id: Set(header.reservation_id),
                        item_id: Set(item.item_id),
                        quantity_requested: Set(request.quantity),
                        quantity_allocated: Set(request.quantity),
                        quantity_fulfilled: Set(Decimal::ZERO),
                        unit_of_measure: Set(item.unit_of_measure.clone()),
                        created_by: Set(0),
                        updated_by: Set(0),
                        is_deleted: Set(false),
                        ..Default::default()
                    };
                    insert_scoped(txn, &ctx, detail).await?;

                    Ok(header)
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(db_err) => ServiceError::Database(db_err),
                TransactionError::Transaction(service_err) => service_err,
            })?;

        info!(
            reservation_id = reservation.reservation_id,
            "Reserved stock"
        );
        Ok(reservation)
    }

    /// Releases a hold: every detail's allocated quantity is handed back to
    /// available stock and the reservation becomes `Cancelled`.
    #[instrument(skip(self))]
    pub async fn release_reservation(
        &self,
        ctx: &TenantContext,
        reservation_id: i32,
    ) -> Result<inventory_reservation::Model, ServiceError> {
        let ctx = *ctx;
        let reservation = self
            .db_pool
            .transaction::<_, inventory_reservation::Model, ServiceError>(move |txn| {
                Box::pin(async move {
                    let (reservation, details) =
                        load_reservation_with_details(txn, &ctx, reservation_id).await?;
                    guard_not_terminal(&reservation, ReservationStatus::Cancelled)?;

                    for detail in &details {
                        if detail.quantity_allocated > Decimal::ZERO {
                            let item = load_item(txn, &ctx, detail.item_id).await?;
                            apply_quantity_delta(
                                txn,
                                &item,
                                Decimal::ZERO,
                                -detail.quantity_allocated,
                                StockAction::Release,
                            )
                            .await?;

                            let mut active: inventory_reservation_detail::ActiveModel =
                                detail.clone().into();
                            active.quantity_allocated = Set(Decimal::ZERO);
                            active.update(txn).await?;
                        }
                    }

                    let mut active: inventory_reservation::ActiveModel = reservation.into();
                    active.status = Set(ReservationStatus::Cancelled.as_str().to_string());
                    Ok(active.update(txn).await?)
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(db_err) => ServiceError::Database(db_err),
                TransactionError::Transaction(service_err) => service_err,
            })?;

        info!(reservation_id, "Released reservation");
        Ok(reservation)
    }

    /// Consumes a hold: the allocated quantity leaves both on-hand and
    /// allocated, details record what was fulfilled, and the reservation
    /// becomes `Fulfilled`.
    #[instrument(skip(self))]
    pub async fn confirm_reservation(
        &self,
        ctx: &TenantContext,
        reservation_id: i32,
    ) -> Result<inventory_reservation::Model, ServiceError> {
        let ctx = *ctx;
        let reservation = self
            .db_pool
            .transaction::<_, inventory_reservation::Model, ServiceError>(move |txn| {
                Box::pin(async move {
                    let (reservation, details) =
                        load_reservation_with_details(txn, &ctx, reservation_id).await?;
                    guard_not_terminal(&reservation, ReservationStatus::Fulfilled)?;

                    for detail in &details {
                        if detail.quantity_allocated > Decimal::ZERO {
                            let item = load_item(txn, &ctx, detail.item_id).await?;
                            if item.quantity_on_hand < detail.quantity_allocated {
                                return Err(ServiceError::InsufficientStock {
                                    item_id: item.item_id,
                                    action: StockAction::Confirm,
                                    available: item.quantity_on_hand,
                                    requested: detail.quantity_allocated,
                                });
                            }
                            apply_quantity_delta(
                                txn,
                                &item,
                                -detail.quantity_allocated,
                                -detail.quantity_allocated,
                                StockAction::Confirm,
                            )
                            .await?;

                            let mut active: inventory_reservation_detail::ActiveModel =
                                detail.clone().into();
                            active.quantity_fulfilled = Set(detail.quantity_allocated);
                            active.quantity_allocated = Set(Decimal::ZERO);
                            active.update(txn).await?;
                        }
                    }

                    let mut active: inventory_reservation::ActiveModel = reservation.into();
                    active.status = Set(ReservationStatus::Fulfilled.as_str().to_string());
                    Ok(active.update(txn).await?)
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(db_err) => ServiceError::Database(db_err),
                TransactionError::Transaction(service_err) => service_err,
            })?;

        info!(reservation_id, "Confirmed reservation");
        Ok(reservation)
    }

    #[instrument(skip(self))]
    pub async fn get_reservation(
        &self,
        ctx: &TenantContext,
        reservation_id: i32,
    ) -> Result<inventory_reservation::Model, ServiceError> {
        find_scoped_by_id::<InventoryReservation, _>(self.db_pool.as_ref(), ctx, reservation_id)
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_reservations(
        &self,
        ctx: &TenantContext,
        status: Option<ReservationStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<inventory_reservation::Model>, u64), ServiceError> {
        let mut query = scoped_select::<InventoryReservation>(ctx);
        if let Some(status) = status {
            query = query.filter(inventory_reservation::Column::Status.eq(status.as_str()));
        }
        let paginator = query
            .order_by_desc(inventory_reservation::Column::CreatedAt)
            .paginate(self.db_pool.as_ref(), per_page);
        let total = paginator.num_items().await?;
        let reservations = paginator.fetch_page(page).await?;
        Ok((reservations, total))
    }

    #[instrument(skip(self))]
    pub async fn details_for(
        &self,
        ctx: &TenantContext,
        reservation_id: i32,
    ) -> Result<Vec<inventory_reservation_detail::Model>, ServiceError> {
        find_scoped_by_id::<InventoryReservation, _>(self.db_pool.as_ref(), ctx, reservation_id)
            .await?;
        Ok(scoped_select::<InventoryReservationDetail>(ctx)
            .filter(inventory_reservation_detail::Column::ReservationId.eq(reservation_id))
            .order_by_asc(inventory_reservation_detail::Column::DetailId)
            .all(self.db_pool.as_ref())
            .await?)
    }
}

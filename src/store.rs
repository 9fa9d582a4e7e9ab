//! Tenant-scoped access to the entity tables.
//!
//! Instead of a session-level filter that has to be re-enabled per
//! connection, scoping is applied where the query is built: every read goes
//! through [`scoped_select`] or [`find_scoped_by_id`], every insert through
//! [`insert_scoped`]. An entity opts in by implementing [`TenantScoped`]
//! (which column holds the tenant) and its active model [`HasTenant`]
//! (how to stamp one). Under the privileged scope reads are unfiltered;
//! inserts still require a tenant and fail closed without one.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, IntoActiveModel, QueryFilter, Select};

use crate::errors::ServiceError;
use crate::tenant::{TenantContext, TenantId};

/// Entity whose rows belong to exactly one tenant and soft-delete instead of
/// dropping rows.
pub trait TenantScoped: EntityTrait {
    /// Name used in `NotFound` errors.
    const ENTITY_NAME: &'static str;

    fn tenant_column() -> Self::Column;

    fn deleted_column() -> Self::Column;
}

/// Active model that can receive a tenant stamp before insert.
///
/// Stamping only fills an unset column; a value the caller set explicitly is
/// left alone so fixtures and privileged maintenance can address any tenant.
pub trait HasTenant {
    fn stamp_tenant(&mut self, tenant: TenantId);
}

/// Base query for an entity under the given scope: live rows only, and only
/// the scope's tenant unless the scope is privileged.
pub fn scoped_select<E: TenantScoped>(ctx: &TenantContext) -> Select<E> {
    let mut query = E::find().filter(E::deleted_column().eq(false));
    if let Some(tenant) = ctx.tenant_id() {
        query = query.filter(E::tenant_column().eq(tenant.value()));
    }
    query
}

/// Single-row lookup under the scope. A row that is missing, soft-deleted,
/// or owned by another tenant yields the same `NotFound`.
pub async fn find_scoped_by_id<E, C>(
    db: &C,
    ctx: &TenantContext,
    id: i32,
) -> Result<E::Model, ServiceError>
where
    E: TenantScoped,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    let mut query = E::find_by_id(<E::PrimaryKey as PrimaryKeyTrait>::ValueType::from(id))
        .filter(E::deleted_column().eq(false));
    if let Some(tenant) = ctx.tenant_id() {
        query = query.filter(E::tenant_column().eq(tenant.value()));
    }
    query.one(db).await?.ok_or(ServiceError::NotFound {
        entity: E::ENTITY_NAME,
        id,
    })
}

/// Inserts a row stamped with the scope's tenant. Requires a tenant scope:
/// the privileged scope has no tenant to stamp and is rejected.
pub async fn insert_scoped<A, C>(
    db: &C,
    ctx: &TenantContext,
    mut model: A,
) -> Result<<A::Entity as EntityTrait>::Model, ServiceError>
where
    A: ActiveModelTrait + ActiveModelBehavior + HasTenant + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    let tenant = ctx.tenant_id().ok_or(ServiceError::MissingTenant)?;
    model.stamp_tenant(tenant);
    Ok(model.insert(db).await?)
}

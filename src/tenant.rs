//! Tenant scope carried as an explicit value.
//!
//! The scope is a plain function parameter rather than ambient thread/task
//! state: every store and service call takes a `&TenantContext`, so a scope
//! can never outlive its request or bleed into another worker, and there is
//! no `clear()` to forget.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::errors::ServiceError;

/// Header the web edge resolves the tenant from.
pub const TENANT_HEADER: &str = "x-tenant-id";

/// Opaque tenant identifier. Every tenant-scoped row carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TenantId(i32);

impl TenantId {
    pub fn new(id: i32) -> Self {
        TenantId(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i32> for TenantId {
    fn from(id: i32) -> Self {
        TenantId(id)
    }
}

/// Scope under which store operations run.
///
/// There is no "unset" variant: a caller either acts for one tenant or has
/// explicitly asked for the unfiltered view. Requests always get `Tenant`;
/// `Privileged` exists for background maintenance (migrations, cross-tenant
/// reporting) and is never constructible from request input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantContext {
    scope: Scope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Tenant(TenantId),
    Privileged,
}

impl TenantContext {
    pub fn for_tenant(tenant: impl Into<TenantId>) -> Self {
        TenantContext {
            scope: Scope::Tenant(tenant.into()),
        }
    }

    /// Unfiltered scope for background/maintenance work. Reads see every
    /// tenant's rows and writes are not stamped; use deliberately.
    pub fn privileged() -> Self {
        TenantContext {
            scope: Scope::Privileged,
        }
    }

    /// The active tenant, or `None` under the privileged scope.
    pub fn tenant_id(&self) -> Option<TenantId> {
        match self.scope {
            Scope::Tenant(id) => Some(id),
            Scope::Privileged => None,
        }
    }
}

impl std::fmt::Display for TenantContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.scope {
            Scope::Tenant(id) => write!(f, "tenant:{}", id),
            Scope::Privileged => f.write_str("privileged"),
        }
    }
}

/// Extracts the tenant scope from the `X-Tenant-Id` header.
///
/// Fails closed: a missing or malformed header rejects the request before
/// any store access. Acquisition and release are tied to the request by
/// construction: the context is dropped with the handler's stack frame.
#[async_trait::async_trait]
impl<S> FromRequestParts<S> for TenantContext
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(TENANT_HEADER)
            .ok_or(ServiceError::MissingTenant)?;
        let raw = raw.to_str().map_err(|_| {
            ServiceError::validation(TENANT_HEADER, "header value is not valid UTF-8")
        })?;
        let id: i32 = raw.trim().parse().map_err(|_| {
            ServiceError::validation(TENANT_HEADER, format!("'{}' is not a tenant id", raw))
        })?;
        Ok(TenantContext::for_tenant(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn tenant_scope_exposes_id() {
        let ctx = TenantContext::for_tenant(42);
        assert_eq!(ctx.tenant_id(), Some(TenantId::new(42)));
    }

    #[test]
    fn privileged_scope_has_no_tenant() {
        assert_eq!(TenantContext::privileged().tenant_id(), None);
    }

    #[tokio::test]
    async fn extractor_reads_header() {
        let req = Request::builder()
            .header(TENANT_HEADER, "17")
            .body(())
            .unwrap();
        let (mut parts, _) = req.into_parts();
        let ctx = TenantContext::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(ctx.tenant_id(), Some(TenantId::new(17)));
    }

    #[tokio::test]
    async fn extractor_fails_closed_without_header() {
        let req = Request::builder().body(()).unwrap();
        let (mut parts, _) = req.into_parts();
        let err = TenantContext::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MissingTenant));
    }

    #[tokio::test]
    async fn extractor_rejects_garbage() {
        let req = Request::builder()
            .header(TENANT_HEADER, "acme-corp")
            .body(())
            .unwrap();
        let (mut parts, _) = req.into_parts();
        let err = TenantContext::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
    }
}

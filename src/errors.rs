use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use sea_orm::error::DbErr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a ledger mutation was trying to do when it ran out of stock.
/// Carried inside `ServiceError::InsufficientStock` so callers can render
/// an actionable message without string-parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockAction {
    Decrease,
    Issue,
    Transfer,
    Reserve,
    Release,
    Confirm,
}

impl StockAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockAction::Decrease => "decrease stock",
            StockAction::Issue => "issue stock",
            StockAction::Transfer => "transfer stock",
            StockAction::Reserve => "reserve stock",
            StockAction::Release => "release stock",
            StockAction::Confirm => "confirm reservation",
        }
    }
}

impl fmt::Display for StockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error taxonomy for the inventory core.
///
/// Every variant except `Database` is terminal for the triggering operation
/// and carries enough structure for the API layer to build a response; no
/// retry is attempted inside the core.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// Entity absent, soft-deleted, or owned by another tenant. The three
    /// cases are deliberately indistinguishable so existence never leaks
    /// across tenants.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Cannot {action} for item {item_id}: available {available}, requested {requested}")]
    InsufficientStock {
        item_id: i32,
        action: StockAction,
        available: Decimal,
        requested: Decimal,
    },

    #[error("{entity} {id}: invalid transition from {from} to {to}")]
    InvalidStateTransition {
        entity: &'static str,
        id: i32,
        from: String,
        to: String,
    },

    #[error("Validation failed for '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// The optimistic version check on an inventory row lost a race with a
    /// concurrent mutation; the enclosing transaction was rolled back.
    #[error("Concurrent modification of {entity} {id}")]
    Conflict { entity: &'static str, id: i32 },

    /// Request reached a tenant-scoped operation without a tenant. The
    /// store fails closed rather than touching an arbitrary tenant's rows.
    #[error("Tenant scope missing from request")]
    MissingTenant,
}

impl ServiceError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ServiceError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status for this error; the single source of truth for mapping.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InsufficientStock { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidStateTransition { .. } | Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Validation { .. } | Self::MissingTenant => StatusCode::BAD_REQUEST,
        }
    }

    /// Message suitable for HTTP responses. Infrastructure errors return a
    /// generic message so driver details never reach clients.
    pub fn response_message(&self) -> String {
        match self {
            Self::Database(_) => "Database error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        let field = err
            .field_errors()
            .keys()
            .next()
            .map(|f| f.to_string())
            .unwrap_or_else(|| "input".to_string());
        ServiceError::Validation {
            reason: err.to_string(),
            field,
        }
    }
}

/// Standard error body returned by every handler.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status category (e.g. "Not Found", "Conflict").
    pub error: String,
    /// Human-readable description of what went wrong.
    pub message: String,
    /// ISO 8601 timestamp when the error occurred.
    pub timestamp: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let err = ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.response_message(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        (status, Json(err)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn status_code_mapping() {
        assert_eq!(
            ServiceError::NotFound {
                entity: "InventoryItem",
                id: 7
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::InsufficientStock {
                item_id: 7,
                action: StockAction::Reserve,
                available: dec!(50),
                requested: dec!(60),
            }
            .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ServiceError::InvalidStateTransition {
                entity: "InventoryCount",
                id: 1,
                from: "COMPLETED".into(),
                to: "COMPLETED".into(),
            }
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServiceError::validation("quantity", "must be non-negative").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::MissingTenant.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn database_message_is_hidden() {
        let err = ServiceError::Database(DbErr::Custom("host=10.0.0.3 password=s3cret".into()));
        assert_eq!(err.response_message(), "Database error");
    }

    #[test]
    fn insufficient_stock_reports_quantities() {
        let err = ServiceError::InsufficientStock {
            item_id: 42,
            action: StockAction::Issue,
            available: dec!(15),
            requested: dec!(20),
        };
        let msg = err.to_string();
        assert!(msg.contains("item 42"));
        assert!(msg.contains("available 15"));
        assert!(msg.contains("requested 20"));
    }

    #[test]
    fn not_found_does_not_mention_tenant() {
        // Cross-tenant lookups and truly-missing rows must be byte-identical.
        let err = ServiceError::NotFound {
            entity: "InventoryItem",
            id: 9,
        };
        assert_eq!(err.to_string(), "InventoryItem with id 9 not found");
    }
}

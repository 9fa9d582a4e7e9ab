//! HTTP edge: thin axum handlers that resolve the tenant scope from the
//! request and delegate to the services. No business rules live here.

pub mod adjustments;
pub mod counts;
pub mod health;
pub mod items;
pub mod policies;
pub mod reservations;
pub mod transactions;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

/// Standard pagination query parameters for list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl ListQuery {
    /// Zero-based page and a per-page clamped to the configured maximum.
    pub fn resolve(&self, config: &AppConfig) -> (u64, u64) {
        let page = self.page.unwrap_or(0);
        let per_page = self
            .per_page
            .unwrap_or(config.api_default_page_size)
            .clamp(1, config.api_max_page_size);
        (page, per_page)
    }
}

/// Envelope for paginated list responses.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        Self {
            items,
            total,
            page,
            per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config_with_page_sizes(default: u64, max: u64) -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            log_json: false,
            auto_migrate: false,
            db_max_connections: 1,
            db_min_connections: 1,
            db_connect_timeout_secs: 1,
            db_idle_timeout_secs: 1,
            db_acquire_timeout_secs: 1,
            api_default_page_size: default,
            api_max_page_size: max,
        }
    }

    proptest! {
        #[test]
        fn per_page_is_always_clamped(
            page in proptest::option::of(0u64..10_000),
            per_page in proptest::option::of(0u64..1_000_000),
            max in 1u64..10_000,
        ) {
            let config = config_with_page_sizes(50.min(max), max);
            let query = ListQuery { page, per_page };
            let (resolved_page, resolved_per_page) = query.resolve(&config);
            prop_assert!(resolved_per_page >= 1);
            prop_assert!(resolved_per_page <= max);
            prop_assert_eq!(resolved_page, page.unwrap_or(0));
        }
    }
}

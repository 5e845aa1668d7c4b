//! Application state shared across request handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ApiConfig;
use crate::db::{
    AddressRepository, ConsumerRepository, PgAddressRepository, PgConsumerRepository,
};

/// Shared application state.
///
/// Cheap to clone; all contents are behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Application configuration
    config: ApiConfig,

    /// Database connection pool
    pool: PgPool,

    /// Consumer repository
    consumers: Arc<dyn ConsumerRepository>,

    /// Address repository
    addresses: Arc<dyn AddressRepository>,
}

impl AppState {
    /// Create application state over a database pool.
    #[must_use]
    pub fn new(config: ApiConfig, pool: PgPool) -> Self {
        let consumers: Arc<dyn ConsumerRepository> =
            Arc::new(PgConsumerRepository::new(pool.clone()));
        let addresses: Arc<dyn AddressRepository> =
            Arc::new(PgAddressRepository::new(pool.clone()));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                consumers,
                addresses,
            }),
        }
    }

    /// Get the application configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get the consumer repository.
    #[must_use]
    pub fn consumers(&self) -> Arc<dyn ConsumerRepository> {
        self.inner.consumers.clone()
    }

    /// Get the address repository.
    #[must_use]
    pub fn addresses(&self) -> Arc<dyn AddressRepository> {
        self.inner.addresses.clone()
    }
}

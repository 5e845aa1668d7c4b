//! Database access layer for the consumers service.
//!
//! Repositories are defined as traits so command handlers can run against
//! either the `PostgreSQL` implementations or the in-memory doubles used
//! by the service-level tests.

pub mod addresses;
pub mod consumers;
pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use consumers_core::{Address, AddressId, Consumer, ConsumerId};

pub use addresses::PgAddressRepository;
pub use consumers::PgConsumerRepository;
pub use memory::{InMemoryAddressRepository, InMemoryConsumerRepository};

/// Embedded migrations. Applied explicitly via `consumers-cli migrate`,
/// never on server startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database connection or query failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored data failed domain validation on read
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// The row targeted by an update vanished between fetch and write
    #[error("not found")]
    NotFound,

    /// A unique index rejected the write
    #[error("{field} already exists")]
    UniqueViolation {
        /// Offending field in its API spelling (e.g. "documentId")
        field: &'static str,
        /// The value that collided
        value: String,
    },
}

/// Create a `PostgreSQL` connection pool.
///
/// # Errors
///
/// Returns an error if the database connection fails.
pub async fn create_pool(database_url: &SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Persistence operations for consumers.
#[async_trait]
pub trait ConsumerRepository: Send + Sync {
    /// Fetch a consumer by id.
    async fn get_by_id(&self, id: ConsumerId) -> Result<Option<Consumer>, RepositoryError>;

    /// Fetch every consumer, oldest first.
    async fn get_all(&self) -> Result<Vec<Consumer>, RepositoryError>;

    /// Persist a new consumer.
    async fn add(&self, consumer: &Consumer) -> Result<(), RepositoryError>;

    /// Persist changes to an existing consumer.
    ///
    /// Returns [`RepositoryError::NotFound`] when no row matches the id.
    async fn update(&self, consumer: &Consumer) -> Result<(), RepositoryError>;

    /// Delete a consumer. Deleting an absent id is a no-op.
    async fn delete(&self, id: ConsumerId) -> Result<(), RepositoryError>;
}

/// Persistence operations for consumer addresses.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Fetch an address by id.
    async fn get_by_id(&self, id: AddressId) -> Result<Option<Address>, RepositoryError>;

    /// Fetch every address belonging to a consumer, oldest first.
    ///
    /// An unknown consumer yields an empty list, not an error.
    async fn get_by_consumer_id(
        &self,
        consumer_id: ConsumerId,
    ) -> Result<Vec<Address>, RepositoryError>;

    /// Fetch the consumer's default address.
    ///
    /// When several addresses are flagged as default, the oldest wins.
    async fn get_main_address_by_consumer_id(
        &self,
        consumer_id: ConsumerId,
    ) -> Result<Option<Address>, RepositoryError>;

    /// Persist a new address.
    async fn add(&self, address: &Address) -> Result<(), RepositoryError>;

    /// Persist changes to an existing address.
    ///
    /// Returns [`RepositoryError::NotFound`] when no row matches the id.
    async fn update(&self, address: &Address) -> Result<(), RepositoryError>;

    /// Delete an address. Deleting an absent id is a no-op.
    async fn delete(&self, id: AddressId) -> Result<(), RepositoryError>;
}

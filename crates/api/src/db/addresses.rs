//! `PostgreSQL` repository for consumer addresses.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use consumers_core::{Address, AddressId, ConsumerId, CountryCodeId};

use super::{AddressRepository, RepositoryError};

/// Address repository backed by `PostgreSQL`.
pub struct PgAddressRepository {
    pool: PgPool,
}

impl PgAddressRepository {
    /// Create a new repository over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Row Mapping
// ============================================================================

/// Database row for an address.
///
/// The `postalcode` column keeps its legacy spelling and is aliased to
/// `postal_code` in every SELECT.
#[derive(Debug, sqlx::FromRow)]
struct AddressRow {
    id: AddressId,
    consumer_id: ConsumerId,
    street_address: String,
    city: String,
    state: String,
    postal_code: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    is_default: bool,
    country_id: CountryCodeId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Self {
            id: row.id,
            consumer_id: row.consumer_id,
            street_address: row.street_address,
            city: row.city,
            state: row.state,
            postal_code: row.postal_code,
            latitude: row.latitude,
            longitude: row.longitude,
            is_default: row.is_default,
            country_id: row.country_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// ============================================================================
// Repository Implementation
// ============================================================================

#[async_trait]
impl AddressRepository for PgAddressRepository {
    async fn get_by_id(&self, id: AddressId) -> Result<Option<Address>, RepositoryError> {
        let row = sqlx::query_as::<_, AddressRow>(
            r"
            SELECT id, consumer_id, street_address, city, state,
                   postalcode AS postal_code, latitude, longitude,
                   is_default, country_id, created_at, updated_at
            FROM shc_consumer.tb_consumer_address
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn get_by_consumer_id(
        &self,
        consumer_id: ConsumerId,
    ) -> Result<Vec<Address>, RepositoryError> {
        let rows = sqlx::query_as::<_, AddressRow>(
            r"
            SELECT id, consumer_id, street_address, city, state,
                   postalcode AS postal_code, latitude, longitude,
                   is_default, country_id, created_at, updated_at
            FROM shc_consumer.tb_consumer_address
            WHERE consumer_id = $1
            ORDER BY created_at
            ",
        )
        .bind(consumer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_main_address_by_consumer_id(
        &self,
        consumer_id: ConsumerId,
    ) -> Result<Option<Address>, RepositoryError> {
        let row = sqlx::query_as::<_, AddressRow>(
            r"
            SELECT id, consumer_id, street_address, city, state,
                   postalcode AS postal_code, latitude, longitude,
                   is_default, country_id, created_at, updated_at
            FROM shc_consumer.tb_consumer_address
            WHERE consumer_id = $1 AND is_default
            ORDER BY created_at
            LIMIT 1
            ",
        )
        .bind(consumer_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn add(&self, address: &Address) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO shc_consumer.tb_consumer_address
                (id, consumer_id, street_address, city, state, postalcode,
                 latitude, longitude, is_default, country_id,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(address.id)
        .bind(address.consumer_id)
        .bind(&address.street_address)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.postal_code)
        .bind(address.latitude)
        .bind(address.longitude)
        .bind(address.is_default)
        .bind(address.country_id)
        .bind(address.created_at)
        .bind(address.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, address: &Address) -> Result<(), RepositoryError> {
        // consumer_id is deliberately not updatable
        let result = sqlx::query(
            r"
            UPDATE shc_consumer.tb_consumer_address
            SET street_address = $2,
                city = $3,
                state = $4,
                postalcode = $5,
                latitude = $6,
                longitude = $7,
                is_default = $8,
                country_id = $9,
                updated_at = $10
            WHERE id = $1
            ",
        )
        .bind(address.id)
        .bind(&address.street_address)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.postal_code)
        .bind(address.latitude)
        .bind(address.longitude)
        .bind(address.is_default)
        .bind(address.country_id)
        .bind(address.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: AddressId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM shc_consumer.tb_consumer_address WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

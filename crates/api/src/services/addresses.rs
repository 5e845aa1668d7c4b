//! Address command handling.

use std::sync::Arc;

use consumers_core::{Address, AddressId, ConsumerId, CountryCodeId};

use crate::commands::address::{AddressResponse, CreateAddressCommand, UpdateAddressCommand};
use crate::db::{AddressRepository, ConsumerRepository, RepositoryError};

use super::ServiceError;

/// Handles address CRUD commands.
///
/// Creating an address checks that the owning consumer exists, so the
/// service holds both repositories.
pub struct AddressService {
    addresses: Arc<dyn AddressRepository>,
    consumers: Arc<dyn ConsumerRepository>,
}

impl AddressService {
    /// Create a service over the given repositories.
    #[must_use]
    pub fn new(
        addresses: Arc<dyn AddressRepository>,
        consumers: Arc<dyn ConsumerRepository>,
    ) -> Self {
        Self {
            addresses,
            consumers,
        }
    }

    /// Create an address for an existing consumer.
    ///
    /// An absent `consumerId` defaults to the nil id, which the existence
    /// check then reports as an unknown consumer.
    ///
    /// # Errors
    ///
    /// Returns `ConsumerNotFound` when the owning consumer does not exist.
    pub async fn create(
        &self,
        cmd: &CreateAddressCommand,
    ) -> Result<AddressResponse, ServiceError> {
        let consumer_id = cmd.consumer_id.unwrap_or_else(ConsumerId::nil);

        if self.consumers.get_by_id(consumer_id).await?.is_none() {
            return Err(ServiceError::ConsumerNotFound(consumer_id));
        }

        let address = Address::new(
            consumer_id,
            &cmd.street_address,
            &cmd.city,
            &cmd.state,
            &cmd.postal_code,
            cmd.latitude,
            cmd.longitude,
            cmd.is_default,
            cmd.country_id.unwrap_or_else(CountryCodeId::nil),
        );

        self.addresses.add(&address).await?;

        tracing::info!(address_id = %address.id, consumer_id = %consumer_id, "address created");
        Ok(AddressResponse::from(&address))
    }

    /// Fetch an address by id.
    ///
    /// # Errors
    ///
    /// Returns `AddressNotFound` when no row matches.
    pub async fn get(&self, id: AddressId) -> Result<AddressResponse, ServiceError> {
        let address = self
            .addresses
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::AddressNotFound(id))?;

        Ok(AddressResponse::from(&address))
    }

    /// List a consumer's addresses, oldest first.
    ///
    /// An unknown consumer yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `Repository` on storage failure.
    pub async fn list_by_consumer(
        &self,
        consumer_id: ConsumerId,
    ) -> Result<Vec<AddressResponse>, ServiceError> {
        let addresses = self.addresses.get_by_consumer_id(consumer_id).await?;
        Ok(addresses.iter().map(AddressResponse::from).collect())
    }

    /// Update an address identified by the id in the command body.
    ///
    /// An absent id defaults to the nil id and is reported as unknown.
    /// The owning consumer is never changed.
    ///
    /// # Errors
    ///
    /// Returns `AddressNotFound` when no row matches the body id.
    pub async fn update(
        &self,
        cmd: &UpdateAddressCommand,
    ) -> Result<AddressResponse, ServiceError> {
        let id = cmd.id.unwrap_or_else(AddressId::nil);

        let mut address = self
            .addresses
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::AddressNotFound(id))?;

        address.update(
            &cmd.street_address,
            &cmd.city,
            &cmd.state,
            &cmd.postal_code,
            cmd.latitude,
            cmd.longitude,
            cmd.is_default,
            cmd.country_id.unwrap_or_else(CountryCodeId::nil),
        );

        self.addresses.update(&address).await.map_err(|e| match e {
            // The row vanished between fetch and write
            RepositoryError::NotFound => ServiceError::AddressNotFound(id),
            other => ServiceError::Repository(other),
        })?;

        Ok(AddressResponse::from(&address))
    }

    /// Delete an address.
    ///
    /// # Errors
    ///
    /// Returns `AddressNotFound` when no row matches; no delete is
    /// attempted in that case.
    pub async fn delete(&self, id: AddressId) -> Result<(), ServiceError> {
        if self.addresses.get_by_id(id).await?.is_none() {
            return Err(ServiceError::AddressNotFound(id));
        }

        self.addresses.delete(id).await?;

        tracing::info!(address_id = %id, "address deleted");
        Ok(())
    }
}

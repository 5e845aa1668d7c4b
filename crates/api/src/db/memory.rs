//! In-memory repositories.
//!
//! Behavioral stand-ins for the `PostgreSQL` repositories, used by the
//! service-level tests. They enforce the same uniqueness rules as the
//! unique indexes on `tb_consumers`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use consumers_core::{Address, AddressId, Consumer, ConsumerId};

use super::{AddressRepository, ConsumerRepository, RepositoryError};

// ============================================================================
// Consumers
// ============================================================================

/// In-memory consumer store keyed by id.
#[derive(Default)]
pub struct InMemoryConsumerRepository {
    consumers: RwLock<HashMap<ConsumerId, Consumer>>,
}

impl InMemoryConsumerRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Reject a candidate whose unique fields collide with another stored
/// consumer. `exclude` skips the candidate's own row during updates.
fn check_uniqueness(
    existing: &HashMap<ConsumerId, Consumer>,
    candidate: &Consumer,
    exclude: Option<ConsumerId>,
) -> Result<(), RepositoryError> {
    for other in existing.values() {
        if Some(other.id) == exclude {
            continue;
        }
        if other.document_id == candidate.document_id {
            return Err(RepositoryError::UniqueViolation {
                field: "documentId",
                value: candidate.document_id.clone(),
            });
        }
        if other.phone_number == candidate.phone_number {
            return Err(RepositoryError::UniqueViolation {
                field: "phoneNumber",
                value: candidate.phone_number.as_str().to_owned(),
            });
        }
        if other.email == candidate.email {
            return Err(RepositoryError::UniqueViolation {
                field: "email",
                value: candidate.email.as_str().to_owned(),
            });
        }
    }
    Ok(())
}

#[async_trait]
impl ConsumerRepository for InMemoryConsumerRepository {
    async fn get_by_id(&self, id: ConsumerId) -> Result<Option<Consumer>, RepositoryError> {
        Ok(self.consumers.read().await.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Consumer>, RepositoryError> {
        let mut all: Vec<Consumer> = self.consumers.read().await.values().cloned().collect();
        all.sort_by_key(|c| c.created_at);
        Ok(all)
    }

    async fn add(&self, consumer: &Consumer) -> Result<(), RepositoryError> {
        let mut consumers = self.consumers.write().await;
        check_uniqueness(&consumers, consumer, None)?;
        consumers.insert(consumer.id, consumer.clone());
        Ok(())
    }

    async fn update(&self, consumer: &Consumer) -> Result<(), RepositoryError> {
        let mut consumers = self.consumers.write().await;
        if !consumers.contains_key(&consumer.id) {
            return Err(RepositoryError::NotFound);
        }
        check_uniqueness(&consumers, consumer, Some(consumer.id))?;
        consumers.insert(consumer.id, consumer.clone());
        Ok(())
    }

    async fn delete(&self, id: ConsumerId) -> Result<(), RepositoryError> {
        self.consumers.write().await.remove(&id);
        Ok(())
    }
}

// ============================================================================
// Addresses
// ============================================================================

/// In-memory address store keyed by id.
#[derive(Default)]
pub struct InMemoryAddressRepository {
    addresses: RwLock<HashMap<AddressId, Address>>,
}

impl InMemoryAddressRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepository {
    async fn get_by_id(&self, id: AddressId) -> Result<Option<Address>, RepositoryError> {
        Ok(self.addresses.read().await.get(&id).cloned())
    }

    async fn get_by_consumer_id(
        &self,
        consumer_id: ConsumerId,
    ) -> Result<Vec<Address>, RepositoryError> {
        let mut matching: Vec<Address> = self
            .addresses
            .read()
            .await
            .values()
            .filter(|a| a.consumer_id == consumer_id)
            .cloned()
            .collect();
        matching.sort_by_key(|a| a.created_at);
        Ok(matching)
    }

    async fn get_main_address_by_consumer_id(
        &self,
        consumer_id: ConsumerId,
    ) -> Result<Option<Address>, RepositoryError> {
        let defaults = self
            .get_by_consumer_id(consumer_id)
            .await?
            .into_iter()
            .find(|a| a.is_default);
        Ok(defaults)
    }

    async fn add(&self, address: &Address) -> Result<(), RepositoryError> {
        self.addresses
            .write()
            .await
            .insert(address.id, address.clone());
        Ok(())
    }

    async fn update(&self, address: &Address) -> Result<(), RepositoryError> {
        let mut addresses = self.addresses.write().await;
        if !addresses.contains_key(&address.id) {
            return Err(RepositoryError::NotFound);
        }
        addresses.insert(address.id, address.clone());
        Ok(())
    }

    async fn delete(&self, id: AddressId) -> Result<(), RepositoryError> {
        self.addresses.write().await.remove(&id);
        Ok(())
    }
}

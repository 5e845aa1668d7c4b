//! Service-level tests for address CRUD.
//!
//! These run against the in-memory repositories, so no database or
//! server is needed.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use consumers_api::commands::address::{CreateAddressCommand, UpdateAddressCommand};
use consumers_api::db::{
    AddressRepository, ConsumerRepository, InMemoryAddressRepository, InMemoryConsumerRepository,
    RepositoryError,
};
use consumers_api::services::{AddressService, ServiceError};
use consumers_core::{
    Address, AddressId, Consumer, ConsumerId, CountryCodeId, CurrencyId, LanguageId, TimeZoneId,
};

// ============================================================================
// Helpers
// ============================================================================

struct Fixture {
    service: AddressService,
    consumers: Arc<InMemoryConsumerRepository>,
    addresses: Arc<InMemoryAddressRepository>,
}

fn fixture() -> Fixture {
    let consumers = Arc::new(InMemoryConsumerRepository::new());
    let addresses = Arc::new(InMemoryAddressRepository::new());
    Fixture {
        service: AddressService::new(addresses.clone(), consumers.clone()),
        consumers,
        addresses,
    }
}

async fn seed_consumer(repo: &InMemoryConsumerRepository, email: &str) -> ConsumerId {
    let suffix = repo.get_all().await.unwrap().len();
    let consumer = Consumer::new(
        "Address Owner",
        &format!("DOC-{email}"),
        None,
        &format!("+1555100{suffix:04}"),
        email,
        CurrencyId::new(),
        CountryCodeId::new(),
        LanguageId::new(),
        TimeZoneId::new(),
    )
    .unwrap();
    repo.add(&consumer).await.unwrap();
    consumer.id
}

fn create_command(consumer_id: ConsumerId) -> CreateAddressCommand {
    CreateAddressCommand {
        consumer_id: Some(consumer_id),
        street_address: "Rua Augusta 100".to_owned(),
        city: "Lisbon".to_owned(),
        state: "Lisboa".to_owned(),
        postal_code: "1100-053".to_owned(),
        latitude: Some(38.7101),
        longitude: Some(-9.1365),
        is_default: false,
        country_id: Some(CountryCodeId::new()),
    }
}

/// Repository double whose every method panics. Handing it to a service
/// proves a code path performs no address-repository calls at all.
struct PanickingAddressRepository;

#[async_trait]
impl AddressRepository for PanickingAddressRepository {
    async fn get_by_id(&self, _id: AddressId) -> Result<Option<Address>, RepositoryError> {
        panic!("get_by_id must not be called")
    }

    async fn get_by_consumer_id(
        &self,
        _consumer_id: ConsumerId,
    ) -> Result<Vec<Address>, RepositoryError> {
        panic!("get_by_consumer_id must not be called")
    }

    async fn get_main_address_by_consumer_id(
        &self,
        _consumer_id: ConsumerId,
    ) -> Result<Option<Address>, RepositoryError> {
        panic!("get_main_address_by_consumer_id must not be called")
    }

    async fn add(&self, _address: &Address) -> Result<(), RepositoryError> {
        panic!("add must not be called")
    }

    async fn update(&self, _address: &Address) -> Result<(), RepositoryError> {
        panic!("update must not be called")
    }

    async fn delete(&self, _id: AddressId) -> Result<(), RepositoryError> {
        panic!("delete must not be called")
    }
}

/// Holds no rows and panics on any write.
struct EmptyReadOnlyAddressRepository;

#[async_trait]
impl AddressRepository for EmptyReadOnlyAddressRepository {
    async fn get_by_id(&self, _id: AddressId) -> Result<Option<Address>, RepositoryError> {
        Ok(None)
    }

    async fn get_by_consumer_id(
        &self,
        _consumer_id: ConsumerId,
    ) -> Result<Vec<Address>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn get_main_address_by_consumer_id(
        &self,
        _consumer_id: ConsumerId,
    ) -> Result<Option<Address>, RepositoryError> {
        Ok(None)
    }

    async fn add(&self, _address: &Address) -> Result<(), RepositoryError> {
        panic!("add must not be called")
    }

    async fn update(&self, _address: &Address) -> Result<(), RepositoryError> {
        panic!("update must not be called")
    }

    async fn delete(&self, _id: AddressId) -> Result<(), RepositoryError> {
        panic!("delete must not be called")
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test]
async fn test_full_address_lifecycle() {
    let f = fixture();
    let consumer_id = seed_consumer(&f.consumers, "life@example.com").await;

    // Create
    let created = f.service.create(&create_command(consumer_id)).await.unwrap();
    assert_eq!(created.consumer_id, consumer_id);
    assert_eq!(created.created_at, created.updated_at);

    // Read
    let fetched = f.service.get(created.id).await.unwrap();
    assert_eq!(fetched.street_address, "Rua Augusta 100");

    // List
    let listed = f.service.list_by_consumer(consumer_id).await.unwrap();
    assert_eq!(listed.len(), 1);

    // Update
    let cmd = UpdateAddressCommand {
        id: Some(created.id),
        street_address: "Rua Augusta 200".to_owned(),
        city: "Porto".to_owned(),
        state: "Porto".to_owned(),
        postal_code: "4000-001".to_owned(),
        latitude: None,
        longitude: None,
        is_default: true,
        country_id: Some(CountryCodeId::new()),
    };
    let updated = f.service.update(&cmd).await.unwrap();
    assert_eq!(updated.city, "Porto");
    assert!(updated.is_default);
    assert!(updated.latitude.is_none());
    assert_eq!(updated.created_at, created.created_at);

    // Delete
    f.service.delete(created.id).await.unwrap();

    let err = f.service.get(created.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::AddressNotFound(id) if id == created.id));
}

#[tokio::test]
async fn test_list_returns_only_owned_addresses_oldest_first() {
    let f = fixture();
    let mine = seed_consumer(&f.consumers, "mine@example.com").await;
    let theirs = seed_consumer(&f.consumers, "theirs@example.com").await;

    // Insert directly with spaced timestamps to pin the ordering
    let first = Address::new(
        mine,
        "1 First St",
        "Lisbon",
        "Lisboa",
        "1000-001",
        None,
        None,
        false,
        CountryCodeId::new(),
    );
    let mut second = first.clone();
    second.id = AddressId::new();
    second.street_address = "2 Second St".to_owned();
    second.created_at = first.created_at + Duration::seconds(10);

    let mut other = first.clone();
    other.id = AddressId::new();
    other.consumer_id = theirs;

    f.addresses.add(&second).await.unwrap();
    f.addresses.add(&first).await.unwrap();
    f.addresses.add(&other).await.unwrap();

    let listed = f.service.list_by_consumer(mine).await.unwrap();
    let streets: Vec<&str> = listed.iter().map(|a| a.street_address.as_str()).collect();

    assert_eq!(streets, vec!["1 First St", "2 Second St"]);
}

#[tokio::test]
async fn test_list_for_unknown_consumer_is_empty() {
    let f = fixture();

    let listed = f.service.list_by_consumer(ConsumerId::new()).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_update_never_moves_address_between_consumers() {
    let f = fixture();
    let owner = seed_consumer(&f.consumers, "owner@example.com").await;
    let _other = seed_consumer(&f.consumers, "other@example.com").await;

    let created = f.service.create(&create_command(owner)).await.unwrap();

    // The update command has no consumer field at all; the owner must survive
    let cmd = UpdateAddressCommand {
        id: Some(created.id),
        street_address: "Moved St".to_owned(),
        city: "Lisbon".to_owned(),
        state: "Lisboa".to_owned(),
        postal_code: "1000-002".to_owned(),
        latitude: None,
        longitude: None,
        is_default: false,
        country_id: Some(CountryCodeId::new()),
    };
    let updated = f.service.update(&cmd).await.unwrap();

    assert_eq!(updated.consumer_id, owner);
}

// ============================================================================
// Default Address
// ============================================================================

#[tokio::test]
async fn test_oldest_default_address_wins() {
    let f = fixture();
    let consumer_id = seed_consumer(&f.consumers, "default@example.com").await;
    let country_id = CountryCodeId::new();

    let plain = Address::new(
        consumer_id,
        "1 Plain St",
        "Lisbon",
        "Lisboa",
        "1000-001",
        None,
        None,
        false,
        country_id,
    );
    let mut older_default = plain.clone();
    older_default.id = AddressId::new();
    older_default.is_default = true;
    older_default.created_at = plain.created_at + Duration::seconds(5);
    let mut newer_default = plain.clone();
    newer_default.id = AddressId::new();
    newer_default.is_default = true;
    newer_default.created_at = plain.created_at + Duration::seconds(10);

    f.addresses.add(&newer_default).await.unwrap();
    f.addresses.add(&plain).await.unwrap();
    f.addresses.add(&older_default).await.unwrap();

    let main = f
        .addresses
        .get_main_address_by_consumer_id(consumer_id)
        .await
        .unwrap();

    assert_eq!(main.map(|a| a.id), Some(older_default.id));
}

#[tokio::test]
async fn test_no_default_address_yields_none() {
    let f = fixture();
    let consumer_id = seed_consumer(&f.consumers, "nodefault@example.com").await;

    f.service.create(&create_command(consumer_id)).await.unwrap();

    let main = f
        .addresses
        .get_main_address_by_consumer_id(consumer_id)
        .await
        .unwrap();

    assert!(main.is_none());
}

// ============================================================================
// Repository Call Discipline
// ============================================================================

#[tokio::test]
async fn test_create_for_unknown_consumer_never_touches_address_store() {
    let consumers = Arc::new(InMemoryConsumerRepository::new());
    let service = AddressService::new(Arc::new(PanickingAddressRepository), consumers);

    let err = service
        .create(&create_command(ConsumerId::new()))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::ConsumerNotFound(_)));
}

#[tokio::test]
async fn test_create_with_absent_consumer_id_reports_nil() {
    let consumers = Arc::new(InMemoryConsumerRepository::new());
    let service = AddressService::new(Arc::new(PanickingAddressRepository), consumers);

    let mut cmd = create_command(ConsumerId::new());
    cmd.consumer_id = None;

    let err = service.create(&cmd).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::ConsumerNotFound(id) if id.is_nil()
    ));
}

#[tokio::test]
async fn test_delete_of_absent_address_issues_no_delete() {
    let consumers = Arc::new(InMemoryConsumerRepository::new());
    let service = AddressService::new(Arc::new(EmptyReadOnlyAddressRepository), consumers);

    let err = service.delete(AddressId::new()).await.unwrap_err();
    assert!(matches!(err, ServiceError::AddressNotFound(_)));
}

#[tokio::test]
async fn test_update_of_absent_address_issues_no_write() {
    let consumers = Arc::new(InMemoryConsumerRepository::new());
    let service = AddressService::new(Arc::new(EmptyReadOnlyAddressRepository), consumers);

    let cmd = UpdateAddressCommand {
        id: Some(AddressId::new()),
        street_address: "Nowhere".to_owned(),
        city: "Lisbon".to_owned(),
        state: "Lisboa".to_owned(),
        postal_code: "1000-003".to_owned(),
        latitude: None,
        longitude: None,
        is_default: false,
        country_id: Some(CountryCodeId::new()),
    };

    let err = service.update(&cmd).await.unwrap_err();
    assert!(matches!(err, ServiceError::AddressNotFound(_)));
}

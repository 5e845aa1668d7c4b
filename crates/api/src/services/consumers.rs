//! Consumer command handling.

use std::sync::Arc;

use consumers_core::{
    Consumer, ConsumerId, CountryCodeId, CurrencyId, LanguageId, TimeZoneId, ValidationError,
};

use crate::commands::consumer::{ConsumerResponse, CreateConsumerCommand, UpdateConsumerCommand};
use crate::db::{ConsumerRepository, RepositoryError};

use super::ServiceError;

/// Handles consumer CRUD commands.
pub struct ConsumerService {
    consumers: Arc<dyn ConsumerRepository>,
}

impl ConsumerService {
    /// Create a service over the given repository.
    #[must_use]
    pub fn new(consumers: Arc<dyn ConsumerRepository>) -> Self {
        Self { consumers }
    }

    /// Create a consumer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCommand` with every field violation, or
    /// `UniqueViolation` when a unique field already holds the value.
    pub async fn create(
        &self,
        cmd: &CreateConsumerCommand,
    ) -> Result<ConsumerResponse, ServiceError> {
        cmd.validate().map_err(ServiceError::InvalidCommand)?;

        // validate() has rejected absent fields; the entity re-checks anyway
        let consumer = Consumer::new(
            cmd.name.as_deref().unwrap_or_default(),
            cmd.document_id.as_deref().unwrap_or_default(),
            cmd.photo_url.as_deref(),
            cmd.phone_number.as_deref().unwrap_or_default(),
            cmd.email.as_deref().unwrap_or_default(),
            cmd.currency_id.unwrap_or_else(CurrencyId::nil),
            cmd.phone_country_code_id.unwrap_or_else(CountryCodeId::nil),
            cmd.preferred_language_id.unwrap_or_else(LanguageId::nil),
            cmd.timezone_id.unwrap_or_else(TimeZoneId::nil),
        )?;

        self.consumers.add(&consumer).await.map_err(map_write_err)?;

        tracing::info!(consumer_id = %consumer.id, "consumer created");
        Ok(ConsumerResponse::from(&consumer))
    }

    /// Fetch a consumer by id.
    ///
    /// # Errors
    ///
    /// Rejects the nil id before any lookup; returns `ConsumerNotFound`
    /// when no row matches.
    pub async fn get(&self, id: ConsumerId) -> Result<ConsumerResponse, ServiceError> {
        if id.is_nil() {
            return Err(ServiceError::Validation(ValidationError::NilId {
                field: "id",
            }));
        }

        let consumer = self
            .consumers
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::ConsumerNotFound(id))?;

        Ok(ConsumerResponse::from(&consumer))
    }

    /// Update a consumer.
    ///
    /// The command is validated before the current row is fetched, so an
    /// invalid body is rejected even for an unknown id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCommand`, `ConsumerNotFound`, or `UniqueViolation`.
    pub async fn update(
        &self,
        id: ConsumerId,
        cmd: &UpdateConsumerCommand,
    ) -> Result<ConsumerResponse, ServiceError> {
        cmd.validate().map_err(ServiceError::InvalidCommand)?;

        if id.is_nil() {
            return Err(ServiceError::Validation(ValidationError::NilId {
                field: "id",
            }));
        }

        let mut consumer = self
            .consumers
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::ConsumerNotFound(id))?;

        consumer.update(
            cmd.name.as_deref().unwrap_or_default(),
            cmd.document_id.as_deref().unwrap_or_default(),
            cmd.photo_url.as_deref(),
            cmd.phone_number.as_deref().unwrap_or_default(),
            cmd.email.as_deref().unwrap_or_default(),
            cmd.currency_id.unwrap_or_else(CurrencyId::nil),
            cmd.phone_country_code_id.unwrap_or_else(CountryCodeId::nil),
            cmd.preferred_language_id.unwrap_or_else(LanguageId::nil),
            cmd.timezone_id.unwrap_or_else(TimeZoneId::nil),
        )?;

        self.consumers
            .update(&consumer)
            .await
            .map_err(|e| match e {
                // The row vanished between fetch and write
                RepositoryError::NotFound => ServiceError::ConsumerNotFound(id),
                other => map_write_err(other),
            })?;

        Ok(ConsumerResponse::from(&consumer))
    }

    /// Delete a consumer and, via cascade, its addresses.
    ///
    /// # Errors
    ///
    /// Returns `ConsumerNotFound` when no row matches; no delete is
    /// attempted in that case.
    pub async fn delete(&self, id: ConsumerId) -> Result<(), ServiceError> {
        if self.consumers.get_by_id(id).await?.is_none() {
            return Err(ServiceError::ConsumerNotFound(id));
        }

        self.consumers.delete(id).await?;

        tracing::info!(consumer_id = %id, "consumer deleted");
        Ok(())
    }
}

fn map_write_err(e: RepositoryError) -> ServiceError {
    match e {
        RepositoryError::UniqueViolation { field, value } => {
            ServiceError::UniqueViolation { field, value }
        }
        other => ServiceError::Repository(other),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use consumers_core::{CountryCodeId, CurrencyId, LanguageId, TimeZoneId};

    use crate::db::InMemoryConsumerRepository;

    use super::*;

    fn command(document_id: &str, phone: &str, email: &str) -> CreateConsumerCommand {
        CreateConsumerCommand {
            name: Some("Test Consumer".to_owned()),
            document_id: Some(document_id.to_owned()),
            photo_url: None,
            phone_number: Some(phone.to_owned()),
            email: Some(email.to_owned()),
            currency_id: Some(CurrencyId::new()),
            phone_country_code_id: Some(CountryCodeId::new()),
            preferred_language_id: Some(LanguageId::new()),
            timezone_id: Some(TimeZoneId::new()),
        }
    }

    fn update_command(cmd: &CreateConsumerCommand) -> UpdateConsumerCommand {
        UpdateConsumerCommand {
            name: cmd.name.clone(),
            document_id: cmd.document_id.clone(),
            photo_url: cmd.photo_url.clone(),
            phone_number: cmd.phone_number.clone(),
            email: cmd.email.clone(),
            currency_id: cmd.currency_id,
            phone_country_code_id: cmd.phone_country_code_id,
            preferred_language_id: cmd.preferred_language_id,
            timezone_id: cmd.timezone_id,
        }
    }

    fn service_with_repo() -> (ConsumerService, Arc<InMemoryConsumerRepository>) {
        let repo = Arc::new(InMemoryConsumerRepository::new());
        (ConsumerService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_create_persists_consumer() {
        let (service, repo) = service_with_repo();

        let response = service
            .create(&command("DOC-1", "+15551230001", "one@example.com"))
            .await
            .unwrap();

        assert_eq!(response.created_at, response.updated_at);
        let stored = repo.get_by_id(response.id).await.unwrap().unwrap();
        assert_eq!(stored.email.as_str(), "one@example.com");
    }

    #[tokio::test]
    async fn test_create_invalid_command_writes_nothing() {
        let (service, repo) = service_with_repo();

        let mut cmd = command("DOC-1", "+15551230001", "one@example.com");
        cmd.email = Some("broken".to_owned());
        cmd.name = None;

        let err = service.create(&cmd).await.unwrap_err();
        match err {
            ServiceError::InvalidCommand(violations) => assert_eq!(violations.len(), 2),
            other => panic!("expected InvalidCommand, got {other:?}"),
        }

        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_email_is_conflict() {
        let (service, _repo) = service_with_repo();

        service
            .create(&command("DOC-1", "+15551230001", "dup@example.com"))
            .await
            .unwrap();

        let err = service
            .create(&command("DOC-2", "+15551230002", "dup@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::UniqueViolation { field: "email", .. }
        ));
    }

    #[tokio::test]
    async fn test_get_nil_id_is_invalid() {
        let (service, _repo) = service_with_repo();

        let err = service.get(ConsumerId::nil()).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::NilId { field: "id" })
        ));
    }

    #[tokio::test]
    async fn test_get_unknown_id_not_found() {
        let (service, _repo) = service_with_repo();
        let id = ConsumerId::new();

        let err = service.get(id).await.unwrap_err();
        assert!(matches!(err, ServiceError::ConsumerNotFound(e) if e == id));
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let (service, _repo) = service_with_repo();

        // Unknown id and invalid body: validation wins
        let mut cmd = update_command(&command("DOC-1", "+15551230001", "one@example.com"));
        cmd.email = Some("broken".to_owned());

        let err = service.update(ConsumerId::new(), &cmd).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidCommand(_)));
    }

    #[tokio::test]
    async fn test_update_unknown_consumer_not_found() {
        let (service, _repo) = service_with_repo();
        let cmd = update_command(&command("DOC-1", "+15551230001", "one@example.com"));

        let err = service.update(ConsumerId::new(), &cmd).await.unwrap_err();
        assert!(matches!(err, ServiceError::ConsumerNotFound(_)));
    }

    #[tokio::test]
    async fn test_update_keeps_identity_and_creation_time() {
        let (service, _repo) = service_with_repo();

        let created = service
            .create(&command("DOC-1", "+15551230001", "one@example.com"))
            .await
            .unwrap();

        let mut cmd = update_command(&command("DOC-1", "+15551230001", "one@example.com"));
        cmd.name = Some("Renamed Consumer".to_owned());

        let updated = service.update(created.id, &cmd).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Renamed Consumer");
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_delete_unknown_consumer_not_found() {
        let (service, _repo) = service_with_repo();

        let err = service.delete(ConsumerId::new()).await.unwrap_err();
        assert!(matches!(err, ServiceError::ConsumerNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_consumer() {
        let (service, repo) = service_with_repo();

        let created = service
            .create(&command("DOC-1", "+15551230001", "one@example.com"))
            .await
            .unwrap();

        service.delete(created.id).await.unwrap();
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }
}

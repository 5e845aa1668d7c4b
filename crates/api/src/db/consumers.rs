//! `PostgreSQL` repository for consumers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use consumers_core::{
    Consumer, ConsumerId, CountryCodeId, CurrencyId, Email, LanguageId, PhoneNumber, TimeZoneId,
};

use super::{ConsumerRepository, RepositoryError};

/// Consumer repository backed by `PostgreSQL`.
pub struct PgConsumerRepository {
    pool: PgPool,
}

impl PgConsumerRepository {
    /// Create a new repository over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Row Mapping
// ============================================================================

/// Database row for a consumer.
#[derive(Debug, sqlx::FromRow)]
struct ConsumerRow {
    id: ConsumerId,
    name: String,
    document_id: String,
    photo_url: Option<String>,
    phone_number: String,
    email: String,
    currency_id: CurrencyId,
    phone_country_code_id: CountryCodeId,
    preferred_language_id: LanguageId,
    timezone_id: TimeZoneId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ConsumerRow> for Consumer {
    type Error = RepositoryError;

    fn try_from(row: ConsumerRow) -> Result<Self, Self::Error> {
        let phone_number = PhoneNumber::parse(&row.phone_number).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid phone number in database: {e}"))
        })?;

        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            document_id: row.document_id,
            photo_url: row.photo_url,
            phone_number,
            email,
            currency_id: row.currency_id,
            phone_country_code_id: row.phone_country_code_id,
            preferred_language_id: row.preferred_language_id,
            timezone_id: row.timezone_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

// ============================================================================
// Unique Violation Mapping
// ============================================================================

/// Map a unique-index constraint name onto the API field it guards.
fn unique_field(constraint: &str, consumer: &Consumer) -> Option<(&'static str, String)> {
    match constraint {
        "ix_tb_consumers_document_id" => Some(("documentId", consumer.document_id.clone())),
        "ix_tb_consumers_phone_number" => {
            Some(("phoneNumber", consumer.phone_number.as_str().to_owned()))
        }
        "ix_tb_consumers_email" => Some(("email", consumer.email.as_str().to_owned())),
        _ => None,
    }
}

fn map_unique_violation(e: sqlx::Error, consumer: &Consumer) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
        && let Some(constraint) = db_err.constraint()
        && let Some((field, value)) = unique_field(constraint, consumer)
    {
        return RepositoryError::UniqueViolation { field, value };
    }
    RepositoryError::Database(e)
}

// ============================================================================
// Repository Implementation
// ============================================================================

#[async_trait]
impl ConsumerRepository for PgConsumerRepository {
    async fn get_by_id(&self, id: ConsumerId) -> Result<Option<Consumer>, RepositoryError> {
        let row = sqlx::query_as::<_, ConsumerRow>(
            r"
            SELECT id, name, document_id, photo_url, phone_number, email,
                   currency_id, phone_country_code_id, preferred_language_id,
                   timezone_id, created_at, updated_at
            FROM shc_consumer.tb_consumers
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn get_all(&self) -> Result<Vec<Consumer>, RepositoryError> {
        let rows = sqlx::query_as::<_, ConsumerRow>(
            r"
            SELECT id, name, document_id, photo_url, phone_number, email,
                   currency_id, phone_country_code_id, preferred_language_id,
                   timezone_id, created_at, updated_at
            FROM shc_consumer.tb_consumers
            ORDER BY created_at
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn add(&self, consumer: &Consumer) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO shc_consumer.tb_consumers
                (id, name, document_id, photo_url, phone_number, email,
                 currency_id, phone_country_code_id, preferred_language_id,
                 timezone_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(consumer.id)
        .bind(&consumer.name)
        .bind(&consumer.document_id)
        .bind(consumer.photo_url.as_deref())
        .bind(consumer.phone_number.as_str())
        .bind(consumer.email.as_str())
        .bind(consumer.currency_id)
        .bind(consumer.phone_country_code_id)
        .bind(consumer.preferred_language_id)
        .bind(consumer.timezone_id)
        .bind(consumer.created_at)
        .bind(consumer.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, consumer))?;

        Ok(())
    }

    async fn update(&self, consumer: &Consumer) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE shc_consumer.tb_consumers
            SET name = $2,
                document_id = $3,
                photo_url = $4,
                phone_number = $5,
                email = $6,
                currency_id = $7,
                phone_country_code_id = $8,
                preferred_language_id = $9,
                timezone_id = $10,
                updated_at = $11
            WHERE id = $1
            ",
        )
        .bind(consumer.id)
        .bind(&consumer.name)
        .bind(&consumer.document_id)
        .bind(consumer.photo_url.as_deref())
        .bind(consumer.phone_number.as_str())
        .bind(consumer.email.as_str())
        .bind(consumer.currency_id)
        .bind(consumer.phone_country_code_id)
        .bind(consumer.preferred_language_id)
        .bind(consumer.timezone_id)
        .bind(consumer.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, consumer))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: ConsumerId) -> Result<(), RepositoryError> {
        // Addresses are removed by the ON DELETE CASCADE on consumer_id
        sqlx::query("DELETE FROM shc_consumer.tb_consumers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_consumer() -> Consumer {
        Consumer::new(
            "Ada Lovelace",
            "DOC-1815",
            None,
            "+5511987654321",
            "ada@example.com",
            CurrencyId::new(),
            CountryCodeId::new(),
            LanguageId::new(),
            TimeZoneId::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_unique_field_maps_known_constraints() {
        let consumer = test_consumer();

        assert_eq!(
            unique_field("ix_tb_consumers_document_id", &consumer),
            Some(("documentId", "DOC-1815".to_owned()))
        );
        assert_eq!(
            unique_field("ix_tb_consumers_phone_number", &consumer),
            Some(("phoneNumber", "+5511987654321".to_owned()))
        );
        assert_eq!(
            unique_field("ix_tb_consumers_email", &consumer),
            Some(("email", "ada@example.com".to_owned()))
        );
    }

    #[test]
    fn test_unique_field_ignores_unknown_constraints() {
        let consumer = test_consumer();
        assert_eq!(unique_field("pk_tb_consumers", &consumer), None);
    }

    #[test]
    fn test_map_unique_violation_passes_through_other_errors() {
        let consumer = test_consumer();
        let mapped = map_unique_violation(sqlx::Error::RowNotFound, &consumer);
        assert!(matches!(mapped, RepositoryError::Database(_)));
    }

    #[test]
    fn test_row_conversion_rejects_corrupt_phone() {
        let row = ConsumerRow {
            id: ConsumerId::new(),
            name: "Ada Lovelace".to_owned(),
            document_id: "DOC-1815".to_owned(),
            photo_url: None,
            phone_number: "not-a-phone".to_owned(),
            email: "ada@example.com".to_owned(),
            currency_id: CurrencyId::new(),
            phone_country_code_id: CountryCodeId::new(),
            preferred_language_id: LanguageId::new(),
            timezone_id: TimeZoneId::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let result = Consumer::try_from(row);
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }
}

//! Consumer commands and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use consumers_core::consumer::{DOCUMENT_ID_MAX, NAME_MAX, PHOTO_URL_MAX};
use consumers_core::{
    Consumer, ConsumerId, CountryCodeId, CurrencyId, Email, LanguageId, PhoneNumber, TimeZoneId,
    ValidationError,
    validation::{optional_text, required_text},
};

// ============================================================================
// Commands
// ============================================================================

/// Request payload for `POST /api/consumers`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsumerCommand {
    pub name: Option<String>,
    pub document_id: Option<String>,
    pub photo_url: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub currency_id: Option<CurrencyId>,
    pub phone_country_code_id: Option<CountryCodeId>,
    pub preferred_language_id: Option<LanguageId>,
    pub timezone_id: Option<TimeZoneId>,
}

impl CreateConsumerCommand {
    /// Check every field and report all violations at once.
    ///
    /// # Errors
    ///
    /// Returns the full list of field violations, in field order.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let violations = collect_violations(
            self.name.as_deref(),
            self.document_id.as_deref(),
            self.photo_url.as_deref(),
            self.phone_number.as_deref(),
            self.email.as_deref(),
            self.currency_id,
            self.phone_country_code_id,
            self.preferred_language_id,
            self.timezone_id,
        );

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Request payload for `PUT /api/consumers/{id}`.
///
/// The target id comes from the path, so the body carries the same
/// fields as a create.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConsumerCommand {
    pub name: Option<String>,
    pub document_id: Option<String>,
    pub photo_url: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub currency_id: Option<CurrencyId>,
    pub phone_country_code_id: Option<CountryCodeId>,
    pub preferred_language_id: Option<LanguageId>,
    pub timezone_id: Option<TimeZoneId>,
}

impl UpdateConsumerCommand {
    /// Check every field and report all violations at once.
    ///
    /// # Errors
    ///
    /// Returns the full list of field violations, in field order.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let violations = collect_violations(
            self.name.as_deref(),
            self.document_id.as_deref(),
            self.photo_url.as_deref(),
            self.phone_number.as_deref(),
            self.email.as_deref(),
            self.currency_id,
            self.phone_country_code_id,
            self.preferred_language_id,
            self.timezone_id,
        );

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn collect_violations(
    name: Option<&str>,
    document_id: Option<&str>,
    photo_url: Option<&str>,
    phone_number: Option<&str>,
    email: Option<&str>,
    currency_id: Option<CurrencyId>,
    phone_country_code_id: Option<CountryCodeId>,
    preferred_language_id: Option<LanguageId>,
    timezone_id: Option<TimeZoneId>,
) -> Vec<ValidationError> {
    let mut violations = Vec::new();

    match name {
        None => violations.push(ValidationError::Missing { field: "name" }),
        Some(value) => {
            if let Err(e) = required_text("name", value, NAME_MAX) {
                violations.push(e);
            }
        }
    }

    match document_id {
        None => violations.push(ValidationError::Missing { field: "documentId" }),
        Some(value) => {
            if let Err(e) = required_text("documentId", value, DOCUMENT_ID_MAX) {
                violations.push(e);
            }
        }
    }

    if let Err(e) = optional_text("photoUrl", photo_url, PHOTO_URL_MAX) {
        violations.push(e);
    }

    match phone_number {
        None => violations.push(ValidationError::Missing {
            field: "phoneNumber",
        }),
        Some(value) => {
            if let Err(e) = PhoneNumber::parse(value) {
                violations.push(ValidationError::from_phone("phoneNumber", &e));
            }
        }
    }

    match email {
        None => violations.push(ValidationError::Missing { field: "email" }),
        Some(value) => {
            if let Err(e) = Email::parse(value) {
                violations.push(ValidationError::from_email("email", &e));
            }
        }
    }

    if currency_id.is_none_or(|id| id.is_nil()) {
        violations.push(ValidationError::NilId {
            field: "currencyId",
        });
    }
    if phone_country_code_id.is_none_or(|id| id.is_nil()) {
        violations.push(ValidationError::NilId {
            field: "phoneCountryCodeId",
        });
    }
    if preferred_language_id.is_none_or(|id| id.is_nil()) {
        violations.push(ValidationError::NilId {
            field: "preferredLanguageId",
        });
    }
    if timezone_id.is_none_or(|id| id.is_nil()) {
        violations.push(ValidationError::NilId {
            field: "timezoneId",
        });
    }

    violations
}

// ============================================================================
// Responses
// ============================================================================

/// Response payload describing a consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerResponse {
    pub id: ConsumerId,
    pub name: String,
    pub document_id: String,
    pub photo_url: Option<String>,
    pub phone_number: PhoneNumber,
    pub email: Email,
    pub currency_id: CurrencyId,
    pub phone_country_code_id: CountryCodeId,
    pub preferred_language_id: LanguageId,
    pub timezone_id: TimeZoneId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Consumer> for ConsumerResponse {
    fn from(consumer: &Consumer) -> Self {
        Self {
            id: consumer.id,
            name: consumer.name.clone(),
            document_id: consumer.document_id.clone(),
            photo_url: consumer.photo_url.clone(),
            phone_number: consumer.phone_number.clone(),
            email: consumer.email.clone(),
            currency_id: consumer.currency_id,
            phone_country_code_id: consumer.phone_country_code_id,
            preferred_language_id: consumer.preferred_language_id,
            timezone_id: consumer.timezone_id,
            created_at: consumer.created_at,
            updated_at: consumer.updated_at,
        }
    }
}

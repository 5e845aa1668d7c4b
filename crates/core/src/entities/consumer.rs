//! The consumer entity.

use chrono::{DateTime, Utc};

use crate::types::{
    ConsumerId, CountryCodeId, CurrencyId, Email, LanguageId, PhoneNumber, TimeZoneId,
};
use crate::validation::{ValidationError, optional_text, required_text};

/// Maximum length of a consumer name.
pub const NAME_MAX: usize = 100;

/// Maximum length of a document id.
pub const DOCUMENT_ID_MAX: usize = 50;

/// Maximum length of a photo URL.
pub const PHOTO_URL_MAX: usize = 500;

/// A consumer: the primary customer record of the service.
///
/// Construction and update validate every field, failing fast on the first
/// violation in declaration order: name, document id, photo URL, phone
/// number, email, then the four lookup references.
#[derive(Debug, Clone, PartialEq)]
pub struct Consumer {
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

impl Consumer {
    /// Build a new consumer with a fresh id and `created_at == updated_at`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] in field order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        document_id: &str,
        photo_url: Option<&str>,
        phone_number: &str,
        email: &str,
        currency_id: CurrencyId,
        phone_country_code_id: CountryCodeId,
        preferred_language_id: LanguageId,
        timezone_id: TimeZoneId,
    ) -> Result<Self, ValidationError> {
        let fields = ConsumerFields::validate(
            name,
            document_id,
            photo_url,
            phone_number,
            email,
            currency_id,
            phone_country_code_id,
            preferred_language_id,
            timezone_id,
        )?;

        let now = Utc::now();
        Ok(Self {
            id: ConsumerId::new(),
            name: fields.name,
            document_id: fields.document_id,
            photo_url: fields.photo_url,
            phone_number: fields.phone_number,
            email: fields.email,
            currency_id: fields.currency_id,
            phone_country_code_id: fields.phone_country_code_id,
            preferred_language_id: fields.preferred_language_id,
            timezone_id: fields.timezone_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every mutable field, keeping `id` and `created_at`, and
    /// refresh `updated_at`.
    ///
    /// Nothing is mutated when validation fails.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] in field order.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        name: &str,
        document_id: &str,
        photo_url: Option<&str>,
        phone_number: &str,
        email: &str,
        currency_id: CurrencyId,
        phone_country_code_id: CountryCodeId,
        preferred_language_id: LanguageId,
        timezone_id: TimeZoneId,
    ) -> Result<(), ValidationError> {
        let fields = ConsumerFields::validate(
            name,
            document_id,
            photo_url,
            phone_number,
            email,
            currency_id,
            phone_country_code_id,
            preferred_language_id,
            timezone_id,
        )?;

        self.name = fields.name;
        self.document_id = fields.document_id;
        self.photo_url = fields.photo_url;
        self.phone_number = fields.phone_number;
        self.email = fields.email;
        self.currency_id = fields.currency_id;
        self.phone_country_code_id = fields.phone_country_code_id;
        self.preferred_language_id = fields.preferred_language_id;
        self.timezone_id = fields.timezone_id;
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Validated field set shared by [`Consumer::new`] and [`Consumer::update`].
struct ConsumerFields {
    name: String,
    document_id: String,
    photo_url: Option<String>,
    phone_number: PhoneNumber,
    email: Email,
    currency_id: CurrencyId,
    phone_country_code_id: CountryCodeId,
    preferred_language_id: LanguageId,
    timezone_id: TimeZoneId,
}

impl ConsumerFields {
    #[allow(clippy::too_many_arguments)]
    fn validate(
        name: &str,
        document_id: &str,
        photo_url: Option<&str>,
        phone_number: &str,
        email: &str,
        currency_id: CurrencyId,
        phone_country_code_id: CountryCodeId,
        preferred_language_id: LanguageId,
        timezone_id: TimeZoneId,
    ) -> Result<Self, ValidationError> {
        let name = required_text("name", name, NAME_MAX)?;
        let document_id = required_text("documentId", document_id, DOCUMENT_ID_MAX)?;
        let photo_url = optional_text("photoUrl", photo_url, PHOTO_URL_MAX)?;
        let phone_number = PhoneNumber::parse(phone_number)
            .map_err(|e| ValidationError::from_phone("phoneNumber", &e))?;
        let email = Email::parse(email).map_err(|e| ValidationError::from_email("email", &e))?;

        if currency_id.is_nil() {
            return Err(ValidationError::NilId {
                field: "currencyId",
            });
        }
        if phone_country_code_id.is_nil() {
            return Err(ValidationError::NilId {
                field: "phoneCountryCodeId",
            });
        }
        if preferred_language_id.is_nil() {
            return Err(ValidationError::NilId {
                field: "preferredLanguageId",
            });
        }
        if timezone_id.is_nil() {
            return Err(ValidationError::NilId {
                field: "timezoneId",
            });
        }

        Ok(Self {
            name,
            document_id,
            photo_url,
            phone_number,
            email,
            currency_id,
            phone_country_code_id,
            preferred_language_id,
            timezone_id,
        })
    }
}

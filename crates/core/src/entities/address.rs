//! The address entity.

use chrono::{DateTime, Utc};

use crate::types::{AddressId, ConsumerId, CountryCodeId};

/// A mailing address owned by exactly one consumer.
///
/// Addresses carry no field-level validation; length limits are enforced by
/// the storage layer. The owning consumer is fixed at creation and never
/// changes on update.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: AddressId,
    pub consumer_id: ConsumerId,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_default: bool,
    pub country_id: CountryCodeId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Address {
    /// Build a new address with a fresh id and `created_at == updated_at`.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        consumer_id: ConsumerId,
        street_address: &str,
        city: &str,
        state: &str,
        postal_code: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
        is_default: bool,
        country_id: CountryCodeId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: AddressId::new(),
            consumer_id,
            street_address: street_address.to_owned(),
            city: city.to_owned(),
            state: state.to_owned(),
            postal_code: postal_code.to_owned(),
            latitude,
            longitude,
            is_default,
            country_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field, keeping `id`, `consumer_id` and
    /// `created_at`, and refresh `updated_at`.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        street_address: &str,
        city: &str,
        state: &str,
        postal_code: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
        is_default: bool,
        country_id: CountryCodeId,
    ) {
        self.street_address = street_address.to_owned();
        self.city = city.to_owned();
        self.state = state.to_owned();
        self.postal_code = postal_code.to_owned();
        self.latitude = latitude;
        self.longitude = longitude;
        self.is_default = is_default;
        self.country_id = country_id;
        self.updated_at = Utc::now();
    }
}

//! Address commands and responses.
//!
//! Address fields carry no format rules, so these commands have no
//! validate step. Identifiers deserialize as `Option` and default to the
//! nil id, which the existence checks in the service then reject.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use consumers_core::{Address, AddressId, ConsumerId, CountryCodeId};

/// Request payload for `POST /api/addresses`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddressCommand {
    pub consumer_id: Option<ConsumerId>,
    #[serde(default)]
    pub street_address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub is_default: bool,
    pub country_id: Option<CountryCodeId>,
}

/// Request payload for `PUT /api/addresses`.
///
/// The target id travels in the body, not the path. The owning consumer
/// is never changed by an update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAddressCommand {
    pub id: Option<AddressId>,
    #[serde(default)]
    pub street_address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub is_default: bool,
    pub country_id: Option<CountryCodeId>,
}

/// Response payload describing an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
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

impl From<&Address> for AddressResponse {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id,
            consumer_id: address.consumer_id,
            street_address: address.street_address.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            postal_code: address.postal_code.clone(),
            latitude: address.latitude,
            longitude: address.longitude,
            is_default: address.is_default,
            country_id: address.country_id,
            created_at: address.created_at,
            updated_at: address.updated_at,
        }
    }
}

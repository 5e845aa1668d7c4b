//! Lookup records referenced by consumers and addresses.
//!
//! These are plain reference rows (no timestamps, no update rules); they are
//! seeded through the CLI and only ever read by the service.

use crate::types::{CountryCodeId, CurrencyId, LanguageId, TimeZoneId};

/// An ISO currency, e.g. `USD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub id: CurrencyId,
    pub code: String,
    pub description: String,
}

impl Currency {
    #[must_use]
    pub fn new(code: &str, description: &str) -> Self {
        Self {
            id: CurrencyId::new(),
            code: code.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// A language tag, e.g. `en-US`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub id: LanguageId,
    pub code: String,
    pub description: String,
}

impl Language {
    #[must_use]
    pub fn new(code: &str, description: &str) -> Self {
        Self {
            id: LanguageId::new(),
            code: code.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// An IANA time zone, e.g. `America/New_York`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeZone {
    pub id: TimeZoneId,
    pub name: String,
    pub description: String,
}

impl TimeZone {
    #[must_use]
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            id: TimeZoneId::new(),
            name: name.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// A dialing country code, e.g. `+1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCode {
    pub id: CountryCodeId,
    pub code: String,
    pub country_name: String,
}

impl CountryCode {
    #[must_use]
    pub fn new(code: &str, country_name: &str) -> Self {
        Self {
            id: CountryCodeId::new(),
            code: code.to_owned(),
            country_name: country_name.to_owned(),
        }
    }
}

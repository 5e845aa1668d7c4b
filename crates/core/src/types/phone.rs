//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty or whitespace-only.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("phone number must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character other than digits and a leading +.
    #[error("phone number may only contain digits and a leading +")]
    InvalidCharacter,
    /// The first digit is zero.
    #[error("phone number cannot start with zero")]
    LeadingZero,
    /// The digit count is outside the allowed range.
    #[error("phone number must have between {min} and {max} digits")]
    WrongDigitCount {
        /// Minimum digit count.
        min: usize,
        /// Maximum digit count.
        max: usize,
    },
}

/// An international phone number.
///
/// Accepts an optional leading `+` followed by 8 to 15 digits, the first of
/// which must not be zero. Accepted values are stored exactly as given, with
/// no reformatting.
///
/// ## Examples
///
/// ```
/// use consumers_core::PhoneNumber;
///
/// // Valid phone numbers
/// assert!(PhoneNumber::parse("+14155552671").is_ok());
/// assert!(PhoneNumber::parse("4915123456789").is_ok());
///
/// // Invalid phone numbers
/// assert!(PhoneNumber::parse("abc").is_err());        // not digits
/// assert!(PhoneNumber::parse("123").is_err());        // too few digits
/// assert!(PhoneNumber::parse("+01234567890").is_err()); // leading zero
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Maximum length of a phone number string (storage column width).
    pub const MAX_LENGTH: usize = 20;

    /// Minimum number of digits.
    pub const MIN_DIGITS: usize = 8;

    /// Maximum number of digits.
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `PhoneNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty or whitespace-only
    /// - Is longer than 20 characters
    /// - Contains anything besides digits and an optional leading +
    /// - Starts with a zero digit
    /// - Has fewer than 8 or more than 15 digits
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.trim().is_empty() {
            return Err(PhoneError::Empty);
        }

        // Length is checked before the shape, so an over-long string of
        // garbage still reports as too long.
        if s.chars().count() > Self::MAX_LENGTH {
            return Err(PhoneError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        let digits = s.strip_prefix('+').unwrap_or(s);

        if digits.chars().any(|c| !c.is_ascii_digit()) {
            return Err(PhoneError::InvalidCharacter);
        }

        if digits.starts_with('0') {
            return Err(PhoneError::LeadingZero);
        }

        let count = digits.chars().count();
        if count < Self::MIN_DIGITS || count > Self::MAX_DIGITS {
            return Err(PhoneError::WrongDigitCount {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `PhoneNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for PhoneNumber {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for PhoneNumber {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for PhoneNumber {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_numbers() {
        assert!(PhoneNumber::parse("+14155552671").is_ok());
        assert!(PhoneNumber::parse("14155552671").is_ok());
        assert!(PhoneNumber::parse("+4915123456789").is_ok());
        assert!(PhoneNumber::parse("12345678").is_ok()); // 8 digits, minimum
        assert!(PhoneNumber::parse("123456789012345").is_ok()); // 15 digits, maximum
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(PhoneNumber::parse(""), Err(PhoneError::Empty)));
        assert!(matches!(PhoneNumber::parse("  "), Err(PhoneError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        // 23 characters of digits: length fails before the digit count
        assert!(matches!(
            PhoneNumber::parse("12345678901234567890123"),
            Err(PhoneError::TooLong { max: 20 })
        ));
    }

    #[test]
    fn test_parse_invalid_characters() {
        assert!(matches!(
            PhoneNumber::parse("abc"),
            Err(PhoneError::InvalidCharacter)
        ));
        assert!(matches!(
            PhoneNumber::parse("+1 415 555 2671"),
            Err(PhoneError::InvalidCharacter)
        ));
        assert!(matches!(
            PhoneNumber::parse("1415-555-2671"),
            Err(PhoneError::InvalidCharacter)
        ));
        // + is only allowed in front
        assert!(matches!(
            PhoneNumber::parse("1415+5552671"),
            Err(PhoneError::InvalidCharacter)
        ));
    }

    #[test]
    fn test_parse_leading_zero() {
        assert!(matches!(
            PhoneNumber::parse("+01234567890"),
            Err(PhoneError::LeadingZero)
        ));
        assert!(matches!(
            PhoneNumber::parse("01234567890"),
            Err(PhoneError::LeadingZero)
        ));
    }

    #[test]
    fn test_parse_wrong_digit_count() {
        assert!(matches!(
            PhoneNumber::parse("123"),
            Err(PhoneError::WrongDigitCount { min: 8, max: 15 })
        ));
        assert!(matches!(
            PhoneNumber::parse("1234567"), // 7 digits
            Err(PhoneError::WrongDigitCount { .. })
        ));
        assert!(matches!(
            PhoneNumber::parse("1234567890123456"), // 16 digits
            Err(PhoneError::WrongDigitCount { .. })
        ));
    }

    #[test]
    fn test_no_reformatting() {
        let phone = PhoneNumber::parse("+14155552671").unwrap();
        assert_eq!(phone.as_str(), "+14155552671");
    }

    #[test]
    fn test_display() {
        let phone = PhoneNumber::parse("+14155552671").unwrap();
        assert_eq!(format!("{phone}"), "+14155552671");
    }

    #[test]
    fn test_serde_roundtrip() {
        let phone = PhoneNumber::parse("+14155552671").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+14155552671\"");

        let parsed: PhoneNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, phone);
    }

    #[test]
    fn test_from_str() {
        let phone: PhoneNumber = "+14155552671".parse().unwrap();
        assert_eq!(phone.as_str(), "+14155552671");
    }
}

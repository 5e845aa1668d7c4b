//! Field-level validation errors.
//!
//! Entities and command DTOs report violations with [`ValidationError`]. The
//! `field` carried by each variant is the API-facing (camelCase) field name,
//! so the value can go straight into an error response.

use crate::types::{EmailError, PhoneError};

/// A single field-level violation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was entirely absent from the request.
    #[error("{field} is required")]
    Missing {
        /// API-facing field name.
        field: &'static str,
    },
    /// A required field was present but empty or whitespace-only.
    #[error("{field} cannot be empty")]
    Empty {
        /// API-facing field name.
        field: &'static str,
    },
    /// A field exceeds its maximum length.
    #[error("{field} cannot exceed {max} characters")]
    TooLong {
        /// API-facing field name.
        field: &'static str,
        /// Maximum allowed length.
        max: usize,
    },
    /// A field fails its format rule.
    #[error("invalid {field} format")]
    Format {
        /// API-facing field name.
        field: &'static str,
    },
    /// A required identifier is the all-zeros UUID.
    #[error("{field} cannot be the nil id")]
    NilId {
        /// API-facing field name.
        field: &'static str,
    },
}

impl ValidationError {
    /// The API-facing name of the violating field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::Format { field }
            | Self::NilId { field } => field,
        }
    }

    /// True for [`ValidationError::Missing`], the absent-field case the API
    /// reports separately from value violations.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// Attach a field name to an [`EmailError`].
    #[must_use]
    pub const fn from_email(field: &'static str, err: &EmailError) -> Self {
        match err {
            EmailError::Empty => Self::Empty { field },
            EmailError::TooLong { max } => Self::TooLong { field, max: *max },
            _ => Self::Format { field },
        }
    }

    /// Attach a field name to a [`PhoneError`].
    #[must_use]
    pub const fn from_phone(field: &'static str, err: &PhoneError) -> Self {
        match err {
            PhoneError::Empty => Self::Empty { field },
            PhoneError::TooLong { max } => Self::TooLong { field, max: *max },
            _ => Self::Format { field },
        }
    }
}

/// Check a required text field: non-empty after trimming, at most `max`
/// characters. Returns the value untrimmed.
///
/// # Errors
///
/// Returns [`ValidationError::Empty`] or [`ValidationError::TooLong`].
pub fn required_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value.to_owned())
}

/// Check an optional text field: at most `max` characters when present.
/// Absent and empty values pass through unchanged.
///
/// # Errors
///
/// Returns [`ValidationError::TooLong`].
pub fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    match value {
        Some(v) if v.chars().count() > max => Err(ValidationError::TooLong { field, max }),
        Some(v) => Ok(Some(v.to_owned())),
        None => Ok(None),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_accepts_and_preserves() {
        let value = required_text("name", "  Jane Doe ", 100).unwrap();
        assert_eq!(value, "  Jane Doe ");
    }

    #[test]
    fn test_required_text_empty() {
        assert_eq!(
            required_text("name", "", 100),
            Err(ValidationError::Empty { field: "name" })
        );
        assert_eq!(
            required_text("name", "   ", 100),
            Err(ValidationError::Empty { field: "name" })
        );
    }

    #[test]
    fn test_required_text_too_long() {
        let long = "x".repeat(101);
        assert_eq!(
            required_text("name", &long, 100),
            Err(ValidationError::TooLong {
                field: "name",
                max: 100
            })
        );
    }

    #[test]
    fn test_required_text_counts_characters_not_bytes() {
        let value = "ü".repeat(100);
        assert!(required_text("name", &value, 100).is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text("photoUrl", None, 500), Ok(None));
        assert_eq!(
            optional_text("photoUrl", Some("https://example.com/p.png"), 500),
            Ok(Some("https://example.com/p.png".to_owned()))
        );

        let long = "x".repeat(501);
        assert_eq!(
            optional_text("photoUrl", Some(&long), 500),
            Err(ValidationError::TooLong {
                field: "photoUrl",
                max: 500
            })
        );
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(ValidationError::Missing { field: "email" }.field(), "email");
        assert_eq!(
            ValidationError::TooLong {
                field: "documentId",
                max: 50
            }
            .field(),
            "documentId"
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::Missing { field: "name" }.to_string(),
            "name is required"
        );
        assert_eq!(
            ValidationError::TooLong {
                field: "name",
                max: 100
            }
            .to_string(),
            "name cannot exceed 100 characters"
        );
        assert_eq!(
            ValidationError::Format {
                field: "phoneNumber"
            }
            .to_string(),
            "invalid phoneNumber format"
        );
        assert_eq!(
            ValidationError::NilId { field: "currencyId" }.to_string(),
            "currencyId cannot be the nil id"
        );
    }

    #[test]
    fn test_from_email() {
        use crate::types::EmailError;

        assert_eq!(
            ValidationError::from_email("email", &EmailError::Empty),
            ValidationError::Empty { field: "email" }
        );
        assert_eq!(
            ValidationError::from_email("email", &EmailError::TooLong { max: 255 }),
            ValidationError::TooLong {
                field: "email",
                max: 255
            }
        );
        assert_eq!(
            ValidationError::from_email("email", &EmailError::MissingAtSymbol),
            ValidationError::Format { field: "email" }
        );
    }

    #[test]
    fn test_from_phone() {
        use crate::types::PhoneError;

        assert_eq!(
            ValidationError::from_phone("phoneNumber", &PhoneError::Empty),
            ValidationError::Empty {
                field: "phoneNumber"
            }
        );
        assert_eq!(
            ValidationError::from_phone("phoneNumber", &PhoneError::LeadingZero),
            ValidationError::Format {
                field: "phoneNumber"
            }
        );
    }
}

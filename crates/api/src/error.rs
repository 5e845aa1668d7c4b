//! Unified error handling with Sentry integration.
//!
//! Route handlers return `Result<T, AppError>`. The `IntoResponse`
//! implementation maps service errors onto HTTP statuses and JSON
//! bodies, and reports server-side failures to Sentry.
//!
//! # Status Mapping
//!
//! | Error | Status |
//! |-------|--------|
//! | `InvalidCommand`, `Validation` | 400 |
//! | `ConsumerNotFound`, `AddressNotFound` | 404 |
//! | `UniqueViolation` | 409 |
//! | `Repository` | 500 |

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use thiserror::Error;

use consumers_core::ValidationError;

use crate::services::ServiceError;

/// Application-level error returned by every route handler.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct AppError(#[from] ServiceError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Client errors are expected traffic; only server-side failures
        // go to Sentry
        if matches!(self.0, ServiceError::Repository(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "internal error while handling request"
            );
        }

        let (status, body) = match &self.0 {
            ServiceError::InvalidCommand(violations) => {
                (StatusCode::BAD_REQUEST, violations_body(violations))
            }
            ServiceError::Validation(violation) => (
                StatusCode::BAD_REQUEST,
                violations_body(std::slice::from_ref(violation)),
            ),
            ServiceError::ConsumerNotFound(_) | ServiceError::AddressNotFound(_) => {
                (StatusCode::NOT_FOUND, json!({ "error": self.0.to_string() }))
            }
            ServiceError::UniqueViolation { field, value } => (
                StatusCode::CONFLICT,
                json!({
                    "error": self.0.to_string(),
                    "field": field,
                    "value": value,
                }),
            ),
            // Never expose internal details to clients
            ServiceError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "internal server error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Build the `{"errors": [{"field", "message"}]}` validation body.
fn violations_body(violations: &[ValidationError]) -> Value {
    let errors: Vec<Value> = violations
        .iter()
        .map(|v| json!({ "field": v.field(), "message": v.to_string() }))
        .collect();

    json!({ "errors": errors })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use consumers_core::{AddressId, ConsumerId};

    use crate::db::RepositoryError;

    use super::*;

    fn get_status(err: ServiceError) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn test_validation_errors_are_bad_request() {
        assert_eq!(
            get_status(ServiceError::InvalidCommand(vec![
                ValidationError::Missing { field: "name" },
            ])),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ServiceError::Validation(ValidationError::NilId {
                field: "id",
            })),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_missing_entities_are_not_found() {
        assert_eq!(
            get_status(ServiceError::ConsumerNotFound(ConsumerId::new())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(ServiceError::AddressNotFound(AddressId::new())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_unique_violation_is_conflict() {
        assert_eq!(
            get_status(ServiceError::UniqueViolation {
                field: "email",
                value: "dup@example.com".to_owned(),
            }),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_repository_errors_are_internal() {
        assert_eq!(
            get_status(ServiceError::Repository(RepositoryError::NotFound)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_violations_body_shape() {
        let body = violations_body(&[
            ValidationError::Missing { field: "name" },
            ValidationError::TooLong {
                field: "documentId",
                max: 50,
            },
        ]);

        let errors = body.get("errors").unwrap().as_array().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.first().unwrap().get("field").unwrap(),
            &json!("name")
        );
        assert_eq!(
            errors.first().unwrap().get("message").unwrap(),
            &json!("name is required")
        );
    }
}

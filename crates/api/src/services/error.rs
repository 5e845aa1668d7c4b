//! Service error types.

use thiserror::Error;

use consumers_core::{AddressId, ConsumerId, ValidationError};

use crate::db::RepositoryError;

/// Errors raised by the consumer and address services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A command failed field validation; every violation is collected
    #[error("command validation failed")]
    InvalidCommand(Vec<ValidationError>),

    /// A single violation raised outside command validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No consumer exists with this id
    #[error("consumer not found: {0}")]
    ConsumerNotFound(ConsumerId),

    /// No address exists with this id
    #[error("address not found: {0}")]
    AddressNotFound(AddressId),

    /// A unique field already holds this value
    #[error("{field} already exists")]
    UniqueViolation {
        /// Offending field in its API spelling
        field: &'static str,
        /// The value that collided
        value: String,
    },

    /// Repository failure not caused by the request
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

//! Request and response payloads for the API.
//!
//! Commands mirror the JSON bodies accepted by the route handlers.
//! Required scalar fields deserialize as `Option` so that an absent
//! field is reported as missing rather than rejected by serde.

pub mod address;
pub mod consumer;

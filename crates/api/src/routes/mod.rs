//! HTTP route handlers for the consumers API.
//!
//! # Route Structure
//!
//! ```text
//! /api/consumers
//!   POST    /                      - Create a consumer
//!   GET     /{id}                  - Fetch a consumer
//!   PUT     /{id}                  - Update a consumer
//!   DELETE  /{id}                  - Delete a consumer
//!
//! /api/addresses
//!   POST    /                      - Create an address
//!   PUT     /                      - Update an address (id in body)
//!   GET     /{id}                  - Fetch an address
//!   DELETE  /{id}                  - Delete an address
//!   GET     /consumer/{consumerId} - List a consumer's addresses
//! ```

pub mod addresses;
pub mod consumers;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Consumer CRUD routes.
pub fn consumer_routes() -> Router<AppState> {
    Router::new().route("/", post(consumers::create)).route(
        "/{id}",
        get(consumers::show)
            .put(consumers::update)
            .delete(consumers::remove),
    )
}

/// Address CRUD routes.
///
/// The update route takes its target id from the request body rather
/// than the path.
pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(addresses::create).put(addresses::update))
        .route("/{id}", get(addresses::show).delete(addresses::remove))
        .route("/consumer/{consumer_id}", get(addresses::list_by_consumer))
}

/// All API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/consumers", consumer_routes())
        .nest("/api/addresses", address_routes())
}

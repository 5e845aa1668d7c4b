//! Consumers API library.
//!
//! REST service for managing consumers and their addresses over
//! `PostgreSQL`. The binary in `main.rs` wires these modules into an
//! axum server; the CLI reuses the config, pool, and repositories.
//!
//! # Modules
//!
//! - [`commands`] - Request and response payloads
//! - [`config`] - Environment-driven configuration
//! - [`db`] - Repository traits and implementations
//! - [`error`] - HTTP error mapping
//! - [`routes`] - Route handlers
//! - [`services`] - Business logic
//! - [`state`] - Shared application state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;

//! Consumers Core - Domain types for the consumers service.
//!
//! This crate provides the types shared across the service components:
//! - `api` - REST API serving consumer and address CRUD
//! - `cli` - Command-line tools for migrations and lookup seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and phone numbers
//! - [`validation`] - Field-level validation errors shared by entities and commands
//! - [`entities`] - The `Consumer` and `Address` entities plus lookup records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod entities;
pub mod types;
pub mod validation;

pub use entities::*;
pub use types::*;
pub use validation::ValidationError;

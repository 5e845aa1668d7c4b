//! Integration tests for the consumers service.
//!
//! # Test Categories
//!
//! - `consumer_lifecycle` - Consumer CRUD through the service layer,
//!   running against the in-memory repositories (no database needed)
//! - `address_lifecycle` - Address CRUD through the service layer
//! - `api_live` - End-to-end HTTP tests against a running server
//!   (ignored by default)
//!
//! # Running Tests
//!
//! ```bash
//! # Service-level tests (no external dependencies)
//! cargo test -p consumers-integration-tests
//!
//! # Live API tests against a running server
//! cargo run -p consumers-cli -- migrate
//! cargo run -p consumers-api &
//! cargo test -p consumers-integration-tests -- --ignored
//! ```
//!
//! The live tests read `CONSUMERS_API_BASE_URL` (default
//! `http://localhost:8080`) and `CONSUMERS_DATABASE_URL`, which they use
//! to seed the lookup rows consumer bodies reference.

#![cfg_attr(not(test), forbid(unsafe_code))]

//! Domain entities.
//!
//! [`Consumer`] and [`Address`] carry the construction and update rules of
//! the service; the lookup records are plain foreign-key targets.

pub mod address;
pub mod consumer;
pub mod lookup;

pub use address::Address;
pub use consumer::Consumer;
pub use lookup::{CountryCode, Currency, Language, TimeZone};

//! CLI command implementations.

pub mod consumers;
pub mod migrate;
pub mod seed;

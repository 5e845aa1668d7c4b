//! Business logic services.
//!
//! Services orchestrate command validation, entity construction, and
//! repository access. Route handlers stay thin and delegate here.

pub mod addresses;
pub mod consumers;
pub mod error;

pub use addresses::AddressService;
pub use consumers::ConsumerService;
pub use error::ServiceError;

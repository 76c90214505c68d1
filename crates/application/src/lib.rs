//! Application layer - Use cases and orchestration
//!
//! Defines the ports the update routine talks to (zone lookup, update
//! routine contract) and the coordinator that caches the latest result for
//! subscribers.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, UpdateFailed};
pub use ports::*;
pub use services::*;

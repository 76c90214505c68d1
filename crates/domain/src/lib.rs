//! Domain layer for the Open-Meteo forecast poller
//!
//! Contains the zone entity, geographic value objects and domain errors.
//! This layer has no knowledge of HTTP, scheduling or the forecast API.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

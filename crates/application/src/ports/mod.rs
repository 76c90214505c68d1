//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod update_routine;
mod zone_port;

#[cfg(test)]
pub use update_routine::MockUpdateRoutine;
pub use update_routine::UpdateRoutine;
pub use zone_port::ZoneLookupPort;

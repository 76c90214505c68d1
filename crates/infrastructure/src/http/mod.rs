//! Shared HTTP session
//!
//! One `reqwest::Client` is built at startup and cloned into every
//! integration client. Clones share the same connection pool.

mod session;

pub use session::{HttpSessionConfig, build_session};

//! Update routine port
//!
//! The contract between a periodic coordinator and the routine that
//! produces fresh data for it.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::UpdateFailed;

/// A routine producing a fresh value on every invocation
///
/// Implementations hold no state between calls; the coordinator owns the
/// cached result.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UpdateRoutine<T: Send + Sync + 'static>: Send + Sync {
    /// Produce a fresh value, or report why this cycle failed
    async fn update(&self) -> Result<T, UpdateFailed>;
}

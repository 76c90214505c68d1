//! Application-level errors

use std::error::Error as StdError;

use thiserror::Error;

/// Boxed error kept as the cause of a failed update
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The first refresh of a coordinator failed, so it cannot serve data yet
    #[error("{name} is not ready: {source}")]
    NotReady {
        name: String,
        #[source]
        source: UpdateFailed,
    },
}

/// The single failure signal an update routine reports to its coordinator
///
/// Carries a human-readable message and, optionally, the error that caused
/// it. The cause stays reachable through [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct UpdateFailed {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl UpdateFailed {
    /// Failure without an underlying cause
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Failure wrapping the error that caused it
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The message, without the cause chain
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The direct cause, if it is of type `E`
    #[must_use]
    pub fn cause<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.as_deref().and_then(|e| e.downcast_ref::<E>())
    }
}

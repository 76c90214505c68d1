//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Invalid entity identifier
    #[error("Invalid entity id: {0}")]
    InvalidEntityId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = DomainError::ValidationError("zone.home: bad latitude".to_string());
        assert_eq!(err.to_string(), "Validation failed: zone.home: bad latitude");
    }

    #[test]
    fn invalid_entity_id_display() {
        let err = DomainError::InvalidEntityId("Home".to_string());
        assert!(err.to_string().contains("Home"));
    }
}

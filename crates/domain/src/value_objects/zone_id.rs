//! Zone entity identifier
//!
//! Zones are addressed the way the host addresses any entity:
//! `<domain>.<object_id>`, e.g. `zone.home`.
//!
//! # Examples
//!
//! ```
//! use domain::ZoneId;
//!
//! let id = ZoneId::parse("zone.home").unwrap();
//! assert_eq!(id.object_id(), "home");
//! assert!(ZoneId::parse("Zone Home").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Identifier of a zone entity in host state
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZoneId(String);

impl ZoneId {
    /// Parse and validate an entity id
    ///
    /// Both halves must be non-empty and consist of lowercase ASCII letters,
    /// digits and underscores.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEntityId` if the id is malformed.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();
        let Some((domain, object_id)) = s.split_once('.') else {
            return Err(DomainError::InvalidEntityId(s.to_string()));
        };

        if !is_slug(domain) || !is_slug(object_id) {
            return Err(DomainError::InvalidEntityId(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }

    /// Full entity id, e.g. `zone.home`
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after the dot
    #[must_use]
    pub fn object_id(&self) -> &str {
        self.0.split_once('.').map_or("", |(_, object_id)| object_id)
    }
}

fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ZoneId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ZoneId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ZoneId> for String {
    fn from(id: ZoneId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_ids() {
        assert!(ZoneId::parse("zone.home").is_ok());
        assert!(ZoneId::parse("zone.work_2").is_ok());
        assert!(ZoneId::parse("  zone.home  ").is_ok());
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(ZoneId::parse("home").is_err());
        assert!(ZoneId::parse("zone.").is_err());
        assert!(ZoneId::parse(".home").is_err());
        assert!(ZoneId::parse("Zone.Home").is_err());
        assert!(ZoneId::parse("zone.my home").is_err());
        assert!(ZoneId::parse("").is_err());
    }

    #[test]
    fn object_id_is_suffix() {
        let id = ZoneId::parse("zone.holiday_home").unwrap();
        assert_eq!(id.object_id(), "holiday_home");
        assert_eq!(id.as_str(), "zone.holiday_home");
    }

    #[test]
    fn serde_roundtrip_validates() {
        let id: ZoneId = serde_json::from_str("\"zone.home\"").unwrap();
        assert_eq!(id.to_string(), "zone.home");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"zone.home\"");

        let bad: Result<ZoneId, _> = serde_json::from_str("\"not an id\"");
        assert!(bad.is_err());
    }
}

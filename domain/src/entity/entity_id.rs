//! Structured-data entity identifier

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifier of a structured-data item, e.g. `Q7259` (Value Object)
///
/// Only item identifiers (`Q` followed by digits) are accepted; a lower-case
/// `q` prefix is normalised.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix('Q')
            .or_else(|| trimmed.strip_prefix('q'))
            .ok_or_else(|| DomainError::InvalidEntityId(raw.to_string()))?;

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidEntityId(raw.to_string()));
        }

        Ok(Self(format!("Q{}", digits)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityId::parse(s)
    }
}

impl TryFrom<String> for EntityId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        EntityId::parse(&s)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_id() {
        assert_eq!(EntityId::parse("Q7259").unwrap().as_str(), "Q7259");
    }

    #[test]
    fn test_parse_normalises_prefix() {
        assert_eq!(EntityId::parse(" q42 ").unwrap().as_str(), "Q42");
    }

    #[test]
    fn test_parse_rejects_other_entity_kinds() {
        assert!(EntityId::parse("P569").is_err());
        assert!(EntityId::parse("L123").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(EntityId::parse("").is_err());
        assert!(EntityId::parse("Q").is_err());
        assert!(EntityId::parse("Q12a").is_err());
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let id: EntityId = serde_json::from_str("\"Q7259\"").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"Q7259\"");
        assert!(serde_json::from_str::<EntityId>("\"X1\"").is_err());
    }
}

//! Claim statements as returned by `wbgetclaims`.

use super::property::PropertyId;
use crate::selection::{Ranked, TieBreak};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Statement rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Preferred,
    #[default]
    Normal,
    Deprecated,
}

/// Typed value carried by a snak
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataValue {
    #[serde(rename = "type", default)]
    pub value_type: String,
    #[serde(default)]
    pub value: Value,
}

/// The main assertion of a statement.
///
/// `snaktype` is `value`, `somevalue` (unknown) or `novalue`; only `value`
/// snaks carry a [`DataValue`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Snak {
    #[serde(default)]
    pub snaktype: Option<String>,
    #[serde(default)]
    pub property: Option<String>,
    #[serde(default)]
    pub datavalue: Option<DataValue>,
}

/// One statement recorded for a property
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClaimStatement {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub mainsnak: Snak,
    #[serde(default)]
    pub rank: Rank,
}

impl ClaimStatement {
    /// The point-in-time string of this statement, e.g. `+1815-12-10T00:00:00Z`
    pub fn time(&self) -> Option<&str> {
        self.mainsnak
            .datavalue
            .as_ref()
            .and_then(|dv| dv.value.get("time"))
            .and_then(Value::as_str)
    }
}

impl Ranked for ClaimStatement {
    fn rank(&self) -> Rank {
        self.rank
    }
}

/// All claims of one entity, keyed by property code
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EntityClaims {
    #[serde(default)]
    claims: HashMap<String, Vec<ClaimStatement>>,
}

impl EntityClaims {
    /// Decode a raw `wbgetclaims` response
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Whether the property key is present at all
    pub fn contains(&self, property: PropertyId) -> bool {
        self.claims.contains_key(property.as_str())
    }

    /// Statements for a property in delivered order
    pub fn statements(&self, property: PropertyId) -> &[ClaimStatement] {
        self.claims
            .get(property.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Pick one statement for a property
    pub fn select(&self, property: PropertyId, rule: TieBreak) -> Option<&ClaimStatement> {
        rule.pick(self.statements(property))
    }

    /// Time value of the selected statement, if it has one
    pub fn time_of(&self, property: PropertyId, rule: TieBreak) -> Option<&str> {
        self.select(property, rule).and_then(ClaimStatement::time)
    }

    /// Number of properties with at least one statement
    pub fn property_count(&self) -> usize {
        self.claims.values().filter(|s| !s.is_empty()).count()
    }
}

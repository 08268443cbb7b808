//! Person name value object

use super::error::DomainError;

/// Characters the encyclopedia does not allow in page titles.
///
/// `|` would also split the query into a multi-title batch.
const FORBIDDEN_CHARS: &[char] = &['|', '#', '<', '>', '[', ']', '{', '}'];

/// The name of the person to look up (Value Object)
///
/// Constructed per lookup and never retained. Surrounding whitespace is
/// trimmed; the encyclopedia matches titles, so inner spacing is kept as is.
/// A name must be a single valid page title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    value: String,
}

impl PersonName {
    /// Create a name, rejecting blank input and characters invalid in a title
    pub fn try_new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidName(
                "name cannot be empty".to_string(),
            ));
        }
        if let Some(c) = trimmed
            .chars()
            .find(|c| FORBIDDEN_CHARS.contains(c) || c.is_control())
        {
            return Err(DomainError::InvalidName(format!(
                "name cannot contain {:?}",
                c
            )));
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Get the name as sent to the search API
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<&str> for PersonName {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        PersonName::try_new(s)
    }
}

impl TryFrom<String> for PersonName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        PersonName::try_new(s)
    }
}

//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid entity identifier: {0}")]
    InvalidEntityId(String),

    #[error("Invalid time value '{raw}': {reason}")]
    InvalidTime { raw: String, reason: String },
}

impl DomainError {
    pub(crate) fn invalid_time(raw: &str, reason: impl Into<String>) -> Self {
        DomainError::InvalidTime {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error came from an unparseable time value
    pub fn is_invalid_time(&self) -> bool {
        matches!(self, DomainError::InvalidTime { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_display() {
        let error = DomainError::invalid_time("+1815-13-10T00:00:00Z", "month out of range");
        assert_eq!(
            error.to_string(),
            "Invalid time value '+1815-13-10T00:00:00Z': month out of range"
        );
    }

    #[test]
    fn test_is_invalid_time_check() {
        assert!(DomainError::invalid_time("x", "bad").is_invalid_time());
        assert!(!DomainError::InvalidName(String::new()).is_invalid_time());
        assert!(!DomainError::InvalidEntityId("P1".to_string()).is_invalid_time());
    }
}

//! Configuration issues reported by [`FileConfig::validate`](super::FileConfig::validate).

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default is used instead.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field holds a value outside its known set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A required string field is empty.
    EmptyValue { field: String },
    /// A numeric field is outside its accepted range.
    OutOfRange { field: String, value: i64 },
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub(crate) fn invalid_enum(field: &str, value: &str, valid: &[&str], fallback: &str) -> Self {
        Self {
            severity: Severity::Warning,
            code: ConfigIssueCode::InvalidEnumValue {
                field: field.to_string(),
                value: value.to_string(),
                valid_values: valid.iter().map(|v| v.to_string()).collect(),
            },
            message: format!(
                "{}: unknown value '{}', falling back to '{}'",
                field, value, fallback
            ),
        }
    }

    pub(crate) fn empty(field: &str) -> Self {
        Self {
            severity: Severity::Error,
            code: ConfigIssueCode::EmptyValue {
                field: field.to_string(),
            },
            message: format!("{}: must not be empty", field),
        }
    }

    pub(crate) fn out_of_range(field: &str, value: i64, fallback: &str) -> Self {
        Self {
            severity: Severity::Warning,
            code: ConfigIssueCode::OutOfRange {
                field: field.to_string(),
                value,
            },
            message: format!(
                "{}: value {} is out of range, falling back to {}",
                field, value, fallback
            ),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

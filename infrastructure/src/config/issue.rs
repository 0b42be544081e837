//! Structured configuration issues reported by
//! [`FileConfig::validate`](super::FileConfig::validate).

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the validator cannot start with this configuration.
    Error,
    /// Non-fatal: a fallback value is used instead.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A numeric field outside its allowed range.
    OutOfRange { field: String, value: String },
    /// A string field naming an unknown variant.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// Two entries share a key that must be unique.
    DuplicateEntry { field: String, value: String },
    /// A section the validator needs is empty.
    EmptySection { section: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn out_of_range(field: &str, value: impl ToString, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: ConfigIssueCode::OutOfRange {
                field: field.to_string(),
                value: value.to_string(),
            },
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

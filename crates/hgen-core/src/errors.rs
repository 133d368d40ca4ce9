//! Structured error types shared across hgen crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`HgenError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (paths, offending values, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for hypergraph generation and dataset output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum HgenError {
    /// A generator or plan parameter is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(ErrorInfo),
    /// Filesystem failures while reading or writing datasets.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// Malformed `.dat` files or plan documents.
    #[error("parse error: {0}")]
    Parse(ErrorInfo),
    /// Serialization errors for manifests and reports.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl HgenError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            HgenError::InvalidArgument(info)
            | HgenError::Io(info)
            | HgenError::Parse(info)
            | HgenError::Serde(info) => info,
        }
    }

    /// Wraps an I/O failure on `path` into an [`HgenError::Io`].
    pub fn io(code: &str, path: &std::path::Path, err: std::io::Error) -> Self {
        HgenError::Io(
            ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
        )
    }
}

/// Rejects probabilities outside `[0, 1]`, NaN included.
pub fn check_probability(p: f64) -> Result<(), HgenError> {
    if (0.0..=1.0).contains(&p) {
        return Ok(());
    }
    Err(HgenError::InvalidArgument(
        ErrorInfo::new("probability-out-of-range", "probability must lie in [0, 1]")
            .with_context("p", p.to_string()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_bounds_are_inclusive() {
        assert!(check_probability(0.0).is_ok());
        assert!(check_probability(1.0).is_ok());
        assert!(check_probability(-0.01).is_err());
        assert!(check_probability(1.5).is_err());
        assert!(check_probability(f64::NAN).is_err());
    }

    #[test]
    fn display_includes_context_and_hint() {
        let err = HgenError::InvalidArgument(
            ErrorInfo::new("bad", "nope")
                .with_context("p", "2")
                .with_hint("use a value in [0, 1]"),
        );
        let text = err.to_string();
        assert!(text.contains("code: bad"));
        assert!(text.contains("p=2"));
        assert!(text.contains("hint: use a value"));
    }
}

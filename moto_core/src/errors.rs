//! # Error Types
//!
//! Structured error types for moto_core. Calculations themselves never fail:
//! degenerate arithmetic is reported through [`Measure`](crate::measure::Measure)
//! sentinels. The only error path is turning untyped request data into a
//! typed input record, plus looking up a tool that does not exist.
//!
//! ## Example
//!
//! ```rust
//! use moto_core::errors::{CalcError, FieldIssue};
//!
//! let error = CalcError::invalid_input(vec![
//!     FieldIssue::missing("stopping_distance"),
//!     FieldIssue::malformed("mass_rider", "eighty", "expected a number"),
//! ]);
//! assert!(error.to_string().starts_with("Invalid or missing input:"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for moto_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// One problem found while reading a single input field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldIssue {
    /// Field name as it appears in the form / schema
    pub field: String,
    /// Raw submitted value, `None` when the field was absent
    pub value: Option<String>,
    /// Human-readable reason
    pub reason: String,
}

impl FieldIssue {
    /// The field was not submitted at all (or was blank)
    pub fn missing(field: impl Into<String>) -> Self {
        FieldIssue {
            field: field.into(),
            value: None,
            reason: "field is required".to_string(),
        }
    }

    /// The field was submitted but could not be coerced to its declared type
    pub fn malformed(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FieldIssue {
            field: field.into(),
            value: Some(value.into()),
            reason: reason.into(),
        }
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "'{}' = '{}' ({})", self.field, value, self.reason),
            None => write!(f, "'{}' ({})", self.field, self.reason),
        }
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Structured error type for moto_core.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// One or more input fields were missing or had the wrong type.
    /// Every bad field is reported at once.
    #[error("Invalid or missing input: {}", join_issues(.issues))]
    InvalidInput { issues: Vec<FieldIssue> },

    /// The requested tool identifier is not known
    #[error("Unknown tool: {tool}")]
    UnknownTool { tool: String },
}

impl CalcError {
    /// Create an InvalidInput error from the collected field issues
    pub fn invalid_input(issues: Vec<FieldIssue>) -> Self {
        CalcError::InvalidInput { issues }
    }

    /// Create an UnknownTool error
    pub fn unknown_tool(tool: impl Into<String>) -> Self {
        CalcError::UnknownTool { tool: tool.into() }
    }

    /// Field issues carried by this error (empty for non-input errors)
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            CalcError::InvalidInput { issues } => issues,
            CalcError::UnknownTool { .. } => &[],
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownTool { .. } => "UNKNOWN_TOOL",
        }
    }
}

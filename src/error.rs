//! Error types for the parameter-map converter.
//!
//! This module provides a unified error type [`ParamMapError`] that covers
//! all error conditions that can occur while reading the table, building the
//! component tree, and writing the parameter map.

use thiserror::Error;

/// Result type alias using [`ParamMapError`].
pub type Result<T> = std::result::Result<T, ParamMapError>;

/// Unified error type for all conversion operations.
#[derive(Error, Debug)]
pub enum ParamMapError {
    // ============ Table Errors ============
    /// Input contained no lines at all, not even a header
    #[error("Input is empty - expected a header line")]
    MissingHeader,

    /// Row has the wrong number of columns
    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Limit column is not a finite number
    #[error("Line {line}: invalid {column} value '{value}'")]
    InvalidLimit {
        line: usize,
        column: &'static str,
        value: String,
    },

    /// Parameter row appeared before any component was declared
    #[error("Line {line}: parameter row has no component to attach to")]
    OrphanParameter { line: usize },

    // ============ Tree Errors ============
    /// Component name declared more than once
    #[error("Line {line}: duplicate component name '{name}'")]
    DuplicateComponent { name: String, line: usize },

    // ============ I/O Errors ============
    /// Error reading the input table
    #[error("Failed to read input file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the parameter map
    #[error("Failed to write output file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error rendering the parameter map as JSON
    #[error("Failed to serialize parameter map: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ParamMapError {
    /// Create a field count error
    pub fn field_count(line: usize, expected: usize, found: usize) -> Self {
        Self::FieldCount {
            line,
            expected,
            found,
        }
    }

    /// Create an invalid limit error
    pub fn invalid_limit(line: usize, column: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidLimit {
            line,
            column,
            value: value.into(),
        }
    }

    /// Line number the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::FieldCount { line, .. }
            | Self::InvalidLimit { line, .. }
            | Self::OrphanParameter { line }
            | Self::DuplicateComponent { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_line() {
        let err = ParamMapError::field_count(4, 9, 7);
        assert_eq!(err.to_string(), "Line 4: expected 9 fields, found 7");
        assert_eq!(err.line(), Some(4));

        let err = ParamMapError::invalid_limit(2, "limit_min", "abc");
        assert_eq!(err.to_string(), "Line 2: invalid limit_min value 'abc'");
    }

    #[test]
    fn test_io_errors_have_no_line() {
        let err = ParamMapError::FileReadError {
            path: "missing.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.line(), None);
        assert!(err.to_string().contains("missing.csv"));
    }
}

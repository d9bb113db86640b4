//! Selection error types

use thiserror::Error;

/// Errors raised when building or lifting selections
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SelectionError {
    /// Line or column below 1
    #[error("Invalid coordinate: line {line}, column {column} (positions are 1-based)")]
    InvalidCoordinate { line: u32, column: u32 },

    /// Plain value is not an object
    #[error("Expected an object with selection fields")]
    NotAnObject,

    /// A required field is absent
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A field is present but not a number
    #[error("Field {0} is not a number")]
    NotANumber(&'static str),

    /// A field is a number but not an integer
    #[error("Field {field} is not an integer: {value}")]
    NotAnInteger { field: &'static str, value: f64 },

    /// An integer field does not fit a coordinate
    #[error("Field {field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
}

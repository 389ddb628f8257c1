//! # Error Types
//!
//! Structured error types for toolbox_core. Every failure a calculator can
//! produce is one of these variants, so front-ends can surface the message
//! verbatim or branch on [`CalcError::error_code`].
//!
//! ## Example
//!
//! ```rust
//! use toolbox_core::errors::{CalcError, CalcResult};
//!
//! fn check_pitch(pitch_mm: f64) -> CalcResult<()> {
//!     if pitch_mm == 0.0 {
//!         return Err(CalcError::division_by_zero("limpet_pitch"));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for toolbox_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
///
/// Validation errors (`MissingField`, `InvalidNumber`, `BelowMinimum`) come
/// out of the input validator; domain errors (`DivisionByZero`,
/// `InvalidGeometry`) come out of formula evaluation. None of these are
/// fatal - a failed attempt leaves session history untouched.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A required input field is absent or blank
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// An input could not be parsed as the declared numeric kind
    #[error("Invalid number for '{field}': '{value}' - {reason}")]
    InvalidNumber {
        field: String,
        value: String,
        reason: String,
    },

    /// An input is below its declared minimum
    #[error("Value for '{field}' is {value}, below the minimum of {minimum}")]
    BelowMinimum {
        field: String,
        value: f64,
        minimum: f64,
    },

    /// A formula divided by a zero-valued input
    #[error("Division by zero: '{field}' is zero")]
    DivisionByZero { field: String },

    /// A derived geometric or stress quantity left its physical domain
    #[error("Invalid geometry: {check} - {reason}")]
    InvalidGeometry { check: String, reason: String },

    /// A formula id was registered twice
    #[error("Duplicate formula id: {id}")]
    DuplicateFormula { id: String },

    /// No formula is registered under the requested id
    #[error("Formula not found: {id}")]
    FormulaNotFound { id: String },

    /// File I/O error (history persistence)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// CSV/JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an InvalidNumber error
    pub fn invalid_number(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidNumber {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a BelowMinimum error
    pub fn below_minimum(field: impl Into<String>, value: f64, minimum: f64) -> Self {
        CalcError::BelowMinimum {
            field: field.into(),
            value,
            minimum,
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(field: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            field: field.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(check: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            check: check.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors the user can fix by correcting form input and
    /// re-submitting.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::MissingField { .. }
                | CalcError::InvalidNumber { .. }
                | CalcError::BelowMinimum { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::InvalidNumber { .. } => "INVALID_NUMBER",
            CalcError::BelowMinimum { .. } => "BELOW_MINIMUM",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::DuplicateFormula { .. } => "DUPLICATE_FORMULA",
            CalcError::FormulaNotFound { .. } => "FORMULA_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

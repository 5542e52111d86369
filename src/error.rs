//! Error types for the rowscan crate.
//!
//! This module defines the error types of the shipped row sources:
//!
//! - [`AssignError`] - typed writes through a scan target
//! - [`MemorySourceError`] - in-memory row source errors
//! - [`CsvSourceError`] - CSV row source errors
//!
//! The scan orchestrator itself has no error type of its own: whatever the
//! underlying [`RowSource`](crate::source::RowSource) returns crosses
//! [`StructScanner::scan`](crate::scan::StructScanner::scan) untouched.
//! Error conversion between the types below is automatic via `From`
//! implementations, allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Target Assignment Errors
// =============================================================================

/// Errors when writing a value through a [`ScanTarget`](crate::record::ScanTarget).
#[derive(Debug, Error)]
pub enum AssignError {
    /// The target field does not have the offered type.
    #[error("target field is not of type {offered}")]
    TypeMismatch {
        /// Type name of the value that was offered.
        offered: &'static str,
    },

    /// No supported target type for this kind of value.
    #[error("no supported target type for {kind} value")]
    Unsupported { kind: &'static str },
}

// =============================================================================
// In-Memory Source Errors
// =============================================================================

/// Errors from [`MemoryRows`](crate::sources::memory::MemoryRows).
#[derive(Debug, Error)]
pub enum MemorySourceError {
    /// Scan was called without a current row.
    #[error("no current row: call advance() before scanning")]
    NoRow,

    /// More targets were requested than the row holds values.
    #[error("row holds {actual} values but {requested} targets were requested")]
    RowWidth { requested: usize, actual: usize },

    /// A value could not be written into its target field.
    #[error("cannot assign column '{column}': {source}")]
    Assign {
        column: String,
        #[source]
        source: AssignError,
    },
}

// =============================================================================
// CSV Source Errors
// =============================================================================

/// Errors from [`CsvRows`](crate::sources::csv::CsvRows).
#[derive(Debug, Error)]
pub enum CsvSourceError {
    /// Failed to read the input.
    #[error("failed to read CSV input: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not well-formed CSV.
    #[error("invalid CSV data: {0}")]
    Malformed(#[from] csv::Error),

    /// The input is empty.
    #[error("CSV input is empty")]
    EmptyInput,

    /// The header row yielded no column names.
    #[error("no headers found in CSV")]
    NoHeaders,

    /// Scan was called without a current row.
    #[error("no current row: call advance() before scanning")]
    NoRow,

    /// A cell could not be parsed into the target field's type.
    #[error("cannot parse column '{column}' (value '{value}'): {message}")]
    Parse {
        column: String,
        value: String,
        message: String,
    },

    /// A cell could not be written into its target field.
    #[error("cannot assign column '{column}': {source}")]
    Assign {
        column: String,
        #[source]
        source: AssignError,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for target assignment.
pub type AssignResult<T> = Result<T, AssignError>;

/// Result type for in-memory source operations.
pub type MemoryResult<T> = Result<T, MemorySourceError>;

/// Result type for CSV source operations.
pub type CsvResult<T> = Result<T, CsvSourceError>;

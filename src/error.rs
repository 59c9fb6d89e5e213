//! Error types for PayCompute.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the structural failures that stop a payroll run. Data-quality
//! problems are not errors; they are reported as check outcomes.

use thiserror::Error;

/// The main error type for PayCompute.
///
/// Every fallible operation in the crate returns this error type, so a front
/// end can surface a single descriptive message for any failure.
///
/// # Example
///
/// ```
/// use paycompute::error::PayrollError;
///
/// let error = PayrollError::MappingNotFound {
///     path: "Wage-Type-Mapping.xlsx".to_string(),
/// };
/// assert_eq!(error.to_string(), "Wage mapping file not found: Wage-Type-Mapping.xlsx");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Wage mapping file was not found.
    #[error("Wage mapping file not found: {path}")]
    MappingNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Wage mapping file could not be read as a table.
    #[error("Error loading wage mapping '{path}': {message}")]
    MappingParseError {
        /// The path to the mapping file.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Payroll spreadsheet was not found.
    #[error("Payroll file not found: {path}")]
    SpreadsheetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Payroll spreadsheet could not be parsed.
    #[error("Failed to read payroll file '{path}': {message}")]
    SpreadsheetParseError {
        /// The path to the spreadsheet.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The file extension is not a supported tabular format.
    #[error("Unsupported file format '{extension}' for '{path}'")]
    UnsupportedFormat {
        /// The path to the file.
        path: String,
        /// The offending extension (may be empty).
        extension: String,
    },

    /// The requested worksheet does not exist in the workbook.
    #[error("Sheet '{sheet}' not found in '{path}'")]
    SheetNotFound {
        /// The path to the workbook.
        path: String,
        /// The requested sheet name.
        sheet: String,
    },

    /// Month or year is outside the configured range.
    #[error("Invalid pay period {month}/{year}: {message}")]
    InvalidPeriod {
        /// The requested month.
        month: u32,
        /// The requested year.
        year: i32,
        /// Which bound was violated.
        message: String,
    },

    /// The payroll table failed the structure check, so extraction did not run.
    #[error("Payroll file structure is invalid: {}", .problems.join("; "))]
    InvalidStructure {
        /// The structure check errors.
        problems: Vec<String>,
    },

    /// No header cell in row 1 matched a wage mapping code.
    #[error("No deduction codes found in Row 1")]
    NoMappedColumns,

    /// Mapped columns exist but no positive amount was found.
    #[error("No deductions found")]
    NoDeductions,

    /// The upload CSV could not be written.
    #[error("Failed to generate upload CSV: {message}")]
    CsvExport {
        /// A description of the failure.
        message: String,
    },

    /// The audit log could not be written or read.
    #[error("Audit log error at '{path}': {message}")]
    AuditLog {
        /// The path to the audit log.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

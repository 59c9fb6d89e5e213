//! Processing logic for PayCompute.
//!
//! This module turns a raw payroll table into upload records: deduction
//! extraction, pay date rotation, the quality report, upload CSV generation,
//! and the [`PayrollProcessor`] that runs them together with the checks.

mod csv_export;
mod extract;
mod pipeline;
mod quality;
mod rotation;

pub use csv_export::{
    DISPLAY_COLUMNS, DISPLAY_HEADER, SYSTEM_COLUMNS, SYSTEM_HEADER, VALUE_COLUMN, format_amount,
    generate_csv,
};
pub use extract::{
    Extraction, SkipCounts, SkipReason, SkippedCell, UNKNOWN_EMPLOYEE_NAME, extract_deductions,
};
pub use pipeline::{PayrollOutcome, PayrollProcessor, PayrollRequest};
pub use quality::build_quality_report;
pub use rotation::rotate_pay_dates;

//! Core data models for PayCompute.
//!
//! This module contains all the domain models used throughout the crate.

mod check;
mod deduction;
mod pay_period;
mod report;
mod table;
mod wage_mapping;

pub use check::{CheckKind, CheckOutcome, Finding, Severity};
pub use deduction::{DeductionRecord, ExtractedDeduction, PAY_DATE_FORMAT};
pub use pay_period::{PayPeriod, days_in_month, is_leap_year};
pub use report::{AuditEntry, QualityReport};
pub use table::{Cell, DATA_START_ROW, ParsedAmount, RawTable};
pub use wage_mapping::{MappedColumn, PLACEHOLDER_LITERALS, WageMapping};

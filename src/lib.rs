//! PayCompute: payroll deductions to spot-bonus upload CSV.
//!
//! This crate reads a monthly payroll spreadsheet whose header row holds
//! wage codes, maps those codes to pay component names, extracts every
//! positive amount per employee, spreads repeated (employee, component)
//! pairs across distinct pay dates, and writes the upload CSV. A set of
//! data-quality checks runs alongside and decides whether the file is ready
//! to download; successful downloads are recorded in an audit log.

#![warn(missing_docs)]

pub mod audit;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod processing;
pub mod validation;

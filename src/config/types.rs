//! Configuration types for payroll processing.
//!
//! This module contains the strongly-typed [`Settings`] structure that is
//! deserialized from a YAML configuration file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::CheckKind;

/// Runtime settings for a payroll run.
///
/// Every field has a default, so a configuration file only needs to list the
/// values it changes.
///
/// # Example
///
/// ```
/// use paycompute::config::Settings;
/// use paycompute::models::CheckKind;
///
/// let settings = Settings::default();
/// assert_eq!(settings.currency, "AED");
/// assert!(settings.is_blocking(CheckKind::PreDownload));
/// assert!(!settings.is_blocking(CheckKind::WageCodes));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Currency code written into every data row.
    pub currency: String,
    /// Lowest accepted month.
    pub min_month: u32,
    /// Highest accepted month.
    pub max_month: u32,
    /// Lowest accepted year.
    pub min_year: i32,
    /// Highest accepted year.
    pub max_year: i32,
    /// Amounts above this value are reported as unusual.
    pub amount_warning_threshold: Decimal,
    /// Staff ids shorter than this (after trimming) are reported as too short.
    pub min_staff_id_length: usize,
    /// Location of the append-only audit log.
    pub audit_log_path: PathBuf,
    /// Default location of the wage mapping workbook.
    pub wage_mapping_path: PathBuf,
    /// Checks whose errors prevent the upload file from being released.
    pub blocking_checks: Vec<CheckKind>,
}

impl Settings {
    /// Returns true if errors from `check` block the download.
    pub fn is_blocking(&self, check: CheckKind) -> bool {
        self.blocking_checks.contains(&check)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "AED".to_string(),
            min_month: 1,
            max_month: 12,
            min_year: 2020,
            max_year: 2050,
            amount_warning_threshold: Decimal::new(10_000, 0),
            min_staff_id_length: 5,
            audit_log_path: PathBuf::from("download_audit.jsonl"),
            wage_mapping_path: PathBuf::from("Wage-Type-Mapping.xlsx"),
            blocking_checks: vec![
                CheckKind::Structure,
                CheckKind::StaffIds,
                CheckKind::AmountRange,
                CheckKind::PreDownload,
            ],
        }
    }
}

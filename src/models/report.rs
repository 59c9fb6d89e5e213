//! Run summary models: the quality report and the audit log entry.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregate figures over the final record list.
///
/// Computed once per run; used for display and for the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Number of records.
    pub total_records: usize,
    /// Number of distinct staff ids.
    pub unique_employees: usize,
    /// Number of distinct component names.
    pub unique_components: usize,
    /// Sum of all amounts.
    pub total_amount: Decimal,
    /// Mean amount.
    pub avg_amount: Decimal,
    /// Smallest amount.
    pub min_amount: Decimal,
    /// Largest amount.
    pub max_amount: Decimal,
}

/// One line of the download audit log.
///
/// # Example
///
/// ```
/// use paycompute::models::AuditEntry;
/// use chrono::Local;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let entry = AuditEntry {
///     run_id: Uuid::new_v4(),
///     timestamp: Local::now(),
///     sheet_name: "1".to_string(),
///     record_count: 3,
///     total_amount: Decimal::new(125050, 2),
///     filename: "1.csv".to_string(),
/// };
/// let json = serde_json::to_value(&entry).unwrap();
/// assert_eq!(json["total_amount"].as_f64(), Some(1250.5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// The run that produced the upload file.
    pub run_id: Uuid,
    /// When the entry was created (ISO-8601, local time).
    pub timestamp: DateTime<Local>,
    /// The output name chosen for the upload.
    pub sheet_name: String,
    /// Number of records in the upload.
    pub record_count: usize,
    /// Total amount, rounded to 2 decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    /// The upload file name.
    pub filename: String,
}

//! Data-quality check outcome models.
//!
//! Every validator returns a [`CheckOutcome`]. Its `findings` list is complete;
//! its `errors` and `warnings` lists are the capped display messages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifies one of the data-quality checks.
///
/// # Example
///
/// ```
/// use paycompute::models::CheckKind;
///
/// let kind: CheckKind = serde_json::from_str("\"pre_download\"").unwrap();
/// assert_eq!(kind, CheckKind::PreDownload);
/// assert_eq!(kind.title(), "Pre-Download Validation");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Minimum rows, header codes, staff id column.
    Structure,
    /// Blank and too-short staff ids.
    StaffIds,
    /// Header codes missing from the wage mapping.
    WageCodes,
    /// Negative and unusually high amounts.
    AmountRange,
    /// Blank cells in mapped columns.
    BlankCells,
    /// Component names that differ only by case.
    ComponentConsistency,
    /// Re-parse of the generated upload file.
    PreDownload,
}

impl CheckKind {
    /// Returns a human-readable title for the check.
    pub fn title(&self) -> &'static str {
        match self {
            CheckKind::Structure => "File Structure Validation",
            CheckKind::StaffIds => "Staff ID Validation",
            CheckKind::WageCodes => "Wage Code Validation",
            CheckKind::AmountRange => "Amount Range Validation",
            CheckKind::BlankCells => "Missing/Blank Cell Detection",
            CheckKind::ComponentConsistency => "Component Consistency",
            CheckKind::PreDownload => "Pre-Download Validation",
        }
    }
}

/// Whether a finding blocks the download or is advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks the download when the check is configured as blocking.
    Error,
    /// Shown but never blocking.
    Warning,
}

/// A single problem found by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Error or warning.
    pub severity: Severity,
    /// One-based spreadsheet row, when the finding is about a row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    /// The staff id on that row, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// Description of the problem.
    pub message: String,
}

impl Finding {
    /// Creates an error finding.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            row: None,
            employee_id: None,
            message: message.into(),
        }
    }

    /// Creates a warning finding.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            row: None,
            employee_id: None,
            message: message.into(),
        }
    }

    /// Attaches a one-based row number.
    pub fn at_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    /// Attaches a staff id.
    pub fn for_employee(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = Some(employee_id.into());
        self
    }
}

/// The result of running one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Which check produced this outcome.
    pub check: CheckKind,
    /// Every problem found, untruncated.
    pub findings: Vec<Finding>,
    /// Blocking messages for display (may be capped).
    pub errors: Vec<String>,
    /// Advisory messages for display (may be capped).
    pub warnings: Vec<String>,
    /// Named counters for front ends (e.g. `valid_ids`).
    pub metrics: BTreeMap<String, usize>,
}

impl CheckOutcome {
    /// Creates an empty (passing) outcome.
    pub fn new(check: CheckKind) -> Self {
        Self {
            check,
            findings: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            metrics: BTreeMap::new(),
        }
    }

    /// Records a counter.
    pub fn with_metric(mut self, name: &str, value: usize) -> Self {
        self.metrics.insert(name.to_string(), value);
        self
    }

    /// Returns a counter, or 0 if it was not recorded.
    pub fn metric(&self, name: &str) -> usize {
        self.metrics.get(name).copied().unwrap_or(0)
    }

    /// Returns true if the check produced no errors.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates findings of the given severity.
    pub fn findings_of(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&CheckKind::StaffIds).unwrap(),
            "\"staff_ids\""
        );
        assert_eq!(
            serde_json::to_string(&CheckKind::ComponentConsistency).unwrap(),
            "\"component_consistency\""
        );
    }

    #[test]
    fn test_outcome_passes_without_errors() {
        let mut outcome = CheckOutcome::new(CheckKind::WageCodes);
        outcome.warnings.push("advisory".to_string());
        assert!(outcome.passed());

        outcome.errors.push("blocking".to_string());
        assert!(!outcome.passed());
    }

    #[test]
    fn test_metrics_default_to_zero() {
        let outcome = CheckOutcome::new(CheckKind::StaffIds).with_metric("valid_ids", 4);
        assert_eq!(outcome.metric("valid_ids"), 4);
        assert_eq!(outcome.metric("blank_ids"), 0);
    }

    #[test]
    fn test_finding_builders() {
        let finding = Finding::warning("Blank cell").at_row(7).for_employee("E12345");
        assert_eq!(finding.severity, Severity::Warning);
        assert_eq!(finding.row, Some(7));
        assert_eq!(finding.employee_id.as_deref(), Some("E12345"));
    }

    #[test]
    fn test_findings_of_filters_by_severity() {
        let mut outcome = CheckOutcome::new(CheckKind::AmountRange);
        outcome.findings.push(Finding::error("negative"));
        outcome.findings.push(Finding::warning("high"));
        outcome.findings.push(Finding::warning("high"));

        assert_eq!(outcome.findings_of(Severity::Error).count(), 1);
        assert_eq!(outcome.findings_of(Severity::Warning).count(), 2);
    }
}

//! End-to-end payroll processing.
//!
//! [`PayrollProcessor::process`] runs the validators, extraction, date
//! rotation, CSV generation and pre-download check in a fixed order and
//! decides whether the result is ready to download.

use chrono::Local;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::audit::AuditLog;
use crate::config::Settings;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    AuditEntry, CheckKind, CheckOutcome, DeductionRecord, PayPeriod, QualityReport, RawTable,
    WageMapping,
};
use crate::validation::{
    check_amount_range, check_blank_cells, check_component_consistency, check_pre_download,
    check_staff_ids, check_structure, check_wage_codes,
};

use super::csv_export::generate_csv;
use super::extract::{SkipCounts, SkippedCell, extract_deductions};
use super::quality::build_quality_report;
use super::rotation::rotate_pay_dates;

/// Inputs for one payroll run.
#[derive(Debug, Clone, Copy)]
pub struct PayrollRequest<'a> {
    /// The payroll table.
    pub table: &'a RawTable,
    /// The wage code mapping.
    pub mapping: &'a WageMapping,
    /// The pay month.
    pub period: PayPeriod,
    /// Output name; the upload file is `<output_name>.csv`.
    pub output_name: &'a str,
}

/// Everything a front end needs after a run.
#[derive(Debug, Clone, Serialize)]
pub struct PayrollOutcome {
    /// Identifies the run in logs and in the audit entry.
    pub run_id: Uuid,
    /// Check outcomes in execution order.
    pub checks: Vec<CheckOutcome>,
    /// The dated records, in extraction order.
    pub records: Vec<DeductionRecord>,
    /// Mapped cells that did not produce a record.
    pub skipped_cells: Vec<SkippedCell>,
    /// One-based rows skipped for a blank staff id.
    pub skipped_rows: Vec<usize>,
    /// Summary figures over `records`.
    pub report: Option<QualityReport>,
    /// The upload CSV text.
    pub csv: String,
    /// The upload file name.
    pub filename: String,
    /// True when every blocking check passed.
    pub ready_to_download: bool,
    /// The audit entry, when one was written.
    pub audit_entry: Option<AuditEntry>,
}

impl PayrollOutcome {
    /// Returns the outcome of one check, if it ran.
    pub fn check(&self, kind: CheckKind) -> Option<&CheckOutcome> {
        self.checks.iter().find(|c| c.check == kind)
    }

    /// Total error count across all checks.
    pub fn error_count(&self) -> usize {
        self.checks.iter().map(|c| c.errors.len()).sum()
    }

    /// Total warning count across all checks.
    pub fn warning_count(&self) -> usize {
        self.checks.iter().map(|c| c.warnings.len()).sum()
    }

    /// Skipped mapped cells tallied by reason.
    pub fn skip_counts(&self) -> SkipCounts {
        SkipCounts::tally(&self.skipped_cells)
    }

    /// Sum of record amounts, rounded to 2 decimal places.
    pub fn total_amount(&self) -> Decimal {
        self.report
            .as_ref()
            .map(|r| r.total_amount)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Runs payroll requests against a fixed set of settings.
///
/// # Example
///
/// ```
/// use paycompute::config::Settings;
/// use paycompute::models::{PayPeriod, RawTable, WageMapping};
/// use paycompute::processing::{PayrollProcessor, PayrollRequest};
///
/// let table = RawTable::from_text_rows(vec![
///     vec!["ID", "NAME", "A1", "A2"],
///     vec!["", "", "", ""],
///     vec!["E12345", "Jane", "500", "0"],
/// ]);
/// let mapping = WageMapping::from_pairs([("A1", "Housing"), ("A2", "Transport")]);
/// let settings = Settings::default();
/// let period = PayPeriod::new(9, 2024, &settings).unwrap();
///
/// let processor = PayrollProcessor::new(settings);
/// let outcome = processor
///     .process(&PayrollRequest {
///         table: &table,
///         mapping: &mapping,
///         period,
///         output_name: "1",
///     })
///     .unwrap();
///
/// assert!(outcome.ready_to_download);
/// assert_eq!(outcome.filename, "1.csv");
/// assert_eq!(outcome.csv.lines().nth(2), Some("AED,30/09/2024,Housing,E12345,500.0,"));
/// ```
#[derive(Debug, Clone)]
pub struct PayrollProcessor {
    settings: Settings,
    audit_log: Option<AuditLog>,
}

impl PayrollProcessor {
    /// Creates a processor that does not write an audit log.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            audit_log: None,
        }
    }

    /// Records an audit entry for every run that is ready to download.
    pub fn with_audit_log(mut self, audit_log: AuditLog) -> Self {
        self.audit_log = Some(audit_log);
        self
    }

    /// The settings in use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Processes one request.
    ///
    /// Data-quality problems never fail the run; they are reported in
    /// [`PayrollOutcome::checks`] and gate [`PayrollOutcome::ready_to_download`].
    /// Audit log failures are logged and leave `audit_entry` empty.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::InvalidStructure`] if the structure check fails.
    /// - [`PayrollError::NoMappedColumns`] if no header code is mapped.
    /// - [`PayrollError::NoDeductions`] if no positive amount was found.
    /// - [`PayrollError::CsvExport`] if the CSV cannot be written.
    pub fn process(&self, request: &PayrollRequest<'_>) -> PayrollResult<PayrollOutcome> {
        let run_id = Uuid::new_v4();
        let table = request.table;
        let mapping = request.mapping;
        info!(
            run_id = %run_id,
            rows = table.row_count(),
            mapping_entries = mapping.len(),
            month = request.period.month(),
            year = request.period.year(),
            "Processing payroll"
        );

        let structure = check_structure(table);
        if !structure.passed() {
            warn!(
                run_id = %run_id,
                problems = structure.errors.len(),
                "Payroll table failed the structure check"
            );
            return Err(PayrollError::InvalidStructure {
                problems: structure.errors,
            });
        }

        let mut checks = vec![
            structure,
            check_staff_ids(table, self.settings.min_staff_id_length),
            check_wage_codes(table, mapping),
            check_amount_range(table, mapping, &self.settings),
        ];

        let extraction = extract_deductions(table, mapping)?;
        if extraction.records.is_empty() {
            warn!(run_id = %run_id, "No positive amounts in mapped columns");
            return Err(PayrollError::NoDeductions);
        }

        let records = rotate_pay_dates(extraction.records, &request.period);
        let report = build_quality_report(&records);

        checks.push(check_blank_cells(table, mapping));
        checks.push(check_component_consistency(&records));

        let csv = generate_csv(&records, &self.settings.currency)?;
        checks.push(check_pre_download(&csv));

        let ready_to_download = checks
            .iter()
            .filter(|c| self.settings.is_blocking(c.check))
            .all(CheckOutcome::passed);

        for check in checks.iter().filter(|c| !c.passed()) {
            warn!(
                run_id = %run_id,
                check = check.check.title(),
                errors = check.errors.len(),
                blocking = self.settings.is_blocking(check.check),
                "Check reported errors"
            );
        }

        let filename = format!("{}.csv", request.output_name);
        let total_amount = report
            .as_ref()
            .map(|r| r.total_amount)
            .unwrap_or(Decimal::ZERO);

        let audit_entry = match (&self.audit_log, ready_to_download) {
            (Some(log), true) => {
                let entry = AuditEntry {
                    run_id,
                    timestamp: Local::now(),
                    sheet_name: request.output_name.to_string(),
                    record_count: records.len(),
                    total_amount,
                    filename: filename.clone(),
                };
                match log.append(&entry) {
                    Ok(()) => Some(entry),
                    Err(e) => {
                        warn!(run_id = %run_id, error = %e, "Failed to write audit entry");
                        None
                    }
                }
            }
            _ => None,
        };

        info!(
            run_id = %run_id,
            records = records.len(),
            total_amount = %total_amount,
            skipped_cells = extraction.skipped.len(),
            ready_to_download,
            "Payroll run completed"
        );

        Ok(PayrollOutcome {
            run_id,
            checks,
            records,
            skipped_cells: extraction.skipped,
            skipped_rows: extraction.skipped_rows,
            report,
            csv,
            filename,
            ready_to_download,
            audit_entry,
        })
    }
}

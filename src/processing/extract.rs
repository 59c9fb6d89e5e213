//! Deduction extraction.
//!
//! This module walks every mapped column of the payroll table and turns each
//! strictly positive amount into an [`ExtractedDeduction`]. Cells that do not
//! produce a record are reported as [`SkippedCell`] values so callers can see
//! what was left out.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{ExtractedDeduction, ParsedAmount, RawTable, WageMapping};

/// Name used when column B is blank.
pub const UNKNOWN_EMPLOYEE_NAME: &str = "Unknown";

/// Why a mapped cell did not become a deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// Empty, whitespace, or a "nan" marker.
    Blank,
    /// Text that does not parse as a number.
    NonNumeric(String),
    /// A zero or negative amount.
    NonPositive(Decimal),
}

/// A mapped cell that was not extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCell {
    /// One-based spreadsheet row.
    pub row: usize,
    /// Zero-based column index.
    pub column: usize,
    /// The wage code of the column.
    pub code: String,
    /// Staff id of the row.
    pub employee_id: String,
    /// Why the cell was skipped.
    pub reason: SkipReason,
}

/// Skipped mapped cells tallied by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    /// Blank cells.
    pub blank: usize,
    /// Cells that are not numbers.
    pub non_numeric: usize,
    /// Zero or negative amounts.
    pub non_positive: usize,
}

impl SkipCounts {
    /// Counts each [`SkipReason`] in `skipped`.
    pub fn tally(skipped: &[SkippedCell]) -> Self {
        skipped.iter().fold(Self::default(), |mut counts, cell| {
            match cell.reason {
                SkipReason::Blank => counts.blank += 1,
                SkipReason::NonNumeric(_) => counts.non_numeric += 1,
                SkipReason::NonPositive(_) => counts.non_positive += 1,
            }
            counts
        })
    }

    /// All skipped cells.
    pub fn total(&self) -> usize {
        self.blank + self.non_numeric + self.non_positive
    }
}

/// The result of extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Deductions in row-major order: rows top to bottom, mapped columns
    /// left to right within a row.
    pub records: Vec<ExtractedDeduction>,
    /// Mapped cells that did not produce a record.
    pub skipped: Vec<SkippedCell>,
    /// One-based rows skipped because the staff id was blank.
    pub skipped_rows: Vec<usize>,
}

/// Extracts every positive amount in a mapped column from the data rows.
///
/// Rows with a blank staff id are skipped entirely. Blank names become
/// `"Unknown"`. Only amounts strictly greater than zero are kept.
///
/// # Errors
///
/// Returns [`PayrollError::NoMappedColumns`] when no header cell matches a
/// wage mapping code.
///
/// # Example
///
/// ```
/// use paycompute::models::{RawTable, WageMapping};
/// use paycompute::processing::extract_deductions;
/// use rust_decimal::Decimal;
///
/// let table = RawTable::from_text_rows(vec![
///     vec!["ID", "NAME", "A1", "A2"],
///     vec!["", "", "", ""],
///     vec!["E12345", "Jane", "500", "0"],
/// ]);
/// let mapping = WageMapping::from_pairs([("A1", "Housing"), ("A2", "Transport")]);
///
/// let extraction = extract_deductions(&table, &mapping).unwrap();
/// assert_eq!(extraction.records.len(), 1);
/// assert_eq!(extraction.records[0].component, "Housing");
/// assert_eq!(extraction.records[0].amount, Decimal::new(500, 0));
/// ```
pub fn extract_deductions(table: &RawTable, mapping: &WageMapping) -> PayrollResult<Extraction> {
    let columns = mapping.mapped_columns(table.header());
    if columns.is_empty() {
        return Err(PayrollError::NoMappedColumns);
    }

    let mut extraction = Extraction::default();

    for (idx, _) in table.data_rows() {
        let spreadsheet_row = idx + 1;
        let id_cell = table.cell(idx, 0);
        if id_cell.is_blank() {
            extraction.skipped_rows.push(spreadsheet_row);
            continue;
        }
        let employee_id = id_cell.as_text().trim().to_string();

        let name_cell = table.cell(idx, 1);
        let employee_name = if name_cell.is_blank() {
            UNKNOWN_EMPLOYEE_NAME.to_string()
        } else {
            name_cell.as_text().trim().to_string()
        };

        for column in &columns {
            let reason = match table.cell(idx, column.index).parse_amount() {
                ParsedAmount::Value(amount) if amount > Decimal::ZERO => {
                    extraction.records.push(ExtractedDeduction {
                        employee_id: employee_id.clone(),
                        employee_name: employee_name.clone(),
                        code: column.code.clone(),
                        component: column.component.clone(),
                        amount,
                        row: spreadsheet_row,
                    });
                    continue;
                }
                ParsedAmount::Value(amount) => SkipReason::NonPositive(amount),
                ParsedAmount::Blank => SkipReason::Blank,
                ParsedAmount::NonNumeric(text) => SkipReason::NonNumeric(text),
            };
            extraction.skipped.push(SkippedCell {
                row: spreadsheet_row,
                column: column.index,
                code: column.code.clone(),
                employee_id: employee_id.clone(),
                reason,
            });
        }
    }

    debug!(
        records = extraction.records.len(),
        skipped_cells = extraction.skipped.len(),
        skipped_rows = extraction.skipped_rows.len(),
        mapped_columns = columns.len(),
        "Extracted deductions"
    );

    Ok(extraction)
}

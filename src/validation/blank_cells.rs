//! Blank cell detection.

use crate::models::{CheckKind, CheckOutcome, Finding, RawTable, WageMapping};

use super::capped;

/// Blank cells listed before the rollup line.
pub const BLANK_CELLS_SHOWN: usize = 3;

/// Flags empty or NaN cells in mapped columns of data rows. Warnings only.
///
/// # Example
///
/// ```
/// use paycompute::models::{RawTable, WageMapping};
/// use paycompute::validation::check_blank_cells;
///
/// let table = RawTable::from_text_rows(vec![
///     vec!["ID", "NAME", "A1"],
///     vec!["", "", ""],
///     vec!["E12345", "Jane", ""],
/// ]);
/// let mapping = WageMapping::from_pairs([("A1", "Housing")]);
/// let outcome = check_blank_cells(&table, &mapping);
/// assert_eq!(outcome.warnings, vec!["Row 3, Emp E12345: Blank cell (A1)"]);
/// ```
pub fn check_blank_cells(table: &RawTable, mapping: &WageMapping) -> CheckOutcome {
    let mut blanks: Vec<Finding> = Vec::new();

    for column in mapping.mapped_columns(table.header()) {
        for (idx, _) in table.data_rows() {
            if !table.cell(idx, column.index).is_blank() {
                continue;
            }
            let row = idx + 1;
            let employee_id = table.cell(idx, 0).as_text().trim().to_string();
            blanks.push(
                Finding::warning(format!(
                    "Row {}, Emp {}: Blank cell ({})",
                    row, employee_id, column.code
                ))
                .at_row(row)
                .for_employee(employee_id),
            );
        }
    }

    let mut outcome =
        CheckOutcome::new(CheckKind::BlankCells).with_metric("blank_cells", blanks.len());
    let messages: Vec<String> = blanks.iter().map(|f| f.message.clone()).collect();
    outcome.warnings = capped(&messages, BLANK_CELLS_SHOWN, |n| {
        format!("... and {} more blank cells", n)
    });
    outcome.findings = blanks;
    outcome
}

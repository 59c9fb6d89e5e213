//! File structure check.

use crate::models::{CheckKind, CheckOutcome, Finding, RawTable};

/// Minimum number of rows: codes, reserved row, at least one data row.
pub const MIN_ROWS: usize = 3;

/// Checks that the table has the expected shape.
///
/// Fails when there are fewer than [`MIN_ROWS`] rows, when row 1 has fewer
/// than two non-blank cells, or when column A below the header is empty.
///
/// # Example
///
/// ```
/// use paycompute::models::RawTable;
/// use paycompute::validation::check_structure;
///
/// let table = RawTable::from_text_rows(vec![vec!["ID", "NAME", "A1"]]);
/// let outcome = check_structure(&table);
/// assert!(!outcome.passed());
/// ```
pub fn check_structure(table: &RawTable) -> CheckOutcome {
    let mut findings = Vec::new();

    if table.row_count() < MIN_ROWS {
        findings.push(Finding::error(
            "File has less than 3 rows. Need: Row 1 (codes), Row 2 (reserved), Row 3 onward (data)",
        ));
    }

    let header_cells = table.header().iter().filter(|c| !c.is_blank()).count();
    if header_cells < 2 {
        findings.push(Finding::error(
            "Row 1 appears empty. Should contain deduction codes",
        ));
    }

    let staff_ids = table
        .rows()
        .skip(1)
        .filter(|(idx, _)| !table.cell(*idx, 0).is_blank())
        .count();
    if staff_ids == 0 {
        findings.push(Finding::error("Column A (Staff IDs) appears empty"));
    }

    let mut outcome = CheckOutcome::new(CheckKind::Structure)
        .with_metric("rows", table.row_count())
        .with_metric("header_cells", header_cells);
    outcome.errors = findings.iter().map(|f| f.message.clone()).collect();
    outcome.findings = findings;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_table_passes() {
        let table = RawTable::from_text_rows(vec![
            vec!["ID", "NAME", "A1"],
            vec!["", "", ""],
            vec!["E12345", "Jane", "500"],
        ]);
        let outcome = check_structure(&table);
        assert!(outcome.passed(), "{:?}", outcome.errors);
        assert_eq!(outcome.metric("header_cells"), 3);
    }

    #[test]
    fn test_too_few_rows() {
        let table = RawTable::from_text_rows(vec![vec!["ID", "A1"], vec!["E12345", "1"]]);
        let outcome = check_structure(&table);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("less than 3 rows"));
    }

    #[test]
    fn test_sparse_header_row() {
        let table = RawTable::from_text_rows(vec![
            vec!["A1", "", "nan"],
            vec!["", "", ""],
            vec!["E12345", "Jane", "5"],
        ]);
        let outcome = check_structure(&table);
        assert_eq!(outcome.errors, vec!["Row 1 appears empty. Should contain deduction codes"]);
    }

    #[test]
    fn test_empty_staff_id_column() {
        let table = RawTable::from_text_rows(vec![
            vec!["ID", "NAME", "A1"],
            vec!["", "", ""],
            vec!["", "Jane", "5"],
        ]);
        let outcome = check_structure(&table);
        assert_eq!(outcome.errors, vec!["Column A (Staff IDs) appears empty"]);
    }

    #[test]
    fn test_reserved_row_id_counts_for_column_check() {
        let table = RawTable::from_text_rows(vec![
            vec!["ID", "NAME", "A1"],
            vec!["STAFF ID", "", ""],
            vec!["", "Jane", "5"],
        ]);
        assert!(check_structure(&table).passed());
    }

    #[test]
    fn test_empty_table_reports_all_problems() {
        let outcome = check_structure(&RawTable::default());
        assert_eq!(outcome.errors.len(), 3);
        assert_eq!(outcome.findings.len(), 3);
    }
}

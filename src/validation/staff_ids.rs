//! Staff id check.

use crate::models::{CheckKind, CheckOutcome, Finding, RawTable};

use super::capped;

/// Individual staff id problems shown before the rollup line.
pub const STAFF_ID_ISSUES_SHOWN: usize = 5;

/// Classifies the staff id of every data row as blank, too short, or valid.
///
/// An id is too short when its trimmed length is below `min_length`.
/// The check errors only when there are no data rows at all.
///
/// # Example
///
/// ```
/// use paycompute::models::RawTable;
/// use paycompute::validation::check_staff_ids;
///
/// let table = RawTable::from_text_rows(vec![
///     vec!["ID", "NAME", "A1"],
///     vec!["", "", ""],
///     vec!["E12345", "Jane", "1"],
///     vec!["E1", "Omar", "1"],
///     vec!["nan", "Lena", "1"],
/// ]);
/// let outcome = check_staff_ids(&table, 5);
/// assert_eq!(outcome.metric("valid_ids"), 1);
/// assert_eq!(outcome.metric("short_ids"), 1);
/// assert_eq!(outcome.metric("blank_ids"), 1);
/// ```
pub fn check_staff_ids(table: &RawTable, min_length: usize) -> CheckOutcome {
    let mut valid = 0usize;
    let mut blank = 0usize;
    let mut short = 0usize;
    let mut issues = Vec::new();

    for (idx, _) in table.data_rows() {
        let cell = table.cell(idx, 0);
        let display_row = idx + 1;

        if cell.is_blank() {
            blank += 1;
            issues.push(
                Finding::warning(format!("Row {}: Blank Staff ID", display_row))
                    .at_row(display_row),
            );
            continue;
        }

        let id = cell.as_text().trim().to_string();
        if id.chars().count() < min_length {
            short += 1;
            issues.push(
                Finding::warning(format!("Row {}: ID '{}' seems too short", display_row, id))
                    .at_row(display_row)
                    .for_employee(id),
            );
        } else {
            valid += 1;
        }
    }

    let mut outcome = CheckOutcome::new(CheckKind::StaffIds)
        .with_metric("valid_ids", valid)
        .with_metric("blank_ids", blank)
        .with_metric("short_ids", short);

    if valid + blank + short == 0 {
        let finding = Finding::error("No valid rows found after header");
        outcome.errors.push(finding.message.clone());
        outcome.findings.push(finding);
    } else if blank > 0 {
        outcome
            .warnings
            .push(format!("Found {} rows with blank Staff IDs", blank));
    }

    let issue_messages: Vec<String> = issues.iter().map(|f| f.message.clone()).collect();
    outcome.warnings.extend(capped(&issue_messages, STAFF_ID_ISSUES_SHOWN, |n| {
        format!("... and {} more Staff ID issues", n)
    }));
    outcome.findings.extend(issues);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_ids(ids: &[&str]) -> RawTable {
        let mut rows = vec![vec!["ID".to_string(), "NAME".to_string()], vec![String::new()]];
        rows.extend(ids.iter().map(|id| vec![id.to_string(), "Name".to_string()]));
        RawTable::from_text_rows(rows)
    }

    #[test]
    fn test_classification_examples() {
        let outcome = check_staff_ids(&table_with_ids(&["E1", "", "nan", "E12345"]), 5);

        assert!(outcome.passed());
        assert_eq!(outcome.metric("valid_ids"), 1);
        assert_eq!(outcome.metric("blank_ids"), 2);
        assert_eq!(outcome.metric("short_ids"), 1);
        assert_eq!(outcome.warnings[0], "Found 2 rows with blank Staff IDs");
        assert!(outcome.warnings.contains(&"Row 3: ID 'E1' seems too short".to_string()));
        assert!(outcome.warnings.contains(&"Row 4: Blank Staff ID".to_string()));
    }

    #[test]
    fn test_five_character_id_is_valid() {
        let outcome = check_staff_ids(&table_with_ids(&[" E1234 "]), 5);
        assert_eq!(outcome.metric("valid_ids"), 1);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_no_data_rows_is_error() {
        let outcome = check_staff_ids(&table_with_ids(&[]), 5);
        assert_eq!(outcome.errors, vec!["No valid rows found after header"]);
    }

    #[test]
    fn test_issue_messages_capped_but_findings_complete() {
        let ids = ["A", "B", "C", "D", "E", "F", "G"];
        let outcome = check_staff_ids(&table_with_ids(&ids), 5);

        assert_eq!(outcome.findings.len(), 7);
        assert_eq!(outcome.warnings.len(), 6);
        assert_eq!(outcome.warnings[5], "... and 2 more Staff ID issues");
    }

    #[test]
    fn test_numeric_id_reads_as_integer_text() {
        use crate::models::Cell;
        let table = RawTable::new(vec![
            vec![Cell::text("ID")],
            vec![Cell::Empty],
            vec![Cell::Number(123456.0)],
        ]);
        let outcome = check_staff_ids(&table, 5);
        assert_eq!(outcome.metric("valid_ids"), 1);
    }
}

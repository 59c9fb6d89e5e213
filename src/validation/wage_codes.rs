//! Wage code check.

use crate::models::{CheckKind, CheckOutcome, Finding, RawTable, WageMapping};

/// Header labels that are descriptive columns rather than wage codes.
pub const EXCLUDED_HEADER_LABELS: [&str; 6] = [
    "DEDUCTIONS",
    "STAFF ID",
    "ROW LABELS",
    "STORE",
    "DESIGNATION",
    "GRAND TOTAL",
];

/// Unmapped codes listed individually before switching to a summary.
pub const UNMAPPED_CODES_SHOWN: usize = 5;

/// Reports header codes that are neither mapped nor a known label.
///
/// # Example
///
/// ```
/// use paycompute::models::{RawTable, WageMapping};
/// use paycompute::validation::check_wage_codes;
///
/// let table = RawTable::from_text_rows(vec![vec!["STAFF ID", "A1", "X9"]]);
/// let mapping = WageMapping::from_pairs([("A1", "Housing")]);
/// let outcome = check_wage_codes(&table, &mapping);
///
/// assert_eq!(outcome.metric("mapped_codes"), 1);
/// assert_eq!(outcome.metric("unmapped_codes"), 1);
/// assert_eq!(outcome.warnings, vec!["Code 'X9' not in wage mapping (may be data column)"]);
/// ```
pub fn check_wage_codes(table: &RawTable, mapping: &WageMapping) -> CheckOutcome {
    let mut mapped = 0usize;
    let mut unmapped: Vec<(usize, String)> = Vec::new();

    for (index, cell) in table.header().iter().enumerate() {
        if cell.is_blank() {
            continue;
        }
        let code = cell.as_code();
        if mapping.contains(&code) {
            mapped += 1;
        } else if !EXCLUDED_HEADER_LABELS.contains(&code.as_str()) {
            unmapped.push((index, code));
        }
    }

    let mut outcome = CheckOutcome::new(CheckKind::WageCodes)
        .with_metric("mapped_codes", mapped)
        .with_metric("unmapped_codes", unmapped.len());

    if unmapped.len() <= UNMAPPED_CODES_SHOWN {
        outcome.warnings = unmapped
            .iter()
            .map(|(_, code)| format!("Code '{}' not in wage mapping (may be data column)", code))
            .collect();
    } else {
        outcome.warnings.push(format!(
            "Found {} unmapped codes (showing first {})",
            unmapped.len(),
            UNMAPPED_CODES_SHOWN
        ));
        outcome.warnings.extend(
            unmapped
                .iter()
                .take(UNMAPPED_CODES_SHOWN)
                .map(|(_, code)| format!("   - '{}'", code)),
        );
    }

    outcome.findings = unmapped
        .into_iter()
        .map(|(index, code)| {
            Finding::warning(format!(
                "Code '{}' in column {} not in wage mapping",
                code,
                index + 1
            ))
        })
        .collect();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> WageMapping {
        WageMapping::from_pairs([("A1", "Housing"), ("A2", "Transport")])
    }

    #[test]
    fn test_excluded_labels_and_blanks_ignored() {
        let table = RawTable::from_text_rows(vec![vec![
            "Staff ID", "Designation", "", "nan", "a1", "Grand Total",
        ]]);
        let outcome = check_wage_codes(&table, &mapping());

        assert_eq!(outcome.metric("mapped_codes"), 1);
        assert_eq!(outcome.metric("unmapped_codes"), 0);
        assert!(outcome.warnings.is_empty());
        assert!(outcome.passed());
    }

    #[test]
    fn test_five_unmapped_listed_individually() {
        let table = RawTable::from_text_rows(vec![vec!["U1", "U2", "U3", "U4", "U5"]]);
        let outcome = check_wage_codes(&table, &mapping());

        assert_eq!(outcome.warnings.len(), 5);
        assert_eq!(
            outcome.warnings[4],
            "Code 'U5' not in wage mapping (may be data column)"
        );
    }

    #[test]
    fn test_many_unmapped_summarised() {
        let table = RawTable::from_text_rows(vec![vec!["U1", "U2", "U3", "U4", "U5", "U6", "U7"]]);
        let outcome = check_wage_codes(&table, &mapping());

        assert_eq!(outcome.warnings.len(), 6);
        assert_eq!(outcome.warnings[0], "Found 7 unmapped codes (showing first 5)");
        assert_eq!(outcome.warnings[1], "   - 'U1'");
        assert_eq!(outcome.findings.len(), 7);
    }

    #[test]
    fn test_unmapped_never_errors() {
        let table = RawTable::from_text_rows(vec![vec!["ID", "NAME", "Q1"]]);
        assert!(check_wage_codes(&table, &mapping()).passed());
    }
}

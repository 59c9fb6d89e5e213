//! Amount range check.

use rust_decimal::Decimal;

use crate::config::Settings;
use crate::models::{CheckKind, CheckOutcome, Finding, ParsedAmount, RawTable, WageMapping};

use super::capped;

/// Negative amounts listed before the rollup line.
pub const AMOUNT_ERRORS_SHOWN: usize = 3;

/// High amounts listed before the rollup line.
pub const AMOUNT_WARNINGS_SHOWN: usize = 3;

/// Scans every mapped column for negative amounts (errors) and amounts above
/// the configured threshold (warnings).
///
/// Cells that are blank or not numeric are skipped; they are not errors here.
///
/// # Example
///
/// ```
/// use paycompute::config::Settings;
/// use paycompute::models::{RawTable, WageMapping};
/// use paycompute::validation::check_amount_range;
///
/// let table = RawTable::from_text_rows(vec![
///     vec!["ID", "NAME", "A1"],
///     vec!["", "", ""],
///     vec!["E12345", "Jane", "-20"],
///     vec!["E67890", "Omar", "15000"],
/// ]);
/// let mapping = WageMapping::from_pairs([("A1", "Housing")]);
/// let outcome = check_amount_range(&table, &mapping, &Settings::default());
///
/// assert_eq!(outcome.errors, vec!["Row 3, Emp E12345: Negative amount -20"]);
/// assert_eq!(outcome.warnings.len(), 1);
/// ```
pub fn check_amount_range(
    table: &RawTable,
    mapping: &WageMapping,
    settings: &Settings,
) -> CheckOutcome {
    let threshold = settings.amount_warning_threshold;
    let mut negatives: Vec<Finding> = Vec::new();
    let mut high: Vec<Finding> = Vec::new();

    for column in mapping.mapped_columns(table.header()) {
        for (idx, _) in table.data_rows() {
            let ParsedAmount::Value(amount) = table.cell(idx, column.index).parse_amount() else {
                continue;
            };
            let row = idx + 1;
            let employee_id = table.cell(idx, 0).as_text().trim().to_string();

            if amount < Decimal::ZERO {
                negatives.push(
                    Finding::error(format!(
                        "Row {}, Emp {}: Negative amount {}",
                        row, employee_id, amount
                    ))
                    .at_row(row)
                    .for_employee(employee_id),
                );
            } else if amount > threshold {
                high.push(
                    Finding::warning(format!(
                        "Row {}, Emp {}: High amount {:.2}",
                        row, employee_id, amount
                    ))
                    .at_row(row)
                    .for_employee(employee_id),
                );
            }
        }
    }

    let mut outcome = CheckOutcome::new(CheckKind::AmountRange)
        .with_metric("negative_amounts", negatives.len())
        .with_metric("high_amounts", high.len());

    let error_messages: Vec<String> = negatives.iter().map(|f| f.message.clone()).collect();
    outcome.errors = capped(&error_messages, AMOUNT_ERRORS_SHOWN, |n| {
        format!("... and {} more negative amounts", n)
    });

    let warning_messages: Vec<String> = high
        .iter()
        .map(|f| {
            format!(
                "Unusual: {} {} (> {})",
                f.message, settings.currency, threshold
            )
        })
        .collect();
    outcome.warnings = capped(&warning_messages, AMOUNT_WARNINGS_SHOWN, |n| {
        format!("... and {} more high amounts", n)
    });

    outcome.findings = negatives;
    outcome.findings.extend(high);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn table(amounts: &[&str]) -> RawTable {
        let mut rows = vec![
            vec!["ID".to_string(), "NAME".to_string(), "A1".to_string(), "NOTE".to_string()],
            vec![String::new()],
        ];
        for (i, amount) in amounts.iter().enumerate() {
            rows.push(vec![
                format!("E{:05}", i),
                "Name".to_string(),
                amount.to_string(),
                "-99".to_string(),
            ]);
        }
        RawTable::from_text_rows(rows)
    }

    fn mapping() -> WageMapping {
        WageMapping::from_pairs([("A1", "Housing")])
    }

    #[test]
    fn test_values_in_range_pass() {
        let outcome = check_amount_range(
            &table(&["0", "500", "10000"]),
            &mapping(),
            &Settings::default(),
        );
        assert!(outcome.passed());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_unmapped_columns_not_scanned() {
        // NOTE column holds -99 on every row but is not mapped.
        let outcome = check_amount_range(&table(&["1"]), &mapping(), &Settings::default());
        assert!(outcome.findings.is_empty());
    }

    #[test]
    fn test_non_numeric_cells_skipped() {
        let outcome = check_amount_range(
            &table(&["abc", "", "nan"]),
            &mapping(),
            &Settings::default(),
        );
        assert!(outcome.findings.is_empty());
    }

    #[test]
    fn test_negative_errors_capped_at_three() {
        let outcome = check_amount_range(
            &table(&["-1", "-2", "-3", "-4", "-5"]),
            &mapping(),
            &Settings::default(),
        );
        assert_eq!(outcome.errors.len(), 4);
        assert_eq!(outcome.errors[3], "... and 2 more negative amounts");
        assert_eq!(outcome.metric("negative_amounts"), 5);
        assert_eq!(outcome.findings.len(), 5);
    }

    #[test]
    fn test_high_amount_warning_text() {
        let outcome = check_amount_range(&table(&["12000.5"]), &mapping(), &Settings::default());
        assert_eq!(
            outcome.warnings,
            vec!["Unusual: Row 3, Emp E00000: High amount 12000.50 AED (> 10000)"]
        );
    }

    #[test]
    fn test_threshold_comes_from_settings() {
        let settings = Settings {
            amount_warning_threshold: dec("100"),
            ..Settings::default()
        };
        let outcome = check_amount_range(&table(&["150", "90"]), &mapping(), &settings);
        assert_eq!(outcome.metric("high_amounts"), 1);
    }
}

//! Component consistency check.

use std::collections::{HashMap, HashSet};

use crate::models::{CheckKind, CheckOutcome, DeductionRecord, Finding};

/// Warns once for every pair of component spellings that differ only by case.
///
/// # Example
///
/// ```
/// use paycompute::models::DeductionRecord;
/// use paycompute::validation::check_component_consistency;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = |component: &str| DeductionRecord {
///     employee_id: "E12345".to_string(),
///     employee_name: "Jane".to_string(),
///     code: "A1".to_string(),
///     component: component.to_string(),
///     amount: Decimal::ONE,
///     row: 2,
///     pay_date: NaiveDate::from_ymd_opt(2024, 9, 30).unwrap(),
/// };
/// let outcome = check_component_consistency(&[record("Housing"), record("HOUSING")]);
/// assert_eq!(
///     outcome.warnings,
///     vec!["Component case inconsistency: 'Housing' vs 'HOUSING'"]
/// );
/// ```
pub fn check_component_consistency(records: &[DeductionRecord]) -> CheckOutcome {
    let mut first_spelling: HashMap<String, &str> = HashMap::new();
    let mut reported: HashSet<(&str, &str)> = HashSet::new();
    let mut findings = Vec::new();

    for record in records {
        let component = record.component.as_str();
        let first = *first_spelling
            .entry(component.to_uppercase())
            .or_insert(component);

        if first != component && reported.insert((first, component)) {
            findings.push(Finding::warning(format!(
                "Component case inconsistency: '{}' vs '{}'",
                first, component
            )));
        }
    }

    let mut outcome = CheckOutcome::new(CheckKind::ComponentConsistency)
        .with_metric("inconsistent_pairs", findings.len());
    outcome.warnings = findings.iter().map(|f| f.message.clone()).collect();
    outcome.findings = findings;
    outcome
}

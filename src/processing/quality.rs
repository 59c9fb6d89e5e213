//! Quality report over the final record list.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::models::{DeductionRecord, QualityReport};

/// Summarizes the records: counts, total, mean, min and max.
///
/// Returns `None` for an empty list. The total and mean are rounded to
/// 2 decimal places.
pub fn build_quality_report(records: &[DeductionRecord]) -> Option<QualityReport> {
    let first = records.first()?;

    let mut employees = HashSet::new();
    let mut components = HashSet::new();
    let mut total = Decimal::ZERO;
    let mut min_amount = first.amount;
    let mut max_amount = first.amount;

    for record in records {
        employees.insert(record.employee_id.as_str());
        components.insert(record.component.as_str());
        total += record.amount;
        min_amount = min_amount.min(record.amount);
        max_amount = max_amount.max(record.amount);
    }

    let count = Decimal::from(records.len());
    Some(QualityReport {
        total_records: records.len(),
        unique_employees: employees.len(),
        unique_components: components.len(),
        total_amount: total.round_dp(2),
        avg_amount: (total / count).round_dp(2),
        min_amount,
        max_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn record(employee_id: &str, component: &str, amount: &str) -> DeductionRecord {
        DeductionRecord {
            employee_id: employee_id.to_string(),
            employee_name: "Jane".to_string(),
            code: "A1".to_string(),
            component: component.to_string(),
            amount: Decimal::from_str(amount).unwrap(),
            row: 3,
            pay_date: NaiveDate::from_ymd_opt(2024, 9, 30).unwrap(),
        }
    }

    #[test]
    fn test_empty_records_have_no_report() {
        assert!(build_quality_report(&[]).is_none());
    }

    #[test]
    fn test_report_figures() {
        let report = build_quality_report(&[
            record("E1", "Housing", "500"),
            record("E1", "Transport", "100.50"),
            record("E2", "Housing", "50"),
        ])
        .unwrap();

        assert_eq!(report.total_records, 3);
        assert_eq!(report.unique_employees, 2);
        assert_eq!(report.unique_components, 2);
        assert_eq!(report.total_amount, Decimal::from_str("650.50").unwrap());
        assert_eq!(report.avg_amount, Decimal::from_str("216.83").unwrap());
        assert_eq!(report.min_amount, Decimal::from(50));
        assert_eq!(report.max_amount, Decimal::from(500));
    }

    #[test]
    fn test_components_counted_case_sensitively() {
        let report = build_quality_report(&[
            record("E1", "Housing", "1"),
            record("E1", "HOUSING", "1"),
        ])
        .unwrap();
        assert_eq!(report.unique_components, 2);
    }
}

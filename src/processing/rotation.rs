//! Pay date rotation.
//!
//! The upload target rejects two rows with the same employee, component and
//! pay date. Each repeat of an `(employee_id, component)` pair is therefore
//! moved one day earlier, starting from the last day of the pay month.

use std::collections::HashMap;

use crate::models::{DeductionRecord, ExtractedDeduction, PayPeriod};

/// Assigns a pay date to every deduction, preserving input order.
///
/// The first occurrence of a pair gets the last day of the month, the second
/// the day before, and so on. Once day 1 is reached every further repeat
/// stays on day 1.
///
/// # Example
///
/// ```
/// use paycompute::config::Settings;
/// use paycompute::models::{ExtractedDeduction, PayPeriod};
/// use paycompute::processing::rotate_pay_dates;
/// use rust_decimal::Decimal;
///
/// let deduction = ExtractedDeduction {
///     employee_id: "E12345".to_string(),
///     employee_name: "Jane".to_string(),
///     code: "A1".to_string(),
///     component: "Housing".to_string(),
///     amount: Decimal::new(500, 0),
///     row: 3,
/// };
/// let period = PayPeriod::new(2, 2024, &Settings::default()).unwrap();
///
/// let records = rotate_pay_dates(vec![deduction.clone(), deduction], &period);
/// assert_eq!(records[0].pay_date_text(), "29/02/2024");
/// assert_eq!(records[1].pay_date_text(), "28/02/2024");
/// ```
pub fn rotate_pay_dates(
    deductions: Vec<ExtractedDeduction>,
    period: &PayPeriod,
) -> Vec<DeductionRecord> {
    let last_day = period.days_in_month();
    let mut seen: HashMap<(String, String), u32> = HashMap::new();

    deductions
        .into_iter()
        .map(|deduction| {
            let counter = seen
                .entry((deduction.employee_id.clone(), deduction.component.clone()))
                .or_insert(0);
            let day = last_day.saturating_sub(*counter).max(1);
            *counter += 1;
            let pay_date = period.date_for_day(day);
            deduction.with_pay_date(pay_date)
        })
        .collect()
}

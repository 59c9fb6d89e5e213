//! Deduction record models.
//!
//! Extraction produces [`ExtractedDeduction`] values without a pay date.
//! Date rotation turns each one into a [`DeductionRecord`] exactly once; the
//! dated record is never modified afterwards.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display format for pay dates.
pub const PAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// One (employee, component, amount) fact read from the payroll table.
///
/// `amount` is always strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDeduction {
    /// Staff id from column A, trimmed.
    pub employee_id: String,
    /// Employee name from column B, or "Unknown".
    pub employee_name: String,
    /// The uppercase wage code from the header row.
    pub code: String,
    /// The mapped pay component name.
    pub component: String,
    /// The deduction amount.
    pub amount: Decimal,
    /// One-based spreadsheet row the amount was read from.
    pub row: usize,
}

impl ExtractedDeduction {
    /// Attaches a pay date, producing the final record.
    pub fn with_pay_date(self, pay_date: NaiveDate) -> DeductionRecord {
        DeductionRecord {
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            code: self.code,
            component: self.component,
            amount: self.amount,
            row: self.row,
            pay_date,
        }
    }
}

/// A deduction with its synthetic pay date assigned.
///
/// # Example
///
/// ```
/// use paycompute::models::ExtractedDeduction;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = ExtractedDeduction {
///     employee_id: "E12345".to_string(),
///     employee_name: "Jane".to_string(),
///     code: "A1".to_string(),
///     component: "Housing".to_string(),
///     amount: Decimal::new(500, 0),
///     row: 3,
/// }
/// .with_pay_date(NaiveDate::from_ymd_opt(2024, 9, 30).unwrap());
///
/// assert_eq!(record.pay_date_text(), "30/09/2024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRecord {
    /// Staff id from column A, trimmed.
    pub employee_id: String,
    /// Employee name from column B, or "Unknown".
    pub employee_name: String,
    /// The uppercase wage code from the header row.
    pub code: String,
    /// The mapped pay component name.
    pub component: String,
    /// The deduction amount.
    pub amount: Decimal,
    /// One-based spreadsheet row the amount was read from.
    pub row: usize,
    /// The synthetic pay date.
    pub pay_date: NaiveDate,
}

impl DeductionRecord {
    /// Returns the pay date as `DD/MM/YYYY`.
    pub fn pay_date_text(&self) -> String {
        self.pay_date.format(PAY_DATE_FORMAT).to_string()
    }
}

//! Upload CSV generation.
//!
//! The upload format has two header rows, a system row and a display row,
//! followed by one line per deduction:
//!
//! ```text
//! currency-code,pay-date,pay-component-code,user-id,value,operation
//! Currency,Issue Date,Pay Component,User ID,Spot Bonus Amount,Operation
//! AED,30/09/2024,Housing,E12345,500.0,
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::DeductionRecord;

/// Machine column names, row 1 of the upload file.
pub const SYSTEM_COLUMNS: [&str; 6] = [
    "currency-code",
    "pay-date",
    "pay-component-code",
    "user-id",
    "value",
    "operation",
];

/// Human column names, row 2 of the upload file.
pub const DISPLAY_COLUMNS: [&str; 6] = [
    "Currency",
    "Issue Date",
    "Pay Component",
    "User ID",
    "Spot Bonus Amount",
    "Operation",
];

/// Row 1 of the upload file as text.
pub const SYSTEM_HEADER: &str = "currency-code,pay-date,pay-component-code,user-id,value,operation";

/// Row 2 of the upload file as text.
pub const DISPLAY_HEADER: &str =
    "Currency,Issue Date,Pay Component,User ID,Spot Bonus Amount,Operation";

/// Zero-based index of the amount field in a data row.
pub const VALUE_COLUMN: usize = 4;

/// Renders an amount rounded to 2 decimal places with at least one
/// fractional digit.
///
/// # Example
///
/// ```
/// use paycompute::processing::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(500, 0)), "500.0");
/// assert_eq!(format_amount(Decimal::new(1250, 2)), "12.5");
/// assert_eq!(format_amount(Decimal::new(123456, 4)), "12.35");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let text = amount.round_dp(2).normalize().to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Builds the upload CSV text for the given records.
///
/// Records with a non-positive amount are left out. Fields containing a
/// comma, quote or line break are quoted; all others are written as-is.
/// Lines end with `\n`.
///
/// # Errors
///
/// Returns [`PayrollError::CsvExport`] if the writer fails.
pub fn generate_csv(records: &[DeductionRecord], currency: &str) -> PayrollResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(SYSTEM_COLUMNS).map_err(export_error)?;
    writer.write_record(DISPLAY_COLUMNS).map_err(export_error)?;

    let mut written = 0usize;
    for record in records {
        if record.amount <= Decimal::ZERO {
            debug!(
                employee_id = %record.employee_id,
                component = %record.component,
                amount = %record.amount,
                "Dropping non-positive amount from upload"
            );
            continue;
        }
        let pay_date = record.pay_date_text();
        let amount = format_amount(record.amount);
        writer
            .write_record([
                currency,
                pay_date.as_str(),
                record.component.as_str(),
                record.employee_id.as_str(),
                amount.as_str(),
                "",
            ])
            .map_err(export_error)?;
        written += 1;
    }

    let bytes = writer.into_inner().map_err(|e| PayrollError::CsvExport {
        message: e.to_string(),
    })?;
    let text = String::from_utf8(bytes).map_err(|e| PayrollError::CsvExport {
        message: e.to_string(),
    })?;

    debug!(rows = written, bytes = text.len(), "Generated upload CSV");
    Ok(text)
}

fn export_error(error: csv::Error) -> PayrollError {
    PayrollError::CsvExport {
        message: error.to_string(),
    }
}

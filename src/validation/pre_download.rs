//! Pre-download validation of the generated upload file.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{CheckKind, CheckOutcome, Finding};
use crate::processing::{DISPLAY_HEADER, SYSTEM_HEADER, VALUE_COLUMN};

/// Re-reads generated CSV text and checks the two header rows, the minimum
/// length, and that no data row carries a zero value.
///
/// # Example
///
/// ```
/// use paycompute::validation::check_pre_download;
///
/// let csv = "currency-code,pay-date,pay-component-code,user-id,value,operation\n\
///            Currency,Issue Date,Pay Component,User ID,Spot Bonus Amount,Operation\n\
///            AED,30/09/2024,Housing,E12345,500.0,\n";
/// assert!(check_pre_download(csv).passed());
///
/// let zero = csv.replace("500.0", "0.0");
/// assert!(!check_pre_download(&zero).passed());
/// ```
pub fn check_pre_download(csv_text: &str) -> CheckOutcome {
    let content = csv_text.trim();
    let lines: Vec<&str> = content.split('\n').map(|l| l.trim_end_matches('\r')).collect();
    let mut findings = Vec::new();

    if lines.first().copied() != Some(SYSTEM_HEADER) {
        findings.push(Finding::error("Row 1: System headers incorrect").at_row(1));
    }
    if lines.get(1).copied() != Some(DISPLAY_HEADER) {
        findings.push(Finding::error("Row 2: Display headers incorrect").at_row(2));
    }

    let mut data_rows = 0usize;
    let mut zero_rows: Vec<Finding> = Vec::new();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    for result in reader.records().skip(2) {
        match result {
            Ok(record) => {
                if record.iter().all(|field| field.trim().is_empty()) {
                    continue;
                }
                data_rows += 1;
                let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
                let is_zero = record
                    .get(VALUE_COLUMN)
                    .map(str::trim)
                    .and_then(|v| {
                        Decimal::from_str(v)
                            .or_else(|_| Decimal::from_scientific(v))
                            .ok()
                    })
                    .is_some_and(|v| v.is_zero());
                if is_zero {
                    zero_rows.push(
                        Finding::error(format!("Row {}: zero amount", line)).at_row(line),
                    );
                }
            }
            Err(e) => {
                let line = e.position().map(|p| p.line() as usize).unwrap_or(0);
                findings.push(
                    Finding::error(format!("Row {}: unreadable CSV record: {}", line, e))
                        .at_row(line),
                );
            }
        }
    }

    if lines.len() < 3 {
        findings.push(Finding::error("CSV has less than 3 rows (need headers + data)"));
    }

    let mut outcome = CheckOutcome::new(CheckKind::PreDownload)
        .with_metric("data_rows", data_rows)
        .with_metric("zero_rows", zero_rows.len());

    outcome.errors = findings.iter().map(|f| f.message.clone()).collect();
    if !zero_rows.is_empty() {
        outcome.errors.push(format!(
            "Found {} records with 0 amount (should be filtered)",
            zero_rows.len()
        ));
    }
    outcome.findings = findings;
    outcome.findings.extend(zero_rows);
    outcome
}

//! File loaders for PayCompute.
//!
//! Payroll sheets and wage mappings are read from Excel-family workbooks
//! (through calamine) or CSV files into a positional [`RawTable`]. Nothing
//! is treated as a header at this stage.

mod reader;

use std::path::Path;

use tracing::info;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{RawTable, WageMapping};

pub use reader::{CSV_EXTENSION, WORKBOOK_EXTENSIONS};

use reader::{ReadError, read_table};

/// Loads a payroll sheet.
///
/// For workbooks, `sheet` selects a worksheet by name; the first worksheet
/// is used otherwise. `sheet` is ignored for CSV files.
///
/// # Errors
///
/// Returns [`PayrollError::SpreadsheetNotFound`],
/// [`PayrollError::UnsupportedFormat`], [`PayrollError::SheetNotFound`] or
/// [`PayrollError::SpreadsheetParseError`].
pub fn load_table<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> PayrollResult<RawTable> {
    let path = path.as_ref();
    let path_text = path.display().to_string();

    read_table(path, sheet).map_err(|e| match e {
        ReadError::NotFound => PayrollError::SpreadsheetNotFound { path: path_text },
        ReadError::Unsupported(extension) => PayrollError::UnsupportedFormat {
            path: path_text,
            extension,
        },
        ReadError::SheetNotFound(sheet) => PayrollError::SheetNotFound {
            path: path_text,
            sheet,
        },
        ReadError::Parse(message) => PayrollError::SpreadsheetParseError {
            path: path_text,
            message,
        },
    })
}

/// Loads a wage mapping from the first sheet of a workbook or a CSV file.
///
/// Column A holds the wage code and column B the component name.
///
/// # Errors
///
/// Returns [`PayrollError::MappingNotFound`] if the file is missing, and
/// [`PayrollError::MappingParseError`] for anything else.
///
/// # Example
///
/// ```no_run
/// use paycompute::ingest::load_wage_mapping;
///
/// let mapping = load_wage_mapping("Wage-Type-Mapping.xlsx").unwrap();
/// println!("{} wage codes", mapping.len());
/// ```
pub fn load_wage_mapping<P: AsRef<Path>>(path: P) -> PayrollResult<WageMapping> {
    let path = path.as_ref();
    let path_text = path.display().to_string();

    let table = read_table(path, None).map_err(|e| match e {
        ReadError::NotFound => PayrollError::MappingNotFound {
            path: path_text.clone(),
        },
        ReadError::Unsupported(extension) => PayrollError::MappingParseError {
            path: path_text.clone(),
            message: format!("unsupported file format '{}'", extension),
        },
        ReadError::SheetNotFound(sheet) => PayrollError::MappingParseError {
            path: path_text.clone(),
            message: format!("sheet '{}' not found", sheet),
        },
        ReadError::Parse(message) => PayrollError::MappingParseError {
            path: path_text.clone(),
            message,
        },
    })?;

    let mapping = WageMapping::from_table(&table);
    info!(path = %path_text, entries = mapping.len(), "Loaded wage mapping");
    Ok(mapping)
}

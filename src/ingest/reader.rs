//! Format dispatch and cell conversion for tabular files.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use tracing::debug;

use crate::models::{Cell, RawTable};

/// Extensions read through calamine.
pub const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Extension read through the csv reader.
pub const CSV_EXTENSION: &str = "csv";

/// Why a file could not be turned into a table. The public loaders map
/// this onto the error variants of the file's role.
#[derive(Debug)]
pub(crate) enum ReadError {
    NotFound,
    Unsupported(String),
    SheetNotFound(String),
    Parse(String),
}

pub(crate) fn read_table(path: &Path, sheet: Option<&str>) -> Result<RawTable, ReadError> {
    if !path.exists() {
        return Err(ReadError::NotFound);
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let table = if extension == CSV_EXTENSION {
        read_csv(path)?
    } else if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
        read_workbook(path, sheet)?
    } else {
        return Err(ReadError::Unsupported(extension));
    };

    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "Loaded table"
    );
    Ok(table)
}

fn read_csv(path: &Path) -> Result<RawTable, ReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| ReadError::Parse(e.to_string()))?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ReadError::Parse(e.to_string()))?;
        rows.push(record.iter().map(Cell::text).collect());
    }
    Ok(RawTable::new(rows))
}

fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<RawTable, ReadError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| ReadError::Parse(e.to_string()))?;

    let range = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|n| n == name) {
                return Err(ReadError::SheetNotFound(name.to_string()));
            }
            workbook
                .worksheet_range(name)
                .map_err(|e| ReadError::Parse(e.to_string()))?
        }
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ReadError::Parse("workbook has no worksheets".to_string()))?
            .map_err(|e| ReadError::Parse(e.to_string()))?,
    };

    Ok(range_to_table(&range))
}

/// Converts a calamine range to a table anchored at A1.
///
/// Calamine ranges start at the first used cell, so leading empty rows and
/// columns are padded back in to keep positional indexes stable.
pub(crate) fn range_to_table(range: &Range<Data>) -> RawTable {
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    let mut rows: Vec<Vec<Cell>> = (0..start_row).map(|_| Vec::new()).collect();
    for source in range.rows() {
        let mut cells = vec![Cell::Empty; start_col as usize];
        cells.extend(source.iter().map(convert_cell));
        rows.push(cells);
    }
    RawTable::new(rows)
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Date(
            dt.as_datetime()
                .map(|d| d.to_string())
                .unwrap_or_else(|| dt.as_f64().to_string()),
        ),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Date(s.clone()),
    }
}

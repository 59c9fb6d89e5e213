//! Raw spreadsheet grid.
//!
//! This module contains the [`Cell`] and [`RawTable`] types. A payroll table
//! has no typed schema: row 0 holds wage codes, row 1 is reserved, and data
//! starts at row 2 with the staff id in column 0 and the name in column 1.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Index of the first data row (row 1 is reserved and never read).
pub const DATA_START_ROW: usize = 2;

static EMPTY_CELL: Cell = Cell::Empty;

/// A single untyped spreadsheet cell.
///
/// # Example
///
/// ```
/// use paycompute::models::Cell;
///
/// assert_eq!(Cell::Number(12345.0).as_text(), "12345");
/// assert!(Cell::text(" nan ").is_blank());
/// assert!(!Cell::text("E12345").is_blank());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// No value.
    Empty,
    /// A text value, stored as read.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A boolean value.
    Bool(bool),
    /// A date, time or duration, rendered as text. Never an amount.
    Date(String),
}

/// The result of reading a cell as a monetary amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedAmount {
    /// The cell holds a finite number.
    Value(Decimal),
    /// The cell is empty, whitespace, or a "nan" marker.
    Blank,
    /// The cell holds something that is not a number.
    NonNumeric(String),
}

impl Cell {
    /// Creates a text cell; an empty string becomes [`Cell::Empty`].
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value)
        }
    }

    /// Returns true for empty cells, whitespace-only text, the literal
    /// "nan" (any case) and NaN numbers.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => {
                let trimmed = s.trim();
                trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
            }
            Cell::Number(n) => n.is_nan(),
            Cell::Bool(_) => false,
            Cell::Date(s) => s.trim().is_empty(),
        }
    }

    /// Renders the cell as text.
    ///
    /// Integral numbers render without a fractional part so that a staff id
    /// stored as a number reads back the way it was typed.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                format!("{}", *n as i64)
            }
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
            Cell::Date(s) => s.clone(),
        }
    }

    /// Renders the cell as a normalized wage code: trimmed and uppercased.
    pub fn as_code(&self) -> String {
        self.as_text().trim().to_uppercase()
    }

    /// Reads the cell as a monetary amount.
    ///
    /// Text is trimmed and accepted in plain or scientific notation.
    /// Booleans, dates, infinities and anything unparseable are non-numeric.
    pub fn parse_amount(&self) -> ParsedAmount {
        if self.is_blank() {
            return ParsedAmount::Blank;
        }
        match self {
            Cell::Number(n) if n.is_finite() => Decimal::from_str(&n.to_string())
                .map(ParsedAmount::Value)
                .unwrap_or_else(|_| ParsedAmount::NonNumeric(n.to_string())),
            Cell::Text(s) => {
                let trimmed = s.trim();
                Decimal::from_str(trimmed)
                    .or_else(|_| Decimal::from_scientific(trimmed))
                    .map(ParsedAmount::Value)
                    .unwrap_or_else(|_| ParsedAmount::NonNumeric(trimmed.to_string()))
            }
            other => ParsedAmount::NonNumeric(other.as_text()),
        }
    }
}

/// A read-only 2-D grid of cells supplied by the file loader.
///
/// Rows may have different lengths; reads beyond a row's end yield
/// [`Cell::Empty`].
///
/// # Example
///
/// ```
/// use paycompute::models::RawTable;
///
/// let table = RawTable::from_text_rows(vec![
///     vec!["ID", "NAME", "A1"],
///     vec!["", "", ""],
///     vec!["E12345", "Jane", "500"],
/// ]);
/// assert_eq!(table.row_count(), 3);
/// assert_eq!(table.cell(2, 2).as_text(), "500");
/// assert!(table.cell(2, 9).is_blank());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Creates a table from rows of cells.
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Creates a table of text cells; empty strings become empty cells.
    pub fn from_text_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Cell::text).collect())
                .collect(),
        }
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the widest row's length.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns a row, if present.
    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Returns the cell at (row, column), or an empty cell when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Returns the header row (row 0) or an empty slice.
    pub fn header(&self) -> &[Cell] {
        self.row(0).unwrap_or(&[])
    }

    /// Iterates `(row_index, row)` over the data rows (index 2 onward).
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[Cell])> {
        self.rows
            .iter()
            .enumerate()
            .skip(DATA_START_ROW)
            .map(|(idx, row)| (idx, row.as_slice()))
    }

    /// Iterates every row with its index.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[Cell])> {
        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| (idx, row.as_slice()))
    }
}

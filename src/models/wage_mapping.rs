//! Wage code to pay component mapping.

use serde::Serialize;
use std::collections::HashMap;

use super::table::{Cell, RawTable};

/// A header column whose code is present in the wage mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedColumn {
    /// Zero-based column index.
    pub index: usize,
    /// The normalized wage code.
    pub code: String,
    /// The component the code maps to.
    pub component: String,
}

/// Header and filler literals found in mapping workbooks. A row where either
/// column equals one of these (ignoring case) is never a mapping entry.
pub const PLACEHOLDER_LITERALS: [&str; 3] = ["RAMCO CODE", "NOT AVAILABLE", "SAP PAYCOMPONENT"];

/// Lookup from an uppercase wage code to its display component name.
///
/// Built once per run and never mutated afterwards. Later rows with the same
/// code replace earlier ones.
///
/// # Example
///
/// ```
/// use paycompute::models::WageMapping;
///
/// let mapping = WageMapping::from_pairs([
///     ("RAMCO CODE", "SAP PayComponent"),
///     (" a1 ", "Housing"),
///     ("A1", "Housing Allowance"),
/// ]);
/// assert_eq!(mapping.len(), 1);
/// assert_eq!(mapping.component("a1"), Some("Housing Allowance"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WageMapping {
    entries: HashMap<String, String>,
}

impl WageMapping {
    /// Builds a mapping from the first two columns of a table.
    ///
    /// Every row is considered; there is no header row beyond the
    /// placeholder literals, which are filtered out.
    pub fn from_table(table: &RawTable) -> Self {
        Self::from_pairs(
            table
                .rows()
                .map(|(idx, _)| (table.cell(idx, 0).as_text(), table.cell(idx, 1).as_text())),
        )
    }

    /// Builds a mapping from `(code, component)` pairs with the same
    /// filtering as [`WageMapping::from_table`].
    pub fn from_pairs<I, C, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: AsRef<str>,
        N: AsRef<str>,
    {
        let mut mapping = Self::default();
        for (code, name) in pairs {
            mapping.insert(code.as_ref(), name.as_ref());
        }
        mapping
    }

    fn insert(&mut self, code: &str, name: &str) {
        let code = code.trim().to_uppercase();
        let name = name.trim();

        if code.is_empty() || name.is_empty() {
            return;
        }
        if code.eq_ignore_ascii_case("nan") || name.eq_ignore_ascii_case("nan") {
            return;
        }
        if is_placeholder(&code) || is_placeholder(name) {
            return;
        }
        self.entries.insert(code, name.to_string());
    }

    /// Returns the component for a code; the code is normalized first.
    pub fn component(&self, code: &str) -> Option<&str> {
        self.entries
            .get(&code.trim().to_uppercase())
            .map(String::as_str)
    }

    /// Returns true if the (normalized) code is mapped.
    pub fn contains(&self, code: &str) -> bool {
        self.component(code).is_some()
    }

    /// Returns the number of mapped codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no code is mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the header columns whose normalized code is mapped, in column
    /// order.
    pub fn mapped_columns(&self, header: &[Cell]) -> Vec<MappedColumn> {
        header
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_blank())
            .filter_map(|(index, cell)| {
                let code = cell.as_code();
                self.entries.get(&code).map(|component| MappedColumn {
                    index,
                    code,
                    component: component.clone(),
                })
            })
            .collect()
    }

    /// Iterates `(code, component)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn is_placeholder(value: &str) -> bool {
    PLACEHOLDER_LITERALS
        .iter()
        .any(|literal| literal.eq_ignore_ascii_case(value))
}

//! Data-quality checks for PayCompute.
//!
//! Each check is a pure function over the raw table, the wage mapping, the
//! extracted records, or the generated CSV. None of them mutate their input
//! and none depends on another's result. Each returns a
//! [`CheckOutcome`](crate::models::CheckOutcome) whose findings are complete
//! and whose display messages follow the per-check caps.

mod amount_range;
mod blank_cells;
mod component_consistency;
mod pre_download;
mod staff_ids;
mod structure;
mod wage_codes;

pub use amount_range::{AMOUNT_ERRORS_SHOWN, AMOUNT_WARNINGS_SHOWN, check_amount_range};
pub use blank_cells::{BLANK_CELLS_SHOWN, check_blank_cells};
pub use component_consistency::check_component_consistency;
pub use pre_download::check_pre_download;
pub use staff_ids::{STAFF_ID_ISSUES_SHOWN, check_staff_ids};
pub use structure::{MIN_ROWS, check_structure};
pub use wage_codes::{EXCLUDED_HEADER_LABELS, UNMAPPED_CODES_SHOWN, check_wage_codes};

/// Keeps the first `shown` messages and, if any were dropped, appends the
/// line produced by `rollup` for the dropped count.
pub(crate) fn capped(
    messages: &[String],
    shown: usize,
    rollup: impl FnOnce(usize) -> String,
) -> Vec<String> {
    let mut out: Vec<String> = messages.iter().take(shown).cloned().collect();
    if messages.len() > shown {
        out.push(rollup(messages.len() - shown));
    }
    out
}

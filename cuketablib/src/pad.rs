//! Field padding: extend every value to its column's computed width.
//!
//! The header is padded like any data row and becomes the first padded row,
//! so the renderer treats all rows identically.

use serde::{Deserialize, Serialize};

use crate::dataset::DataSet;
use crate::widths::{display_width, WidthMap};

/// One padded output row: cell values in header order, each already at its
/// column's width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddedRow {
    /// Padded cell values, one per header column
    pub cells: Vec<String>,
}

/// Right-pad a value with spaces to `width` characters.
///
/// Never truncates: a value already at or beyond the width is returned
/// unchanged. Values that determined the width can't exceed it, but header
/// names rely on this for the `width >= name + padding` invariant, and it
/// makes padding idempotent.
pub fn pad_value(value: &str, width: usize) -> String {
    let current = display_width(value);
    if current >= width {
        return value.to_string();
    }
    let mut padded = String::with_capacity(value.len() + (width - current));
    padded.push_str(value);
    for _ in current..width {
        padded.push(' ');
    }
    padded
}

/// Pad a sanitized dataset into output rows, header first.
pub fn pad_dataset(dataset: &DataSet, widths: &WidthMap) -> Vec<PaddedRow> {
    let header_row = PaddedRow {
        cells: dataset
            .header
            .iter()
            .map(|name| pad_value(name, widths.get(name)))
            .collect(),
    };

    let mut rows = Vec::with_capacity(dataset.records.len() + 1);
    rows.push(header_row);

    for record in &dataset.records {
        rows.push(PaddedRow {
            cells: dataset
                .header
                .iter()
                .map(|column| pad_value(record.get(column), widths.get(column)))
                .collect(),
        });
    }

    rows
}

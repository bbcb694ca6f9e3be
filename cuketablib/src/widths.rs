//! Per-column width computation.
//!
//! Each column gets a minimum rendered width: the header name's width plus
//! the padding constant, raised whenever a data value is wider. The map is
//! derived once per run and immutable afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dataset::DataSet;

/// Display width of a value, measured in characters.
///
/// Both the width computation and the padder measure with this, so padded
/// values line up even for non-ASCII text.
pub fn display_width(value: &str) -> usize {
    value.chars().count()
}

/// Mapping from column name to its minimum rendered width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidthMap {
    widths: BTreeMap<String, usize>,
    padding: usize,
}

impl WidthMap {
    /// Compute widths for a sanitized dataset.
    ///
    /// Every column starts at `display_width(name) + padding`; any record
    /// value wider than the current width raises it to
    /// `display_width(value) + padding`. The result depends only on the
    /// widest value observed per column, not on record order. With no
    /// records, header widths stand.
    pub fn compute(dataset: &DataSet, padding: usize) -> Self {
        let mut widths: BTreeMap<String, usize> = dataset
            .header
            .iter()
            .map(|name| (name.clone(), display_width(name) + padding))
            .collect();

        for record in &dataset.records {
            for column in &dataset.header {
                let value_width = display_width(record.get(column));
                if let Some(width) = widths.get_mut(column) {
                    if *width < value_width {
                        *width = value_width + padding;
                    }
                }
            }
        }

        Self { widths, padding }
    }

    /// Width for a column. Columns outside the header read as zero.
    pub fn get(&self, column: &str) -> usize {
        self.widths.get(column).copied().unwrap_or(0)
    }

    /// The padding constant this map was built with.
    pub fn padding(&self) -> usize {
        self.padding
    }
}

//! Rendering padded rows into pipe-delimited table lines.
//!
//! Each row becomes `| cell1 | cell2 | ... |` with the cells already padded
//! to their column widths, so the pipes line up down the whole table. The
//! output is consumable directly as a Gherkin/Cucumber data table.

use crate::pad::PaddedRow;

/// Render one padded row as a table line.
pub fn render_row(row: &PaddedRow) -> String {
    let mut line = String::from("|");
    for cell in &row.cells {
        line.push(' ');
        line.push_str(cell);
        line.push('|');
    }
    line
}

/// Render all padded rows, header row first, one line per row.
pub fn render_table(rows: &[PaddedRow]) -> Vec<String> {
    rows.iter().map(render_row).collect()
}

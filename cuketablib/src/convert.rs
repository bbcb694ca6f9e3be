//! High-level conversion API.
//!
//! This module provides the main entry points for turning a CSV file into
//! Cucumber table lines. The pipeline runs strictly in order over the full
//! in-memory dataset:
//!
//! 1. Sanitize sentinel nulls
//! 2. Compute per-column widths
//! 3. Pad every header name and value
//! 4. Render pipe-delimited lines
//!
//! Every stage takes immutable input and returns a new value; the staged
//! artifacts are kept on [`Conversion`] so callers (the CLI's verbose mode)
//! can inspect each one.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::dataset::DataSet;
use crate::ingest::read_csv;
use crate::pad::{pad_dataset, PaddedRow};
use crate::render::render_table;
use crate::sanitize::sanitize_nulls;
use crate::widths::WidthMap;
use crate::Result;

/// Extra trailing space added beyond the widest value in a column.
pub const DEFAULT_PADDING: usize = 3;

/// Options for a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Padding constant added beyond the widest observed value
    pub padding: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
        }
    }
}

impl ConvertOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the padding constant.
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }
}

/// Result of a conversion run, with every intermediate stage retained.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Dataset after null sanitization
    pub dataset: DataSet,
    /// Per-column widths derived from the sanitized dataset
    pub widths: WidthMap,
    /// Padded rows, header row first
    pub padded: Vec<PaddedRow>,
    /// Rendered table lines, in output order
    pub lines: Vec<String>,
}

/// Run the pipeline over an already-parsed dataset.
pub fn convert_dataset(dataset: DataSet, options: &ConvertOptions) -> Conversion {
    let dataset = sanitize_nulls(dataset);
    let widths = WidthMap::compute(&dataset, options.padding);
    let padded = pad_dataset(&dataset, &widths);
    let lines = render_table(&padded);

    Conversion {
        dataset,
        widths,
        padded,
        lines,
    }
}

/// Parse a CSV file and run the full pipeline.
///
/// # Example
///
/// ```rust
/// use cuketablib::{convert_file, ConvertOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let input = dir.path().join("people.csv");
/// fs::write(&input, "name,age\nalice,30\n").unwrap();
///
/// let conversion = convert_file(&input, ConvertOptions::new()).unwrap();
/// assert_eq!(conversion.lines[0], "| name   | age   |");
/// assert_eq!(conversion.lines[1], "| alice  | 30    |");
/// ```
pub fn convert_file(path: impl AsRef<Path>, options: ConvertOptions) -> Result<Conversion> {
    let dataset = read_csv(path)?;
    Ok(convert_dataset(dataset, &options))
}

/// Write rendered lines to the destination, one line per row.
///
/// Each line gets a trailing newline; nothing follows the final one. The
/// writer is flushed before returning so a success means the file is
/// complete on disk.
pub fn write_lines(path: impl AsRef<Path>, lines: &[String]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;
    use std::fs;
    use tempfile::tempdir;

    fn dataset(header: &[&str], rows: &[&[&str]]) -> DataSet {
        let header: Vec<String> = header.iter().map(|s| s.to_string()).collect();
        let records = rows
            .iter()
            .enumerate()
            .map(|(i, row)| Record::from_fields(&header, row.iter().copied(), i + 1).unwrap())
            .collect();
        DataSet::new(header, records)
    }

    #[test]
    fn test_two_column_round_trip() {
        let options = ConvertOptions::new().padding(1);
        let conversion = convert_dataset(dataset(&["a", "bb"], &[&["x", "y"]]), &options);

        assert_eq!(conversion.widths.get("a"), 2);
        assert_eq!(conversion.widths.get("bb"), 3);
        assert_eq!(conversion.padded[0].cells, vec!["a ", "bb "]);
        assert_eq!(conversion.padded[1].cells, vec!["x ", "y  "]);
        assert_eq!(conversion.lines, vec!["| a | bb |", "| x | y  |"]);
    }

    #[test]
    fn test_header_only_dataset() {
        let conversion = convert_dataset(dataset(&["name", "id"], &[]), &ConvertOptions::new());

        assert_eq!(conversion.lines.len(), 1);
        assert_eq!(conversion.lines[0], "| name   | id   |");
    }

    #[test]
    fn test_null_values_sanitized_before_widths() {
        // "NULL" shrinks to " ", so it never drives the column width.
        let conversion = convert_dataset(
            dataset(&["c"], &[&["NULL"]]),
            &ConvertOptions::new().padding(0),
        );

        assert_eq!(conversion.widths.get("c"), 1);
        assert_eq!(conversion.lines, vec!["| c|", "|  |"]);
    }

    #[test]
    fn test_convert_file_end_to_end() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("data.csv");
        fs::write(&input, "id,name\n1,alice\n22,NULL\n").unwrap();

        let conversion = convert_file(&input, ConvertOptions::new()).unwrap();

        assert_eq!(conversion.lines.len(), 3);
        // id: len("id") + 3 = 5; name: len("name") + 3 = 7, "alice" fits
        assert_eq!(conversion.lines[0], "| id   | name   |");
        assert_eq!(conversion.lines[1], "| 1    | alice  |");
        assert_eq!(conversion.lines[2], "| 22   |        |");
    }

    #[test]
    fn test_write_lines() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("table.txt");
        let lines = vec!["| a |".to_string(), "| b |".to_string()];

        write_lines(&out, &lines).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "| a |\n| b |\n");
    }
}

//! Error types for cuketablib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during CSV-to-table conversion
#[derive(Error, Debug)]
pub enum CuketabError {
    /// Input file does not exist on disk
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Excel workbooks are not supported; export to CSV first
    #[error("excel files are not supported, export '{0}' as CSV first")]
    ExcelNotSupported(PathBuf),

    /// Input does not carry a .csv extension
    #[error("not a CSV file (expected a .csv extension): {0}")]
    UnsupportedExtension(PathBuf),

    /// A data row is missing a value for a header column
    #[error("row {row} has no value for column '{column}'")]
    MissingField { column: String, row: usize },

    /// CSV parse error
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

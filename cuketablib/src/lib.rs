//! # cuketablib
//!
//! Convert CSV data into fixed-width, pipe-delimited Cucumber data tables.
//!
//! ## Overview
//!
//! Database and spreadsheet CSV exports make poor Gherkin tables as-is:
//! columns don't line up and absent values show up as the literal text
//! `NULL`. This library runs a four-stage pipeline over a fully parsed CSV
//! file and produces table lines ready to paste into a feature file:
//!
//! 1. **Sanitize**: the sentinel `"NULL"` string becomes a blank
//! 2. **Widths**: each column gets a minimum width (header length plus a
//!    padding constant, raised by any wider data value)
//! 3. **Pad**: every header name and value is right-padded to its column
//!    width, never truncated
//! 4. **Render**: each row becomes a `| a | b |` line, header row first
//!
//! The whole input is parsed into memory before the pipeline runs; every
//! stage is a pure function over the full dataset.
//!
//! ## Example
//!
//! ```rust
//! use cuketablib::{convert_file, ConvertOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let input = dir.path().join("users.csv");
//! fs::write(&input, "id,email\n7,a@b.example\n").unwrap();
//!
//! let conversion = convert_file(&input, ConvertOptions::new().padding(1)).unwrap();
//! assert_eq!(conversion.lines[0], "| id | email       |");
//! assert_eq!(conversion.lines[1], "| 7  | a@b.example |");
//! ```

pub mod convert;
pub mod dataset;
pub mod error;
pub mod ingest;
pub mod pad;
pub mod render;
pub mod sanitize;
pub mod widths;

pub use convert::{
    convert_dataset, convert_file, write_lines, Conversion, ConvertOptions, DEFAULT_PADDING,
};
pub use dataset::{DataSet, Record};
pub use error::CuketabError;
pub use ingest::{read_csv, validate_extension};
pub use pad::{pad_dataset, pad_value, PaddedRow};
pub use render::{render_row, render_table};
pub use sanitize::{sanitize_nulls, NULL_SENTINEL};
pub use widths::{display_width, WidthMap};

/// Result type for cuketablib operations
pub type Result<T> = std::result::Result<T, CuketabError>;

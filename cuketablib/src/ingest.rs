//! CSV ingestion: extension validation and parse-to-completion.
//!
//! The whole file is read into memory before any pipeline stage runs. The
//! `csv` crate owns dialect concerns (quoting, embedded delimiters,
//! multi-line fields); this module owns the extension gate and the one-time
//! schema check that turns raw rows into [`Record`]s.

use std::path::Path;

use csv::ReaderBuilder;

use crate::dataset::{DataSet, Record};
use crate::error::CuketabError;
use crate::Result;

/// Check that a path looks like a CSV file.
///
/// `.csv` (any case) passes. `.xls`/`.xlsx` get their own diagnostic since
/// spreadsheet exports are the most common mistake; everything else is
/// rejected generically.
pub fn validate_extension(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => Ok(()),
        Some("xls") | Some("xlsx") => Err(CuketabError::ExcelNotSupported(path.to_path_buf())),
        _ => Err(CuketabError::UnsupportedExtension(path.to_path_buf())),
    }
}

/// Parse a CSV file into a [`DataSet`].
///
/// Blocking read of the entire file: the header row first, then every data
/// row schema-checked against it. The reader is flexible so that short rows
/// reach our own [`CuketabError::MissingField`] instead of the csv crate's
/// ragged-row error.
pub fn read_csv(path: impl AsRef<Path>) -> Result<DataSet> {
    let path = path.as_ref();

    validate_extension(path)?;
    if !path.exists() {
        return Err(CuketabError::InputNotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let record = Record::from_fields(&header, row.iter(), index + 1)?;
        records.push(record);
    }

    Ok(DataSet::new(header, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_extension_csv() {
        assert!(validate_extension("report.csv").is_ok());
        assert!(validate_extension("REPORT.CSV").is_ok());
    }

    #[test]
    fn test_validate_extension_excel() {
        let err = validate_extension("report.xlsx").unwrap_err();
        assert!(matches!(err, CuketabError::ExcelNotSupported(_)));
        let err = validate_extension("report.xls").unwrap_err();
        assert!(matches!(err, CuketabError::ExcelNotSupported(_)));
    }

    #[test]
    fn test_validate_extension_other() {
        let err = validate_extension("report.txt").unwrap_err();
        assert!(matches!(err, CuketabError::UnsupportedExtension(_)));
        let err = validate_extension("report").unwrap_err();
        assert!(matches!(err, CuketabError::UnsupportedExtension(_)));
    }

    #[test]
    fn test_read_csv_missing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.csv");
        let err = read_csv(&path).unwrap_err();
        assert!(matches!(err, CuketabError::InputNotFound(_)));
    }

    #[test]
    fn test_read_csv() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("people.csv");
        fs::write(&path, "name,age\nalice,30\nbob,41\n").unwrap();

        let dataset = read_csv(&path).unwrap();

        assert_eq!(dataset.header, vec!["name", "age"]);
        assert_eq!(dataset.records.len(), 2);
        assert_eq!(dataset.records[0].get("name"), "alice");
        assert_eq!(dataset.records[1].get("age"), "41");
    }

    #[test]
    fn test_read_csv_quoted_fields() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("quoted.csv");
        fs::write(&path, "name,notes\nalice,\"likes, commas\"\n").unwrap();

        let dataset = read_csv(&path).unwrap();

        assert_eq!(dataset.records[0].get("notes"), "likes, commas");
    }

    #[test]
    fn test_read_csv_short_row() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("short.csv");
        fs::write(&path, "name,age\nalice,30\nbob\n").unwrap();

        let err = read_csv(&path).unwrap_err();
        match err {
            CuketabError::MissingField { column, row } => {
                assert_eq!(column, "age");
                assert_eq!(row, 2);
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }
}

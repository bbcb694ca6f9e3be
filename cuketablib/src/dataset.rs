//! In-memory data model for a parsed CSV file.
//!
//! The header's column order is authoritative: every stage of the pipeline
//! iterates columns in header order, and the schema (the header's column set)
//! is checked exactly once, when a [`Record`] is constructed at ingestion.
//! Downstream stages may therefore assume every record covers every column.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CuketabError;
use crate::Result;

/// One data row: a mapping from column name to text value.
///
/// Values are always text. Anything that was not a string at the source
/// (numbers, booleans) must be stringified before it enters a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: BTreeMap<String, String>,
}

impl Record {
    /// Build a record from one CSV row, checking it against the header.
    ///
    /// `row` is the 1-based index of the data row, used in error messages.
    /// A row with fewer fields than the header has columns fails with
    /// [`CuketabError::MissingField`]; extra trailing fields are ignored.
    pub fn from_fields<I, S>(header: &[String], fields: I, row: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields = fields.into_iter();
        let mut values = BTreeMap::new();

        for column in header {
            match fields.next() {
                Some(value) => {
                    values.insert(column.clone(), value.into());
                }
                None => {
                    return Err(CuketabError::MissingField {
                        column: column.clone(),
                        row,
                    })
                }
            }
        }

        Ok(Self { values })
    }

    /// Look up the value for a column.
    ///
    /// Ingestion guarantees every header column is present, so a miss only
    /// happens for a column name outside the schema; it reads as empty.
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// Replace the value for a column, returning a new record.
    pub(crate) fn with_value(mut self, column: &str, value: String) -> Self {
        if let Some(slot) = self.values.get_mut(column) {
            *slot = value;
        }
        self
    }
}

/// A fully parsed CSV file: header plus data records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSet {
    /// Column names in file order
    pub header: Vec<String>,
    /// Data rows, in file order
    pub records: Vec<Record>,
}

impl DataSet {
    /// Create a dataset from a header and pre-validated records.
    pub fn new(header: Vec<String>, records: Vec<Record>) -> Self {
        Self { header, records }
    }

    /// Record values as rows of cells, in header order.
    ///
    /// The record mapping itself is keyed alphabetically, so diagnostics
    /// that should read like the CSV go through this instead.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.records
            .iter()
            .map(|record| {
                self.header
                    .iter()
                    .map(|column| record.get(column).to_string())
                    .collect()
            })
            .collect()
    }
}

//! Null sanitization: normalize the sentinel `"NULL"` string to a blank.
//!
//! Some database exports spell out absent values as the literal text `NULL`.
//! In a Cucumber table that reads as data, so it is replaced with a single
//! space before widths are computed.

use crate::dataset::DataSet;

/// The sentinel text that marks an absent value in some CSV exports.
pub const NULL_SENTINEL: &str = "NULL";

/// Replace every value exactly equal to `"NULL"` with a single space.
///
/// The match is exact and case-sensitive: `"null"` and `"NULLABLE"` pass
/// through untouched. Returns a new dataset; the input is consumed, not
/// mutated in place.
pub fn sanitize_nulls(dataset: DataSet) -> DataSet {
    let header = dataset.header;
    let records = dataset
        .records
        .into_iter()
        .map(|mut record| {
            for column in &header {
                if record.get(column) == NULL_SENTINEL {
                    record = record.with_value(column, " ".to_string());
                }
            }
            record
        })
        .collect();

    DataSet::new(header, records)
}

//! Dump a record sequence to a pretty-printed XML file.

use std::fs;

use crate::builders::build_records_xml;
use crate::error::{XmlError, XmlResult};
use crate::types::Record;

/// Serialize `records` into a pretty-printed XML document at `file_path`.
///
/// The sequence must be non-empty: element names derive from the first
/// record's type name. The destination file is created if missing and
/// replaced otherwise. The document is fully built in memory first, so
/// nothing reaches the filesystem when property access or document
/// construction fails.
pub fn dump_to_file<R: Record>(
    records: &[R],
    file_path: &str,
    property_names: &[&str],
) -> XmlResult<()> {
    log::debug!("Dumping {} records to: {}", records.len(), file_path);
    let document = build_records_xml(records, property_names)?;
    fs::write(file_path, document).map_err(|err| {
        log::error!("Unable to write XML to {}.", file_path);
        XmlError::dump_failed(err)
    })
}

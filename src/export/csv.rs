//! CSV export (flattened rows for spreadsheets).

use anyhow::Result;
use csv::Writer;
use std::io::Write;

use crate::revisions::{MappedRevision, Revision};

/// Writes a header and one row per revision; returns the number of rows.
///
/// Columns follow [`MappedRevision`]'s field order.
pub fn write_csv<W: Write>(writer: W, revisions: &[Revision]) -> Result<usize> {
    let mut writer = Writer::from_writer(writer);
    if revisions.is_empty() {
        writer.write_record(CSV_HEADER)?;
    }
    for revision in revisions {
        writer.serialize(MappedRevision::from(revision))?;
    }
    writer.flush()?;
    Ok(revisions.len())
}

/// Header row, also written when there are no revisions.
const CSV_HEADER: [&str; 14] = [
    "id",
    "thread_id",
    "page",
    "language",
    "url",
    "author",
    "author_anonymous_location",
    "is_anonymous",
    "is_minor_edit",
    "is_probably_bot",
    "timestamp",
    "section",
    "body",
    "unix_timestamp",
];

//! NDJSON export.
//!
//! One JSON object per line: the revision's own attributes flattened together
//! with the derived export fields. Suited for piping to `jq` or loading into
//! document stores.

use anyhow::{Context, Result};
use std::io::Write;

use crate::revisions::{Revision, RevisionRecord};

/// Writes one line per revision and returns the number written.
pub fn write_ndjson<W: Write>(writer: &mut W, revisions: &[Revision]) -> Result<usize> {
    for revision in revisions {
        let record = RevisionRecord::from(revision);
        serde_json::to_writer(&mut *writer, &record)
            .with_context(|| format!("Failed to serialize revision {}", record.id))?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(revisions.len())
}

//! Export of collected revisions.
//!
//! Two formats:
//! - NDJSON: nested, keeps the structured location; for programmatic use
//! - CSV: flattened rows; for spreadsheets

mod csv;
mod ndjson;
mod output;

pub use self::csv::write_csv;
pub use ndjson::write_ndjson;
pub use output::open_output;

use anyhow::Result;
use std::path::Path;

use crate::config::RevisionFormat;
use crate::revisions::Revision;

/// Writes `revisions` to `path` (or stdout for `-`) in `format`.
///
/// Returns the number of records written.
pub fn write_revisions(path: &Path, format: RevisionFormat, revisions: &[Revision]) -> Result<usize> {
    let mut writer = open_output(path)?;
    match format {
        RevisionFormat::Ndjson => write_ndjson(&mut writer, revisions),
        RevisionFormat::Csv => write_csv(writer, revisions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revisions::GeoLocation;
    use chrono::{TimeZone, Utc};

    fn revisions() -> Vec<Revision> {
        vec![
            Revision {
                revision_id: 20,
                parent_id: Some(10),
                author: "192.0.2.44".into(),
                is_anonymous: true,
                is_minor: true,
                timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
                comment: "/* Usage */ fix, \"quoted\"".into(),
                title: "Example".into(),
                language: "en".into(),
                location: Some(GeoLocation {
                    country_code: Some("FR".into()),
                    ..Default::default()
                }),
            },
            Revision {
                revision_id: 10,
                parent_id: None,
                author: "Founder".into(),
                is_anonymous: false,
                is_minor: false,
                timestamp: Utc.with_ymd_and_hms(2004, 1, 1, 0, 0, 0).unwrap(),
                comment: "new page".into(),
                title: "Example".into(),
                language: "en".into(),
                location: None,
            },
        ]
    }

    #[test]
    fn test_write_ndjson() {
        let mut buffer = Vec::new();
        let count = write_ndjson(&mut buffer, &revisions()).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["id"], "en-20");
        assert_eq!(lines[0]["location"]["country_code"], "FR");
        assert_eq!(lines[0]["section"], "Usage");
        assert!(lines[1]["parent_id"].is_null());
        assert!(lines[1]["section"].is_null());
    }

    #[test]
    fn test_write_csv() {
        let mut buffer = Vec::new();
        let count = write_csv(&mut buffer, &revisions()).unwrap();
        assert_eq!(count, 2);

        let mut reader = ::csv::Reader::from_reader(buffer.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "id");
        assert_eq!(&headers[13], "unix_timestamp");

        let rows: Vec<::csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][6], "FR /  /  / ");
        assert_eq!(&rows[0][8], "yes");
        assert_eq!(&rows[0][12], "/* Usage */ fix, \"quoted\"");
        assert_eq!(&rows[1][1], "");
        assert_eq!(&rows[1][10], "2004-01-01 00:00:00");
    }

    #[test]
    fn test_write_csv_empty_has_header() {
        let mut buffer = Vec::new();
        assert_eq!(write_csv(&mut buffer, &[]).unwrap(), 0);
        assert!(String::from_utf8(buffer).unwrap().starts_with("id,thread_id,page"));
    }

    #[test]
    fn test_write_revisions_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("revisions.csv");
        let count = write_revisions(&path, RevisionFormat::Csv, &revisions()).unwrap();
        assert_eq!(count, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }
}

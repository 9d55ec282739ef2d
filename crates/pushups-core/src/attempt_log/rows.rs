//! CSV encoding of attempt records.

use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, Terminator, Trim, WriterBuilder};
use log::{debug, warn};

use crate::{
    error::{CsvResultExt, IoResultExt, Result},
    models::AttemptRecord,
};

/// Header row of the attempt log, in column order.
pub const HEADER: [&str; 6] = [
    "timestamp",
    "week",
    "day",
    "column",
    "outcome",
    "sets_completed",
];

/// Encode records as CSV rows, optionally preceded by the header row.
pub(crate) fn encode(records: &[AttemptRecord], with_header: bool, path: &Path) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    if with_header {
        writer.write_record(HEADER).csv_context(path)?;
    }
    for record in records {
        writer.serialize(record).csv_context(path)?;
    }
    writer.into_inner().map_err(|e| e.into_error()).fs_context(path)
}

/// Rows read back from a log, with the count of rows that did not decode.
#[derive(Debug, Default)]
pub(crate) struct Decoded {
    pub records: Vec<AttemptRecord>,
    pub skipped: usize,
}

/// Decode every well-formed row, in storage order.
///
/// Rows that do not deserialize (non-numeric week or day, unknown outcome,
/// bad timestamp or set counts) are skipped. Read failures are returned.
pub(crate) fn decode<R: Read>(reader: R, path: &Path) -> Result<Vec<AttemptRecord>> {
    decode_rows(reader, path).map(|decoded| decoded.records)
}

/// Like [`decode`], but also reports how many rows were skipped.
pub(crate) fn decode_rows<R: Read>(reader: R, path: &Path) -> Result<Decoded> {
    let mut csv = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut decoded = Decoded::default();
    for row in csv.deserialize::<AttemptRecord>() {
        match row {
            Ok(record) => decoded.records.push(record),
            Err(e) if e.is_io_error() => return Err(e).csv_context(path),
            Err(e) => {
                debug!("Skipping attempt row in '{}': {e}", path.display());
                decoded.skipped += 1;
            }
        }
    }
    if decoded.skipped > 0 {
        warn!(
            "Skipped {} malformed attempt row(s) in '{}'",
            decoded.skipped,
            path.display()
        );
    }
    Ok(decoded)
}

/// Read an attempt log file in storage order. A missing file holds no records.
pub fn read_file(path: &Path) -> Result<Vec<AttemptRecord>> {
    read_file_rows(path).map(|decoded| decoded.records)
}

/// Like [`read_file`], but also reports how many rows were skipped.
pub(crate) fn read_file_rows(path: &Path) -> Result<Decoded> {
    match File::open(path) {
        Ok(file) => decode_rows(file, path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Decoded::default()),
        Err(e) => Err(e).fs_context(path),
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Outcome;

    fn record() -> AttemptRecord {
        AttemptRecord {
            timestamp: date(2025, 1, 24).at(13, 56, 6, 0),
            week: 1,
            day: 2,
            column: "3".to_string(),
            outcome: Outcome::Partial,
            sets_completed: vec![10, 12, 7],
        }
    }

    #[test]
    fn test_encode_matches_log_format() {
        let bytes = encode(&[record()], true, Path::new("log.csv")).expect("encode");
        let text = String::from_utf8(bytes).expect("utf-8");
        assert_eq!(
            text,
            "timestamp,week,day,column,outcome,sets_completed\n\
             2025-01-24 13:56:06,1,2,3,PARTIAL,10|12|7\n"
        );
    }

    #[test]
    fn test_encode_without_header() {
        let bytes = encode(&[AttemptRecord::test(record().timestamp, 30)], false, Path::new("log.csv"))
            .expect("encode");
        assert_eq!(
            String::from_utf8(bytes).expect("utf-8"),
            "2025-01-24 13:56:06,-1,-1,TEST,TEST,30\n"
        );
    }

    #[test]
    fn test_decode_skips_malformed_rows() {
        let text = "\
timestamp,week,day,column,outcome,sets_completed
2025-01-24 13:56:06,1,2,3,PARTIAL,10|12|7
2025-01-25 09:00:00,one,2,3,SUCCESS,10
2025-01-26 09:00:00,1,2,3,DONE,10
not a date,1,2,3,SUCCESS,10
2025-01-27 09:00:00,1,2,3,SUCCESS,10|x
2025-01-28 09:00:00,-1,-1,TEST,TEST,25
";
        let decoded = decode_rows(text.as_bytes(), Path::new("log.csv")).expect("decode");
        assert_eq!(decoded.skipped, 4);
        let records = decoded.records;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], record());
        assert_eq!(records[1].outcome, Outcome::Test);
    }

    #[test]
    fn test_decode_accepts_crlf_and_empty_sets() {
        let text = "timestamp,week,day,column,outcome,sets_completed\r\n\
                    2025-01-24 13:56:06,1,1,1,INCOMPLETE,\r\n";
        let records = decode(text.as_bytes(), Path::new("log.csv")).expect("decode");
        assert_eq!(records.len(), 1);
        assert!(records[0].sets_completed.is_empty());
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let records = read_file(&temp_dir.path().join("absent.csv")).expect("read");
        assert!(records.is_empty());
    }
}

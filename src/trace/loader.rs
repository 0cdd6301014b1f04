//! Byte-source handling for trace parsing.
//!
//! Traces arrive two ways: as files located on disk, or as upload payloads
//! carried in a base64 data URL (`<content-type>,<base64 bytes>`). Both
//! routes feed the same parsing pipeline in [`super::parser`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use base64::prelude::*;

use super::parser::parse_reader;
use super::types::{ParseMode, SignalKind, TraceError, TraceSeries};

/// Buffer size for reading log files (8KB).
const BUFFER_SIZE: usize = 8 * 1024;

/// Parse a trace from a log file on disk.
///
/// The file handle is scoped to this call and closed on every exit path.
///
/// # Parameters
///
/// * `path` - Location of the log file
/// * `kind` - Caller-supplied meaning of the value column
/// * `mode` - Row-tolerance policy
pub fn load_path(path: &Path, kind: SignalKind, mode: ParseMode) -> Result<TraceSeries, TraceError> {
    let file =
        File::open(path).map_err(|e| TraceError::Read(format!("{}: {}", path.display(), e)))?;
    let reader = BufReader::with_capacity(BUFFER_SIZE, file);
    parse_reader(reader, kind, mode)
}

/// Parse a trace from an upload payload.
///
/// The payload is a data-URL style string: a content-type prefix, a comma,
/// then the base64-encoded file bytes. The prefix is split off before
/// decoding. Decode failures surface as [`TraceError::Decode`].
pub fn load_upload(payload: &str, kind: SignalKind, mode: ParseMode) -> Result<TraceSeries, TraceError> {
    let encoded = payload
        .split_once(',')
        .map(|(_, rest)| rest)
        .ok_or_else(|| {
            TraceError::Decode("payload is missing the content-type prefix".to_string())
        })?;

    let bytes = BASE64_STANDARD
        .decode(encoded.trim())
        .map_err(|e| TraceError::Decode(format!("invalid base64 data: {}", e)))?;

    parse_reader(bytes.as_slice(), kind, mode)
}

/// True for companion error logs that the bench writes next to each trace.
///
/// These carry recorder diagnostics, not measurements, and are skipped
/// when the user opens a batch of files.
pub fn is_error_companion(file_name: &str) -> bool {
    file_name.contains("_err")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::parser::HEADER_LINES;
    use std::io::Write;

    fn log_with_rows(rows: &[&str]) -> String {
        let mut content = String::new();
        for i in 1..=HEADER_LINES {
            content.push_str(&format!("header line {}\n", i));
        }
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        content
    }

    #[test]
    fn test_load_path_reads_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("COIL_A_MSEQ0_VDH.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(log_with_rows(&["2024-01-01\t10:00:00.000000\t-2.500000"]).as_bytes())
            .unwrap();
        drop(file);

        let series = load_path(&path, SignalKind::Voltage, ParseMode::Lenient).unwrap();
        assert_eq!(series.samples.len(), 1);
        assert_eq!(series.samples[0].value, 2.5);
    }

    #[test]
    fn test_load_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.txt");

        let result = load_path(&path, SignalKind::Voltage, ParseMode::Lenient);
        assert!(matches!(result, Err(TraceError::Read(_))));
    }

    #[test]
    fn test_load_upload_decodes_payload() {
        let content = log_with_rows(&["2024-01-01\t10:00:00.000000\t-1.500000"]);
        let payload = format!(
            "data:text/plain;base64,{}",
            BASE64_STANDARD.encode(content.as_bytes())
        );

        let series = load_upload(&payload, SignalKind::Parameter, ParseMode::Lenient).unwrap();
        assert_eq!(series.samples.len(), 1);
        assert_eq!(series.samples[0].value, 1.5);
        assert_eq!(series.kind, SignalKind::Parameter);
    }

    #[test]
    fn test_load_upload_missing_prefix() {
        let result = load_upload("bm8gcHJlZml4", SignalKind::Parameter, ParseMode::Lenient);
        assert!(matches!(result, Err(TraceError::Decode(_))));
    }

    #[test]
    fn test_load_upload_bad_base64() {
        let result = load_upload(
            "data:text/plain;base64,!!!not-base64!!!",
            SignalKind::Parameter,
            ParseMode::Lenient,
        );
        assert!(matches!(result, Err(TraceError::Decode(_))));
    }

    #[test]
    fn test_error_companion_detection() {
        assert!(is_error_companion("COIL_A_MSEQ0_VDH_err.txt"));
        assert!(!is_error_companion("COIL_A_MSEQ0_VDH.txt"));
    }
}

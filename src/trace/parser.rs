//! Parse the fixed bench log layout into a normalized trace.
//!
//! The format has a constant-size preamble followed by tab-separated data
//! rows:
//!
//! ```text
//! <9 header lines, ignored>
//! 2024-01-01\t10:00:00.000000\t-2.500000
//! 2024-01-01\t10:00:01.000000\t-2.498000
//! ```
//!
//! Columns are `date<TAB>time<TAB>value` with date `YYYY-MM-DD` and time
//! `HH:MM:SS.ffffff` (fixed six-digit microseconds, 24-hour clock). The
//! date and time columns are combined into a full-precision timestamp; the
//! time column is independently truncated to `HH:MM`; the value column is
//! stored as its absolute value.

use std::io::BufRead;

use chrono::{NaiveDateTime, NaiveTime};

use super::types::{ParseMode, Sample, SignalKind, TraceError, TraceSeries};

/// Number of preamble lines before the first data row.
pub const HEADER_LINES: usize = 9;

/// Combined date + time pattern of a data row.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Time-of-day pattern of the second column alone.
const TIME_FORMAT: &str = "%H:%M:%S%.6f";

/// Parse a log byte stream into a [`TraceSeries`].
///
/// Skips the fixed header, then processes every remaining non-blank line
/// as a data row. Rows that do not split into exactly three columns, or
/// whose date/time pair does not match the fixed pattern, or whose value
/// is not a finite number, are dropped and counted in lenient mode, or
/// abort the parse in strict mode. Blank lines are ignored in both modes.
///
/// # Parameters
///
/// * `reader` - Byte source positioned at the start of the log
/// * `kind` - Caller-supplied meaning of the value column
/// * `mode` - Row-tolerance policy
///
/// # Returns
///
/// The surviving samples in file order. An empty series is a valid result.
/// I/O and encoding failures while reading surface as [`TraceError::Read`].
pub fn parse_reader<R: BufRead>(
    reader: R,
    kind: SignalKind,
    mode: ParseMode,
) -> Result<TraceSeries, TraceError> {
    let mut samples = Vec::new();
    let mut rejected_rows = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| TraceError::Read(format!("line {}: {}", index + 1, e)))?;
        if index < HEADER_LINES {
            continue;
        }

        let row = line.trim_end_matches('\r');
        if row.is_empty() {
            continue;
        }

        match parse_row(row) {
            Ok(sample) => samples.push(sample),
            Err(reason) => match mode {
                ParseMode::Lenient => {
                    log::debug!("Dropping malformed row at line {}: {}", index + 1, reason);
                    rejected_rows += 1;
                }
                ParseMode::Strict => {
                    return Err(TraceError::MalformedRow {
                        line: index + 1,
                        reason,
                    });
                }
            },
        }
    }

    Ok(TraceSeries {
        kind,
        samples,
        rejected_rows,
    })
}

/// Parse a single data row into a [`Sample`].
///
/// Returns a human-readable rejection reason on failure.
fn parse_row(row: &str) -> Result<Sample, String> {
    let fields: Vec<&str> = row.split('\t').collect();
    if fields.len() != 3 {
        return Err(format!(
            "expected 3 tab-separated columns, got {}",
            fields.len()
        ));
    }
    let (date, time, raw_value) = (fields[0], fields[1], fields[2]);

    let combined = format!("{} {}", date, time);
    let datetime = NaiveDateTime::parse_from_str(&combined, DATETIME_FORMAT)
        .map_err(|_| format!("timestamp '{}' does not match '{}'", combined, DATETIME_FORMAT))?;

    let time_hm = NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| format!("time '{}' does not match '{}'", time, TIME_FORMAT))?;

    let value: f64 = raw_value
        .trim()
        .parse()
        .map_err(|_| format!("value '{}' is not a number", raw_value))?;
    if !value.is_finite() {
        return Err(format!("value '{}' is not finite", raw_value));
    }

    Ok(Sample {
        datetime,
        time_hm,
        // Sign convention of the bench recorder is ignored downstream.
        value: value.abs(),
    })
}

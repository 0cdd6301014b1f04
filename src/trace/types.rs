//! Type definitions for parsed measurement traces.

use chrono::NaiveDateTime;

/// Meaning of the third log column, as labeled by the caller.
///
/// Bench logs carry either a supply/bias voltage or a generic hardware
/// parameter in the value column. The file layout is identical in both
/// cases; the kind only affects labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// Coil supply or bias voltage (VDH, VDL, VLNA, VPIN).
    Voltage,
    /// Generic hardware parameter.
    Parameter,
}

impl SignalKind {
    /// Column label used in chart legends and log output.
    pub fn column_name(&self) -> &'static str {
        match self {
            SignalKind::Voltage => "voltage",
            SignalKind::Parameter => "parameter",
        }
    }
}

/// Row-tolerance policy for the log parser.
///
/// `Lenient` drops malformed rows and counts them in
/// [`TraceSeries::rejected_rows`]. `Strict` aborts the parse at the first
/// malformed row with the offending line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseMode {
    #[default]
    Lenient,
    Strict,
}

/// One normalized measurement extracted from a log row.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Full-precision timestamp combined from the date and time columns.
    pub datetime: NaiveDateTime,
    /// Time of day truncated to `HH:MM` for coarse axis labeling.
    pub time_hm: String,
    /// Measurement magnitude. The recorded sign is discarded.
    pub value: f64,
}

impl Sample {
    /// Calendar date re-serialized in the log file format.
    pub fn date(&self) -> String {
        self.datetime.format("%Y-%m-%d").to_string()
    }

    /// Time of day re-serialized in the log file format, with
    /// full microsecond precision.
    pub fn time(&self) -> String {
        self.datetime.format("%H:%M:%S%.6f").to_string()
    }
}

/// An ordered sequence of valid samples from one log source.
///
/// Samples keep file order; the sequence is not sorted. Callers needing
/// chronological order must sort, though bench logs are written
/// chronologically in practice.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSeries {
    /// Caller-supplied meaning of the value column.
    pub kind: SignalKind,
    /// Surviving samples, in file order.
    pub samples: Vec<Sample>,
    /// Number of data lines dropped by lenient parsing.
    pub rejected_rows: usize,
}

impl TraceSeries {
    /// True when no valid rows survived filtering. An empty series is a
    /// legitimate outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Error type for trace loading failures.
///
/// A missing file is not represented here: file lookup reports "no match"
/// through [`crate::catalog::locate`] returning `None`.
#[derive(Debug)]
pub enum TraceError {
    /// The source could not be opened or read.
    Read(String),
    /// The upload payload could not be decoded.
    Decode(String),
    /// A data row was malformed (strict mode only).
    MalformedRow { line: usize, reason: String },
}

impl std::fmt::Display for TraceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceError::Read(msg) => write!(f, "Failed to read trace: {}", msg),
            TraceError::Decode(msg) => write!(f, "Failed to decode upload payload: {}", msg),
            TraceError::MalformedRow { line, reason } => {
                write!(f, "Malformed row at line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for TraceError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_sample_reserializes_date_and_time() {
        let datetime = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_micro_opt(10, 0, 0, 0)
            .unwrap();
        let sample = Sample {
            datetime,
            time_hm: "10:00".to_string(),
            value: 2.5,
        };

        assert_eq!(sample.date(), "2024-01-01");
        assert_eq!(sample.time(), "10:00:00.000000");
    }

    #[test]
    fn test_sample_time_keeps_microseconds() {
        let datetime = NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_micro_opt(23, 59, 59, 123456)
            .unwrap();
        let sample = Sample {
            datetime,
            time_hm: "23:59".to_string(),
            value: 0.0,
        };

        assert_eq!(sample.time(), "23:59:59.123456");
    }
}

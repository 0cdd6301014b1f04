//! Trace extraction from coil bench log files.
//!
//! Provides functionality for:
//! - Parsing the fixed tab-separated log layout into normalized samples
//! - Loading traces from disk or from base64 upload payloads
//! - Summary statistics for the dashboard
//!
//! Parsing is a pure, stateless transform per invocation: source in,
//! sample sequence or labeled error out.

pub mod loader;
pub mod parser;
pub mod stats;
pub mod types;

pub use loader::{is_error_companion, load_path, load_upload};
pub use stats::{SeriesSummary, summarize};
pub use types::{ParseMode, Sample, SignalKind, TraceError, TraceSeries};

// UI module for the MRI Coil Trace Analyzer
//
// This module organizes the UI into separate components:
// - `top_panel`: Coil/channel/signal selection and action buttons
// - `charts_panel`: Central area with one line chart per channel or file
// - `stats_panel`: Per-series statistics table and lookup notes
// - `app_state`: Application state management and main update loop

pub mod app_state;
pub mod charts_panel;
pub mod stats_panel;
pub mod top_panel;

pub use app_state::AppState;

use crate::trace::{SeriesSummary, TraceSeries};

/// One series loaded for display, with everything the panels need.
#[derive(Debug)]
pub struct LoadedSeries {
    /// File the samples came from.
    pub source: String,
    /// Chart grouping key: the receiver channel for selection lookups, the
    /// file name for directly opened files.
    pub group: String,
    /// Line label inside the chart legend.
    pub legend: String,
    pub series: TraceSeries,
    /// `None` when no valid rows survived.
    pub summary: Option<SeriesSummary>,
}

/// Per-selection outcome shown in the notes list.
///
/// The three cases are structurally distinct so the panel can render a
/// missing file, a hard failure and a legitimately empty result
/// differently.
#[derive(Debug)]
pub enum SelectionNote {
    /// No file in the data directory satisfied the selection tokens.
    NotFound { selection: String },
    /// The file existed but could not be read or decoded.
    LoadFailed { selection: String, message: String },
    /// The file parsed but zero valid rows survived filtering.
    NoData { selection: String, source: String },
}

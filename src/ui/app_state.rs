//! # Application State Management
//!
//! Implements the central `AppState` struct which owns all UI state and
//! coordinates the rendering of the panels. It implements the
//! `eframe::App` trait to integrate with the egui application framework.
//!
//! Every chart request is a fresh, synchronous lookup: locate the file for
//! each selected channel/signal pair, parse it, summarize it, keep the
//! result only as long as it is displayed. Nothing is cached between
//! requests.

use std::path::Path;

use anyhow::Context;
use eframe::egui;
use serde::{Deserialize, Serialize};

use super::{LoadedSeries, SelectionNote, charts_panel, stats_panel, top_panel};
use crate::catalog;
use crate::config::AnalyzerConfig;
use crate::trace::{self, SignalKind};

/// Central application state for the analyzer UI.
pub struct AppState {
    pub config: AnalyzerConfig,

    // Selection state
    /// Currently selected coil, if any.
    pub selected_coil: Option<String>,
    /// Check state parallel to `config.channels`.
    pub channel_checked: Vec<bool>,
    /// Check state parallel to `config.signals`.
    pub signal_checked: Vec<bool>,

    // Display state, rebuilt on every Graph press
    /// Series currently charted, in load order.
    pub loaded: Vec<LoadedSeries>,
    /// Per-selection outcomes that did not produce a normal series.
    pub notes: Vec<SelectionNote>,
    /// Transient prompt shown next to the buttons.
    pub hint: Option<String>,

    // Persistence: last directory used for the file chooser
    pub last_open_dir: Option<String>,
}

/// Settings persisted across application sessions.
#[derive(Default, Serialize, Deserialize)]
struct PersistedSettings {
    last_open_dir: Option<String>,
}

impl AppState {
    /// Create a new AppState, loading persisted settings if available.
    pub fn new(config: AnalyzerConfig, storage: Option<&dyn eframe::Storage>) -> Self {
        let persisted: PersistedSettings = storage
            .and_then(|s| eframe::get_value(s, "app_settings"))
            .unwrap_or_default();

        // Everything starts selected, matching the bench operators' usual
        // "show me all of it" workflow.
        let channel_checked = vec![true; config.channels.len()];
        let signal_checked = vec![true; config.signals.len()];

        Self {
            config,
            selected_coil: None,
            channel_checked,
            signal_checked,
            loaded: Vec::new(),
            notes: Vec::new(),
            hint: None,
            last_open_dir: persisted.last_open_dir,
        }
    }

    /// Channels currently ticked, in config order.
    pub fn selected_channels(&self) -> Vec<String> {
        self.config
            .channels
            .iter()
            .zip(&self.channel_checked)
            .filter(|(_, checked)| **checked)
            .map(|(channel, _)| channel.clone())
            .collect()
    }

    /// Signal codes currently ticked, in config order.
    pub fn selected_signals(&self) -> Vec<String> {
        self.config
            .signals
            .iter()
            .zip(&self.signal_checked)
            .filter(|(_, checked)| **checked)
            .map(|(signal, _)| signal.clone())
            .collect()
    }

    /// Run the lookup for every selected channel/signal pair and replace
    /// the displayed series.
    pub fn run_graph(&mut self) {
        self.loaded.clear();
        self.notes.clear();
        self.hint = None;

        let Some(coil) = self.selected_coil.clone() else {
            self.hint = Some("Please make all selections.".to_string());
            return;
        };
        let channels = self.selected_channels();
        let signals = self.selected_signals();
        if channels.is_empty() || signals.is_empty() {
            self.hint = Some("Please make all selections.".to_string());
            return;
        }

        for channel in &channels {
            for signal in &signals {
                self.lookup_series(&coil, channel, signal);
            }
        }
    }

    /// Locate, parse and summarize one channel/signal selection.
    fn lookup_series(&mut self, coil: &str, channel: &str, signal: &str) {
        let selection = format!("{} / {} / {}", coil, channel, signal);
        let tokens = [coil, channel, signal];

        let located = catalog::locate(&self.config.data_dir, &tokens, self.config.match_strategy)
            .with_context(|| format!("scanning {}", self.config.data_dir.display()));
        let path = match located {
            Ok(Some(path)) => path,
            Ok(None) => {
                self.notes.push(SelectionNote::NotFound { selection });
                return;
            }
            Err(e) => {
                self.notes.push(SelectionNote::LoadFailed {
                    selection,
                    message: format!("{:#}", e),
                });
                return;
            }
        };

        let source = file_label(&path);
        match trace::load_path(&path, SignalKind::Voltage, self.config.parse_mode) {
            Ok(series) => {
                if series.is_empty() {
                    self.notes.push(SelectionNote::NoData {
                        selection,
                        source: source.clone(),
                    });
                }
                if series.rejected_rows > 0 {
                    log::warn!("{}: dropped {} malformed rows", source, series.rejected_rows);
                }
                let summary = trace::summarize(&series.samples);
                // Empty series still get a chart entry; the chart renders
                // with no points next to the "no data" note.
                self.loaded.push(LoadedSeries {
                    source,
                    group: channel.to_string(),
                    legend: signal.to_string(),
                    series,
                    summary,
                });
            }
            Err(e) => {
                self.notes.push(SelectionNote::LoadFailed {
                    selection,
                    message: e.to_string(),
                });
            }
        }
    }

    /// Let the user pick log files directly, bypassing the catalog lookup.
    pub fn open_files(&mut self) {
        let mut dialog = rfd::FileDialog::new().add_filter("log", &["txt", "log"]);
        if let Some(dir) = &self.last_open_dir {
            dialog = dialog.set_directory(dir);
        }
        let Some(files) = dialog.pick_files() else {
            return;
        };

        self.hint = None;
        for file in files {
            // Remember directory for next time
            if let Some(parent) = file.parent() {
                self.last_open_dir = Some(parent.to_string_lossy().to_string());
            }
            let name = file_label(&file);
            if trace::is_error_companion(&name) {
                log::info!("Skipping error log companion {}", name);
                continue;
            }
            self.add_parameter_file(&file, name);
        }
    }

    /// Parse one directly opened file as a generic parameter trace.
    fn add_parameter_file(&mut self, path: &Path, name: String) {
        let result = trace::load_path(path, SignalKind::Parameter, self.config.parse_mode);
        self.push_parameter_series(name, result);
    }

    /// Record the outcome of a parameter-trace parse under its file name.
    fn push_parameter_series(
        &mut self,
        name: String,
        result: Result<trace::TraceSeries, trace::TraceError>,
    ) {
        match result {
            Ok(series) => {
                if series.is_empty() {
                    self.notes.push(SelectionNote::NoData {
                        selection: name.clone(),
                        source: name.clone(),
                    });
                }
                if series.rejected_rows > 0 {
                    log::warn!("{}: dropped {} malformed rows", name, series.rejected_rows);
                }
                let summary = trace::summarize(&series.samples);
                let legend = series.kind.column_name().to_string();
                self.loaded.push(LoadedSeries {
                    source: name.clone(),
                    group: name,
                    legend,
                    series,
                    summary,
                });
            }
            Err(e) => {
                self.notes.push(SelectionNote::LoadFailed {
                    selection: name,
                    message: e.to_string(),
                });
            }
        }
    }

    /// Accept log files dropped onto the window.
    ///
    /// Native drops carry a path; web drops carry raw bytes. Both go
    /// through the same parameter-trace route as the file chooser.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(path) = &file.path {
                let name = file_label(path);
                if trace::is_error_companion(&name) {
                    log::info!("Skipping error log companion {}", name);
                    continue;
                }
                self.add_parameter_file(path, name);
            } else if let Some(bytes) = &file.bytes {
                let name = file.name.clone();
                if trace::is_error_companion(&name) {
                    log::info!("Skipping error log companion {}", name);
                    continue;
                }
                let result = trace::parser::parse_reader(
                    &bytes[..],
                    SignalKind::Parameter,
                    self.config.parse_mode,
                );
                self.push_parameter_series(name, result);
            }
        }
    }

    /// Drop all displayed series and notes.
    pub fn clear(&mut self) {
        self.loaded.clear();
        self.notes.clear();
        self.hint = None;
    }
}

/// File name for display, falling back to the full path.
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

impl eframe::App for AppState {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedSettings {
            last_open_dir: self.last_open_dir.clone(),
        };
        eframe::set_value(storage, "app_settings", &settings);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // Panels layout: top (selection), right (statistics), charts fill
        // the remaining space using CentralPanel.
        top_panel::render(ctx, self);
        stats_panel::render(ctx, self);
        charts_panel::render(ctx, self);
    }
}

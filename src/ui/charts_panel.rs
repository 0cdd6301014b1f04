//! # Charts Panel - Trace Line Charts
//!
//! Renders one line chart per group (receiver channel for selection
//! lookups, file name for directly opened files), with one line per
//! signal. The x axis carries the sample timestamps; tick labels are
//! truncated to `HH:MM` like the coarse time field of the samples.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use super::app_state::AppState;
use crate::trace::Sample;

/// Fixed chart height; the panel scrolls when more charts are loaded.
const CHART_HEIGHT: f32 = 280.0;

/// Render the central charts area.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if state.loaded.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    "Pick a coil, channels and signals, then press Graph.\n\
                     Log files can also be opened or dropped onto the window.",
                );
            });
            return;
        }

        // One chart per group, in first-seen order.
        let mut groups: Vec<&str> = Vec::new();
        for entry in &state.loaded {
            if !groups.contains(&entry.group.as_str()) {
                groups.push(&entry.group);
            }
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for group in groups {
                let entries: Vec<_> = state
                    .loaded
                    .iter()
                    .filter(|entry| entry.group == group)
                    .collect();

                ui.heading(group);
                let y_label = entries
                    .first()
                    .map(|entry| entry.series.kind.column_name())
                    .unwrap_or_default();

                Plot::new(format!("chart_{}", group))
                    .legend(Legend::default())
                    .height(CHART_HEIGHT)
                    .y_axis_label(y_label)
                    .x_axis_formatter(|mark, _range| format_axis_time(mark.value))
                    .show(ui, |plot_ui| {
                        for entry in &entries {
                            let points: PlotPoints = entry
                                .series
                                .samples
                                .iter()
                                .map(|sample| [timestamp_seconds(sample), sample.value])
                                .collect();
                            plot_ui.line(Line::new(entry.legend.clone(), points));
                        }
                    });
                ui.add_space(12.0);
            }
        });
    });
}

/// Sample timestamp as fractional seconds for the plot x axis.
fn timestamp_seconds(sample: &Sample) -> f64 {
    sample.datetime.and_utc().timestamp_micros() as f64 / 1e6
}

/// Axis tick label: time of day truncated to hour and minute.
fn format_axis_time(value: f64) -> String {
    chrono::DateTime::from_timestamp(value as i64, 0)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}

//! # Statistics Panel - Summary Table and Notes
//!
//! Right-side panel with one table row per loaded series (count, mean,
//! min, max) and a notes list underneath for selections that produced no
//! normal series: missing files, load failures and empty results each
//! render in their own style.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use super::{SelectionNote, app_state::AppState};

/// Render the right panel with statistics and notes.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::right("stats_panel")
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.heading("Statistics");
            ui.separator();

            if state.loaded.is_empty() {
                ui.label("No data loaded.");
            } else {
                render_table(ui, state);
            }

            if !state.notes.is_empty() {
                ui.add_space(8.0);
                ui.heading("Notes");
                ui.separator();
                for note in &state.notes {
                    render_note(ui, note);
                }
            }
        });
}

fn render_table(ui: &mut egui::Ui, state: &AppState) {
    let row_height = ui.text_style_height(&egui::TextStyle::Body) * 1.3;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(120.0)) // Source
        .column(Column::initial(70.0).at_least(50.0)) // Series
        .column(Column::initial(55.0).at_least(40.0)) // Count
        .column(Column::initial(55.0).at_least(45.0)) // Mean
        .column(Column::initial(55.0).at_least(45.0)) // Min
        .column(Column::initial(55.0).at_least(45.0)) // Max
        .header(row_height, |mut header| {
            header.col(|ui| {
                ui.strong("Source");
            });
            header.col(|ui| {
                ui.strong("Series");
            });
            header.col(|ui| {
                ui.strong("Count");
            });
            header.col(|ui| {
                ui.strong("Mean");
            });
            header.col(|ui| {
                ui.strong("Min");
            });
            header.col(|ui| {
                ui.strong("Max");
            });
        })
        .body(|mut body| {
            for entry in &state.loaded {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(&entry.source);
                    });
                    row.col(|ui| {
                        ui.label(&entry.legend);
                    });
                    match entry.summary {
                        Some(summary) => {
                            row.col(|ui| {
                                ui.label(summary.count.to_string());
                            });
                            row.col(|ui| {
                                ui.label(format!("{:.2}", summary.mean));
                            });
                            row.col(|ui| {
                                ui.label(format!("{:.2}", summary.min));
                            });
                            row.col(|ui| {
                                ui.label(format!("{:.2}", summary.max));
                            });
                        }
                        None => {
                            row.col(|ui| {
                                ui.label("0");
                            });
                            for _ in 0..3 {
                                row.col(|ui| {
                                    ui.label("-");
                                });
                            }
                        }
                    }
                });
            }
        });
}

fn render_note(ui: &mut egui::Ui, note: &SelectionNote) {
    match note {
        SelectionNote::NotFound { selection } => {
            ui.colored_label(
                egui::Color32::ORANGE,
                format!("No matching file found for {}.", selection),
            );
        }
        SelectionNote::LoadFailed { selection, message } => {
            ui.colored_label(
                egui::Color32::RED,
                format!("Error: {} ({})", message, selection),
            );
        }
        SelectionNote::NoData { selection, source } => {
            ui.colored_label(
                egui::Color32::GRAY,
                format!("No data for {} ({}).", selection, source),
            );
        }
    }
}

//! # Top Panel - Selection and Controls
//!
//! Renders the coil dropdown, the channel and signal check sets, and the
//! action buttons. Selections only take effect when the user presses
//! Graph; until then nothing is read from disk.

use eframe::egui;

use super::app_state::AppState;

/// Render the top panel with the selection widgets and buttons.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("selection_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.heading("MRI Coil Trace Analyzer");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Coil:");
            let coils = state.config.coils.clone();
            let selected_text = state
                .selected_coil
                .clone()
                .unwrap_or_else(|| "Select the coil".to_string());
            egui::ComboBox::from_id_salt("coil_selector")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for coil in coils {
                        ui.selectable_value(&mut state.selected_coil, Some(coil.clone()), coil);
                    }
                });

            ui.separator();
            ui.label("Channels:");
            let channels = state.config.channels.clone();
            for (i, channel) in channels.iter().enumerate() {
                ui.checkbox(&mut state.channel_checked[i], channel);
            }

            ui.separator();
            ui.label("Signals:");
            let signals = state.config.signals.clone();
            for (i, signal) in signals.iter().enumerate() {
                ui.checkbox(&mut state.signal_checked[i], signal);
            }
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Graph").clicked() {
                state.run_graph();
            }
            if ui.button("Open files…").clicked() {
                state.open_files();
            }
            if ui.button("Clear").clicked() {
                state.clear();
            }

            if let Some(hint) = &state.hint {
                ui.label(egui::RichText::new(hint).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "Data directory: {}",
                        state.config.data_dir.display()
                    ))
                    .weak(),
                );
            });
        });
        ui.add_space(4.0);
    });
}

//! Header bar with status, last clicked point, and view controls

use eframe::egui;

use super::ViewerApp;
use crate::load_state::LoadState;
use crate::theme::colors;

/// Header buttons are applied after the panel closure returns
pub(crate) enum HeaderAction {
    ResetView,
    Reload,
}

impl ViewerApp {
    pub(crate) fn render_header(&self, ui: &mut egui::Ui) -> Option<HeaderAction> {
        let mut action = None;
        let slot = self.load.borrow();
        let state = slot.state();

        ui.horizontal(|ui| {
            let (status_color, status_text) = match state {
                LoadState::Loading | LoadState::Loaded(_) => (colors::STATUS_PENDING, "Loading..."),
                LoadState::Ready { .. } => (colors::STATUS_OK, "Loaded"),
                LoadState::Failed(_) => (colors::STATUS_ERROR, "Error"),
            };
            ui.colored_label(status_color, egui::RichText::new(status_text).size(11.0));

            ui.add_space(10.0);
            ui.label(
                egui::RichText::new(&self.config.source_uri)
                    .color(colors::TEXT_SECONDARY)
                    .monospace()
                    .size(11.0),
            );

            match state {
                LoadState::Ready { points } => {
                    ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED).size(11.0));
                    ui.label(
                        egui::RichText::new(format!("{points} points"))
                            .color(colors::TEXT_MUTED)
                            .monospace()
                            .size(11.0),
                    );
                }
                LoadState::Failed(reason) => {
                    ui.label(
                        egui::RichText::new(reason)
                            .color(colors::STATUS_ERROR)
                            .monospace()
                            .size(11.0),
                    );
                }
                _ => {}
            }

            if let Some(detail) = &self.last_detail {
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED).size(11.0));
                ui.label(
                    egui::RichText::new(format!("#{} {}", detail.index, detail.label))
                        .color(colors::TEXT_PRIMARY)
                        .monospace()
                        .size(11.0),
                );
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(egui::RichText::new("Reload").size(11.0)).clicked() {
                    action = Some(HeaderAction::Reload);
                }
                if ui.button(egui::RichText::new("Reset view").size(11.0)).clicked() {
                    action = Some(HeaderAction::ResetView);
                }
            });
        });

        action
    }
}

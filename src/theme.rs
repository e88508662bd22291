//! Dark theme for the scatter viewer

use egui::Color32;

/// Near-black backgrounds, grey chrome; the data carries all the color
pub mod colors {
    use super::Color32;

    pub const BG_PRIMARY: Color32 = Color32::from_rgb(0, 0, 0);
    pub const PLOT_BG: Color32 = Color32::from_rgb(8, 8, 12);
    pub const BG_HOVER: Color32 = Color32::from_rgb(24, 24, 24);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 160);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(96, 96, 96);

    pub const BOX_LINE: Color32 = Color32::from_rgb(48, 48, 56);
    pub const BORDER: Color32 = Color32::from_rgb(40, 40, 40);

    pub const STATUS_OK: Color32 = Color32::from_rgb(100, 200, 100);
    pub const STATUS_PENDING: Color32 = Color32::from_rgb(200, 200, 100);
    pub const STATUS_ERROR: Color32 = Color32::from_rgb(200, 100, 100);
}

pub fn viewer_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = PLOT_BG;
    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.inactive.bg_fill = BG_PRIMARY;
    visuals.widgets.inactive.weak_bg_fill = BG_PRIMARY;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.widgets.hovered.bg_fill = BG_HOVER;
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}

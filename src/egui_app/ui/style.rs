//! Palette and shared visual helpers for the board UI.

use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

/// Named colors used across the renderer.
#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    /// Section header fill.
    pub section_indigo: Color32,
    /// Card fill.
    pub card_purple: Color32,
    pub card_purple_hover: Color32,
    pub accent_ice: Color32,
    pub warning: Color32,
    pub success: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(14, 13, 18),
        bg_secondary: Color32::from_rgb(26, 24, 34),
        panel_outline: Color32::from_rgb(46, 42, 60),
        text_primary: Color32::from_rgb(222, 220, 232),
        text_muted: Color32::from_rgb(148, 144, 162),
        section_indigo: Color32::from_rgb(66, 64, 150),
        card_purple: Color32::from_rgb(94, 63, 142),
        card_purple_hover: Color32::from_rgb(110, 76, 162),
        accent_ice: Color32::from_rgb(167, 217, 255),
        warning: Color32::from_rgb(212, 150, 96),
        success: Color32::from_rgb(102, 176, 136),
    }
}

/// Tone of the footer status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Warning,
    Error,
}

/// Badge label and color for a status tone.
pub fn status_badge(tone: StatusTone) -> (String, Color32) {
    let palette = palette();
    match tone {
        StatusTone::Idle => ("Idle".into(), Color32::from_rgb(58, 56, 70)),
        StatusTone::Info => ("Info".into(), palette.success),
        StatusTone::Warning => ("Warning".into(), palette.warning),
        StatusTone::Error => ("Error".into(), Color32::from_rgb(198, 96, 96)),
    }
}

/// Apply the app look on top of the stock dark visuals.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.warning;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.bg_secondary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_ice);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    soften(&mut visuals.widgets.inactive, palette);
    soften(&mut visuals.widgets.hovered, palette);
    soften(&mut visuals.widgets.active, palette);
    soften(&mut visuals.widgets.open, palette);
    visuals.popup_shadow = Shadow::NONE;
    visuals.menu_corner_radius = CornerRadius::same(4);
}

fn soften(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(4);
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Outline painted on the card or section the drag is currently over.
pub fn drop_target_stroke() -> Stroke {
    Stroke::new(2.0, Color32::from_rgba_unmultiplied(167, 217, 255, 200))
}

/// Left-edge marker for the selected card.
pub fn selection_marker_fill() -> Color32 {
    palette().accent_ice
}

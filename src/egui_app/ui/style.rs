use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::view_model::ConfidenceTier;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub grid_strong: Color32,
    pub grid_soft: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_emerald: Color32,
    pub accent_ice: Color32,
    pub accent_violet: Color32,
    pub caution: Color32,
    pub warning: Color32,
    pub danger: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(10, 12, 14),
        bg_secondary: Color32::from_rgb(24, 27, 31),
        bg_tertiary: Color32::from_rgb(38, 42, 48),
        panel_outline: Color32::from_rgb(44, 50, 58),
        grid_strong: Color32::from_rgb(70, 76, 84),
        grid_soft: Color32::from_rgb(34, 38, 44),
        text_primary: Color32::from_rgb(200, 206, 212),
        text_muted: Color32::from_rgb(140, 146, 155),
        accent_emerald: Color32::from_rgb(16, 185, 129),
        accent_ice: Color32::from_rgb(136, 132, 216),
        accent_violet: Color32::from_rgb(175, 25, 255),
        caution: Color32::from_rgb(234, 179, 8),
        warning: Color32::from_rgb(249, 115, 22),
        danger: Color32::from_rgb(220, 38, 38),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_ice;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.danger;
    visuals.warn_fg_color = palette.caution;
    visuals.selection.bg_fill = palette.grid_soft;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_emerald);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rectilinear(&mut visuals.widgets.inactive, palette);
    set_rectilinear(&mut visuals.widgets.hovered, palette);
    set_rectilinear(&mut visuals.widgets.active, palette);
    set_rectilinear(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_rectilinear(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.grid_soft;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn card_border() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

pub fn card_fill() -> Color32 {
    palette().bg_primary
}

/// Tone of the footer status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

pub fn status_badge_label(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Idle => "Idle",
        StatusTone::Busy => "Loading",
        StatusTone::Info => "Info",
        StatusTone::Warning => "Warning",
        StatusTone::Error => "Error",
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(42, 42, 42),
        StatusTone::Busy => Color32::from_rgb(31, 139, 255),
        StatusTone::Info => Color32::from_rgb(64, 140, 112),
        StatusTone::Warning => Color32::from_rgb(192, 138, 43),
        StatusTone::Error => Color32::from_rgb(192, 57, 43),
    }
}

pub fn confidence_color(tier: ConfidenceTier) -> Color32 {
    let palette = palette();
    match tier {
        ConfidenceTier::High => palette.accent_emerald,
        ConfidenceTier::Moderate => palette.caution,
        ConfidenceTier::Low => palette.warning,
    }
}

/// Slice colors for categorical charts, cycled by index.
pub const SERIES_COLORS: [Color32; 6] = [
    Color32::from_rgb(0, 136, 254),
    Color32::from_rgb(0, 196, 159),
    Color32::from_rgb(255, 187, 40),
    Color32::from_rgb(255, 128, 66),
    Color32::from_rgb(175, 25, 255),
    Color32::from_rgb(255, 25, 175),
];

pub fn series_color(index: usize) -> Color32 {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

pub fn train_bar_color() -> Color32 {
    Color32::from_rgb(136, 132, 216)
}

pub fn test_bar_color() -> Color32 {
    Color32::from_rgb(130, 202, 157)
}

/// Heat color for a cell holding `fraction` of the grid maximum.
pub fn heat_color(fraction: f32) -> Color32 {
    let palette = palette();
    let t = fraction.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(
        lerp(palette.grid_soft.r(), palette.accent_emerald.r()),
        lerp(palette.grid_soft.g(), palette.accent_emerald.g()),
        lerp(palette.grid_soft.b(), palette.accent_emerald.b()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_color_spans_grid_to_accent() {
        let palette = palette();
        assert_eq!(heat_color(0.0), palette.grid_soft);
        assert_eq!(heat_color(1.0), palette.accent_emerald);
        assert_eq!(heat_color(7.0), palette.accent_emerald);
    }

    #[test]
    fn series_colors_cycle() {
        assert_eq!(series_color(0), series_color(SERIES_COLORS.len()));
    }
}

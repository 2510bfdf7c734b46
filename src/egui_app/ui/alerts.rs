use eframe::egui::{self, Frame, Margin, RichText, Stroke};

use super::style;

/// Non-blocking notice shown when a page displays sample data.
pub(crate) fn fallback_banner(ui: &mut egui::Ui, what: &str, error: &str) {
    let palette = style::palette();
    banner(ui, palette.caution, |ui| {
        ui.label(RichText::new("API unavailable").strong().color(palette.caution));
        ui.label(format!(
            "Could not reach the model API. Showing example {what} for demonstration."
        ));
        ui.label(
            RichText::new(format!("Error: {error}"))
                .small()
                .color(palette.text_muted),
        );
    });
}

pub(crate) fn error_banner(ui: &mut egui::Ui, message: &str) {
    let palette = style::palette();
    banner(ui, palette.danger, |ui| {
        ui.label(RichText::new("Error").strong().color(palette.danger));
        ui.label(message);
    });
}

pub(crate) fn notice_banner(ui: &mut egui::Ui, title: &str, message: &str) {
    let palette = style::palette();
    banner(ui, palette.caution, |ui| {
        ui.label(RichText::new(title).strong().color(palette.caution));
        ui.label(message);
    });
}

fn banner(ui: &mut egui::Ui, accent: egui::Color32, add_contents: impl FnOnce(&mut egui::Ui)) {
    Frame::new()
        .fill(style::card_fill())
        .stroke(Stroke::new(1.0, accent))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
    ui.add_space(8.0);
}

/// Centered spinner with a caption.
pub(crate) fn loading(ui: &mut egui::Ui, caption: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(caption);
    });
}

use eframe::egui::{self, RichText};

use super::{DashboardApp, alerts, card, page_heading, style};
use crate::egui_app::view_model::{self, PredictionCard};

impl DashboardApp {
    pub(super) fn render_demo_page(&mut self, ui: &mut egui::Ui) {
        page_heading(ui, "Interactive Demo", None);
        let mut submit = false;
        card(ui, |ui| {
            let demo = &mut self.controller.ui.demo;
            ui.label(RichText::new("Classify a New Article").strong().size(16.0));
            ui.add_space(6.0);
            ui.label("Article title");
            ui.add(
                egui::TextEdit::singleline(&mut demo.title)
                    .hint_text("The role of...")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);
            ui.label("Article abstract");
            ui.add(
                egui::TextEdit::multiline(&mut demo.abstract_text)
                    .hint_text("This study investigates...")
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);
            let label = if demo.submitting {
                "Classifying..."
            } else {
                "Classify Article"
            };
            let button = egui::Button::new(RichText::new(label).strong())
                .fill(style::palette().accent_emerald.gamma_multiply(0.6))
                .min_size(egui::vec2(ui.available_width(), 30.0));
            submit = ui.add_enabled(demo.can_submit(), button).clicked();
        });
        if submit {
            self.controller.submit_prediction();
        }

        let demo = &self.controller.ui.demo;
        if let Some(error) = &demo.last_error {
            ui.add_space(8.0);
            alerts::error_banner(ui, error);
        }
        let Some(prediction) = &demo.prediction else {
            return;
        };
        ui.add_space(12.0);
        ui.label(RichText::new("Classification Results").strong().size(18.0));
        ui.add_space(6.0);
        let ranked = view_model::rank_predictions(prediction, &demo.submitted_text);
        if ranked.low_confidence {
            alerts::notice_banner(
                ui,
                "Low confidence detected",
                "This article is a good candidate for review and retraining.",
            );
        }
        if let Some(mismatch) = ranked.mismatch {
            alerts::notice_banner(
                ui,
                "Incomplete response",
                &format!(
                    "The API returned {} labels and {} confidence scores; unmatched entries are not shown.",
                    mismatch.labels, mismatch.confidences
                ),
            );
        }
        if ranked.cards.is_empty() {
            ui.label(
                RichText::new("The model did not assign any category with enough confidence.")
                    .color(style::palette().text_muted),
            );
            return;
        }
        for pair in ranked.cards.chunks(2) {
            ui.columns(2, |columns| {
                for (column, prediction_card) in columns.iter_mut().zip(pair) {
                    render_prediction_card(column, prediction_card);
                }
            });
            ui.add_space(8.0);
        }
    }
}

fn render_prediction_card(ui: &mut egui::Ui, prediction: &PredictionCard) {
    let color = style::confidence_color(prediction.tier);
    card(ui, |ui| {
        ui.label(RichText::new(&prediction.label).size(18.0).strong());
        ui.label(RichText::new(prediction.tier.label()).color(color));
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Model confidence").color(style::palette().text_muted));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(&prediction.percent_text)
                        .size(17.0)
                        .strong()
                        .color(color),
                );
            });
        });
        ui.add(
            egui::ProgressBar::new(prediction.confidence.clamp(0.0, 1.0) as f32)
                .fill(style::palette().accent_emerald)
                .desired_height(10.0),
        );
        if !prediction.keywords.is_empty() {
            ui.add_space(6.0);
            ui.label(RichText::new("Possible influential keywords").small());
            ui.horizontal_wrapped(|ui| {
                for word in &prediction.keywords {
                    ui.label(
                        RichText::new(format!(" {word} "))
                            .background_color(style::palette().bg_tertiary),
                    );
                }
            });
        }
    });
}

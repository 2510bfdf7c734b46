use eframe::egui::{self, RichText};

use super::{DashboardApp, card, page_heading, style};
use crate::samples::SAMPLE_CLASSES;

const PROJECT_URL: &str = "https://github.com/jdrincone/ia_medical_classifier_fullstack";

impl DashboardApp {
    pub(super) fn render_summary_page(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let mut open_docs = false;
        page_heading(ui, "Project Summary", None);
        card(ui, |ui| {
            ui.label(
                RichText::new("Medical Classifier with Artificial Intelligence")
                    .size(18.0)
                    .color(palette.accent_emerald),
            );
            ui.label(
                RichText::new("Automatic classification of medical literature")
                    .color(palette.text_muted),
            );
            ui.add_space(8.0);
            ui.label(
                "This tool uses a high-performance model built on semantic embeddings to \
                 classify medical articles into the following specialties:",
            );
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                for (index, class) in SAMPLE_CLASSES.iter().enumerate() {
                    ui.label(
                        RichText::new(format!("  {class}  "))
                            .color(style::series_color(index))
                            .background_color(palette.bg_tertiary),
                    );
                }
            });
            ui.add_space(8.0);
            ui.label(RichText::new("Main goal").strong());
            ui.label(
                "Speed up medical literature review so researchers and health professionals \
                 can quickly find documents relevant to their specialty.",
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(
                    "Use the menu on the left to explore the data, try the model live and \
                     inspect its performance metrics.",
                )
                .color(palette.text_muted),
            );
        });
        ui.add_space(12.0);
        card(ui, |ui| {
            ui.label(RichText::new("Links").strong());
            ui.horizontal(|ui| {
                ui.hyperlink_to("Source repository", PROJECT_URL);
                ui.separator();
                if ui
                    .link("API documentation")
                    .on_hover_text(&self.controller.ui.api_docs_url)
                    .clicked()
                {
                    open_docs = true;
                }
            });
        });
        if open_docs {
            self.controller.open_api_docs();
        }
    }
}

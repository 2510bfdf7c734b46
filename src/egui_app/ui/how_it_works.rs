use eframe::egui::{self, Color32, RichText};

use super::{DashboardApp, card, page_heading, style};

struct Phase {
    title: &'static str,
    steps: [&'static str; 3],
    arrows: [&'static str; 2],
    accent: Color32,
}

fn phases() -> [Phase; 3] {
    let palette = style::palette();
    [
        Phase {
            title: "Phase 1: Training (offline)",
            steps: ["CSV data", "Training script", "Model artifacts (.pkl)"],
            arrows: ["->", "->"],
            accent: palette.accent_ice,
        },
        Phase {
            title: "Phase 2: Backend service (online)",
            steps: ["Model artifacts (.pkl)", "API server (FastAPI)", "Internet"],
            arrows: ["->", "<->"],
            accent: palette.accent_emerald,
        },
        Phase {
            title: "Phase 3: Dashboard interaction (online)",
            steps: ["User", "Desktop dashboard", "API server (FastAPI)"],
            arrows: ["<->", "<->"],
            accent: palette.accent_violet,
        },
    ]
}

impl DashboardApp {
    pub(super) fn render_how_it_works_page(&mut self, ui: &mut egui::Ui) {
        page_heading(ui, "Architecture and Workflow", None);
        card(ui, |ui| {
            ui.label(RichText::new("Key concept: semantic embeddings").strong().size(16.0));
            ui.label(
                "The classifier turns each article into embeddings produced by a large \
                 language model, capturing context and meaning instead of counting words \
                 like traditional methods.",
            );
        });
        ui.add_space(12.0);
        ui.label(RichText::new("End-to-end system flow").strong().size(16.0));
        ui.add_space(6.0);
        for phase in phases() {
            card(ui, |ui| {
                ui.label(RichText::new(phase.title).strong().color(phase.accent));
                ui.add_space(6.0);
                ui.horizontal_wrapped(|ui| {
                    for (index, step) in phase.steps.iter().enumerate() {
                        ui.label(
                            RichText::new(format!(" {step} "))
                                .monospace()
                                .background_color(style::palette().bg_tertiary),
                        );
                        if let Some(arrow) = phase.arrows.get(index) {
                            ui.label(RichText::new(*arrow).monospace().color(phase.accent));
                        }
                    }
                });
            });
            ui.add_space(8.0);
        }
    }
}

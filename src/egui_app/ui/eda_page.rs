use eframe::egui::{self, RichText};

use super::{DashboardApp, alerts, card, charts, page_heading, style};
use crate::api::EdaData;
use crate::egui_app::state::SlotView;
use crate::egui_app::view_model;

impl DashboardApp {
    pub(super) fn render_eda_page(&mut self, ui: &mut egui::Ui) {
        page_heading(
            ui,
            "Exploratory Data Analysis",
            Some("Understanding the shape of the dataset to inform model development."),
        );
        match self.controller.ui.eda.view() {
            SlotView::Idle => {
                alerts::error_banner(ui, "Exploratory data analysis could not be loaded.")
            }
            SlotView::Loading => alerts::loading(ui, "Loading data analysis..."),
            SlotView::Ready {
                data,
                fallback_warning,
            } => {
                if let Some(error) = fallback_warning {
                    alerts::fallback_banner(ui, "data", error);
                }
                render_eda_content(ui, data);
            }
        }
    }
}

fn render_eda_content(ui: &mut egui::Ui, data: &EdaData) {
    let palette = style::palette();
    let cards = view_model::eda_summary_cards(&data.general_stats);
    ui.columns(cards.len(), |columns| {
        for (column, stat) in columns.iter_mut().zip(cards.iter()) {
            card(column, |ui| {
                ui.label(RichText::new(stat.title).color(palette.text_muted));
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&stat.value).size(30.0).strong());
                    if let Some(unit) = stat.unit {
                        ui.label(unit);
                    }
                });
            });
        }
    });
    ui.add_space(12.0);
    ui.columns(2, |columns| {
        card(&mut columns[0], |ui| {
            ui.label(RichText::new("Label Distribution").strong());
            ui.label(RichText::new("Number of articles per category.").color(palette.text_muted));
            let bars = view_model::count_bars(&data.label_distribution);
            charts::bar_chart(ui, &bars, 280.0, style::test_bar_color());
        });
        card(&mut columns[1], |ui| {
            ui.label(RichText::new("Abstract Length Distribution").strong());
            ui.label(RichText::new("Number of articles per text length.").color(palette.text_muted));
            let slices = view_model::pie_slices(&data.length_distribution);
            charts::pie_chart(ui, &slices, 100.0);
        });
    });
    if let Some(grid) =
        view_model::co_occurrence_grid(&data.co_occurrence_matrix, &data.label_distribution)
    {
        ui.add_space(12.0);
        card(ui, |ui| {
            ui.label(RichText::new("Label Co-occurrence").strong());
            ui.label(
                RichText::new("Articles tagged with both the row and column label.")
                    .color(palette.text_muted),
            );
            ui.add_space(6.0);
            charts::heat_grid(ui, &grid, 56.0);
        });
    }
}

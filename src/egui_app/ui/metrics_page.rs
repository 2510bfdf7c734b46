use eframe::egui::{self, Color32, RichText};

use super::{DashboardApp, alerts, card, charts, page_heading, style};
use crate::api::EvaluationArtifacts;
use crate::egui_app::state::SlotView;
use crate::egui_app::view_model::{self, ClassDetail, ConfusionQuadrants};

impl DashboardApp {
    pub(super) fn render_metrics_page(&mut self, ui: &mut egui::Ui) {
        page_heading(ui, "Model Metrics", None);
        let mut selection = None;
        match self.controller.ui.artifacts.view() {
            SlotView::Idle => alerts::error_banner(ui, "Performance data could not be loaded."),
            SlotView::Loading => alerts::loading(ui, "Loading evaluation artifacts..."),
            SlotView::Ready {
                data,
                fallback_warning,
            } => {
                if let Some(error) = fallback_warning {
                    alerts::fallback_banner(ui, "metrics", error);
                }
                let selected = self.controller.ui.metrics.selected_class.as_deref();
                selection = render_metrics_content(ui, data, selected);
            }
        }
        if let Some(name) = selection {
            self.controller.select_metrics_class(&name);
        }
    }
}

/// Draw the metrics page body and return a newly picked class, if any.
fn render_metrics_content(
    ui: &mut egui::Ui,
    artifacts: &EvaluationArtifacts,
    selected: Option<&str>,
) -> Option<String> {
    let palette = style::palette();
    let summary = view_model::metrics_summary(artifacts);
    ui.columns(3, |columns| {
        summary_card(
            &mut columns[0],
            "F1-Score (test)",
            "Balance between precision and recall",
            summary.test_f1.as_deref().unwrap_or("n/a"),
            palette.accent_emerald,
        );
        summary_card(
            &mut columns[1],
            "Number of Classes",
            "Classification categories",
            &summary.class_count.to_string(),
            palette.text_primary,
        );
        summary_card(
            &mut columns[2],
            "Base Model",
            "Vectorization technology",
            summary.embedding,
            palette.text_primary,
        );
    });
    ui.add_space(12.0);
    card(ui, |ui| {
        ui.label(RichText::new("Overfitting Analysis").strong());
        ui.label(
            RichText::new(
                "F1-score comparison. A Training bar much higher than its Test bar is a sign of overfitting.",
            )
            .color(palette.text_muted),
        );
        let rows = view_model::overfitting_rows(artifacts);
        charts::grouped_bar_chart(ui, &rows, 320.0);
    });
    ui.add_space(12.0);

    if artifacts.class_names.is_empty() {
        alerts::notice_banner(ui, "No classes", "The evaluation artifacts list no classes.");
        return None;
    }
    let mut picked = None;
    card(ui, |ui| {
        ui.label(RichText::new("Per-Category Analysis").strong());
        ui.label(
            RichText::new("Pick a category to see its confusion matrix and ROC curve.")
                .color(palette.text_muted),
        );
        let detail = view_model::class_detail(artifacts, selected);
        let current = detail
            .as_ref()
            .map(|detail| detail.class_name.clone())
            .unwrap_or_default();
        egui::ComboBox::from_id_salt("metrics_class")
            .selected_text(current.as_str())
            .width(240.0)
            .show_ui(ui, |ui| {
                for name in &artifacts.class_names {
                    if ui.selectable_label(*name == current, name).clicked() {
                        picked = Some(name.clone());
                    }
                }
            });
        ui.add_space(8.0);
        if let Some(detail) = detail {
            render_class_detail(ui, &detail);
        }
    });
    picked
}

fn summary_card(ui: &mut egui::Ui, title: &str, subtitle: &str, value: &str, color: Color32) {
    card(ui, |ui| {
        ui.label(RichText::new(title).strong());
        ui.label(RichText::new(subtitle).small().color(style::palette().text_muted));
        ui.label(RichText::new(value).size(28.0).strong().color(color));
    });
}

fn render_class_detail(ui: &mut egui::Ui, detail: &ClassDetail) {
    let palette = style::palette();
    if detail.curve_mismatch {
        alerts::notice_banner(
            ui,
            "Incomplete curve data",
            "Curve coordinate lists differ in length; extra points are not shown.",
        );
    }
    ui.columns(2, |columns| {
        let ui = &mut columns[0];
        ui.label(RichText::new(format!("Confusion matrix for: {}", detail.class_name)).strong());
        ui.add_space(4.0);
        match detail.confusion {
            Some(quadrants) => confusion_grid(ui, quadrants),
            None => {
                ui.label(
                    RichText::new("No confusion matrix for this class.").color(palette.text_muted),
                );
            }
        }

        let ui = &mut columns[1];
        let auc = detail
            .auc
            .map(|auc| format!("{auc:.3}"))
            .unwrap_or_else(|| "n/a".to_string());
        ui.label(RichText::new(format!("ROC curve (AUC: {auc})")).strong());
        if detail.roc_points.is_empty() {
            ui.label(RichText::new("No ROC curve for this class.").color(palette.text_muted));
        } else {
            charts::unit_line_chart(
                ui,
                &detail.roc_points,
                230.0,
                ("False positive rate", "True positive rate"),
                palette.accent_ice,
                true,
            );
        }
        if !detail.pr_points.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new("Precision-recall curve").strong());
            charts::unit_line_chart(
                ui,
                &detail.pr_points,
                200.0,
                ("Recall", "Precision"),
                palette.accent_emerald,
                false,
            );
        }
    });
}

fn confusion_grid(ui: &mut egui::Ui, quadrants: ConfusionQuadrants) {
    let cells = [
        (
            "True positives (TP)",
            quadrants.true_positive,
            Color32::from_rgb(22, 101, 52),
        ),
        (
            "False positives (FP)",
            quadrants.false_positive,
            Color32::from_rgb(127, 29, 29),
        ),
        (
            "False negatives (FN)",
            quadrants.false_negative,
            Color32::from_rgb(124, 45, 18),
        ),
        (
            "True negatives (TN)",
            quadrants.true_negative,
            Color32::from_rgb(30, 58, 138),
        ),
    ];
    egui::Grid::new("confusion_quadrants")
        .spacing(egui::vec2(6.0, 6.0))
        .show(ui, |ui| {
            for (index, (title, value, fill)) in cells.into_iter().enumerate() {
                egui::Frame::new()
                    .fill(fill.gamma_multiply(0.6))
                    .inner_margin(egui::Margin::same(12))
                    .show(ui, |ui| {
                        ui.set_min_width(130.0);
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(title).small());
                            ui.label(RichText::new(value.to_string()).size(24.0).strong());
                        });
                    });
                if index % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

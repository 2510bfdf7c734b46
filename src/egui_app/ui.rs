//! egui renderer for the dashboard.

mod alerts;
pub(crate) mod charts;
mod demo_page;
mod eda_page;
mod how_it_works;
mod metrics_page;
mod nav;
pub mod style;
mod summary;

use std::sync::Arc;
use std::time::Duration;

use eframe::egui::{self, Frame, Margin, RichText};

use crate::api::ClassifierApi;
use crate::config::AppConfig;
use crate::egui_app::controller::DashboardController;
use crate::egui_app::state::Page;

/// Minimum window size that keeps charts legible.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);

/// How often to repaint while requests are in flight.
const IN_FLIGHT_REPAINT: Duration = Duration::from_millis(100);

/// Renders the dashboard using the shared controller state.
pub struct DashboardApp {
    controller: DashboardController,
    visuals_set: bool,
}

impl DashboardApp {
    /// Create the app and start the initial background fetches.
    pub fn new(api: Arc<dyn ClassifierApi>, config: &AppConfig) -> Self {
        let mut controller = DashboardController::new(api, config);
        controller.start_initial_fetch();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 8.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).strong());
                    ui.separator();
                    ui.label(&status.text);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let health = &status.api_health;
                        let response = ui.label(
                            RichText::new(health.label())
                                .color(style::status_badge_color(health.tone())),
                        );
                        if let Some(detail) = health.detail() {
                            response.on_hover_text(detail);
                        }
                        ui.separator();
                        ui.label(
                            RichText::new(&self.controller.ui.api_base_url)
                                .color(palette.text_muted)
                                .small(),
                        );
                    });
                });
            });
    }

    fn render_page(&mut self, ui: &mut egui::Ui) {
        match self.controller.ui.page {
            Page::Summary => self.render_summary_page(ui),
            Page::ExploratoryData => self.render_eda_page(ui),
            Page::Demo => self.render_demo_page(ui),
            Page::ModelMetrics => self.render_metrics_page(ui),
            Page::HowItWorks => self.render_how_it_works_page(ui),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll();
        self.render_status(ctx);
        self.render_nav(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(1200.0);
                    self.render_page(ui);
                });
        });
        if self.controller.any_job_in_flight() {
            ctx.request_repaint_after(IN_FLIGHT_REPAINT);
        }
    }
}

/// Framed block used for every card on the dashboard.
pub(crate) fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    Frame::new()
        .fill(style::card_fill())
        .stroke(style::card_border())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Page heading with an optional muted subtitle.
pub(crate) fn page_heading(ui: &mut egui::Ui, title: &str, subtitle: Option<&str>) {
    ui.add_space(4.0);
    ui.heading(RichText::new(title).strong());
    if let Some(subtitle) = subtitle {
        ui.label(RichText::new(subtitle).color(style::palette().text_muted));
    }
    ui.add_space(10.0);
}

use eframe::egui::{self, RichText};

use super::{DashboardApp, style};
use crate::egui_app::state::Page;

impl DashboardApp {
    pub(super) fn render_nav(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::SidePanel::left("nav")
            .resizable(false)
            .exact_width(220.0)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(
                    RichText::new("Medical Classifier AI")
                        .strong()
                        .size(17.0)
                        .color(palette.accent_emerald),
                );
                ui.add_space(12.0);
                ui.separator();
                let mut clicked = None;
                for page in Page::ORDER {
                    let selected = self.controller.ui.page == page;
                    let response =
                        ui.selectable_label(selected, RichText::new(page.label()).size(14.0));
                    ui.add_space(2.0);
                    if response.clicked() {
                        clicked = Some(page);
                    }
                }
                if let Some(page) = clicked {
                    self.controller.select_page(page);
                }
                ui.add_space(16.0);
                ui.separator();
                let loading = self.controller.data_loading();
                let reload = ui
                    .add_enabled(!loading, egui::Button::new("Reload data"))
                    .on_hover_text("Fetch statistics and evaluation artifacts again");
                if reload.clicked() {
                    self.controller.refresh_remote_data();
                }
                let checking = self.controller.health_check_in_flight();
                if ui
                    .add_enabled(!checking, egui::Button::new("Check API status"))
                    .clicked()
                {
                    self.controller.check_api_health();
                }
                if loading {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("Loading data").color(palette.text_muted));
                    });
                }
            });
    }
}

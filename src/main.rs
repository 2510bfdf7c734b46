//! Entry point for the medical classifier dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::sync::Arc;

use eframe::egui;
use medclass::api::{ClassifierApi, ClassifierClient};
use medclass::config::{self, AppConfig};
use medclass::egui_app::ui::{DashboardApp, MIN_VIEWPORT_SIZE};
use medclass::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match logging::init() {
        Ok(path) => tracing::info!("Logging to {}", path.display()),
        Err(err) => eprintln!("Logging disabled: {err}"),
    }

    let launch = build_client();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Medical Classifier Dashboard")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size(MIN_VIEWPORT_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Medical Classifier Dashboard",
        native_options,
        Box::new(move |_cc| match launch {
            Ok((api, config)) => Ok(Box::new(DashboardApp::new(api, &config))),
            Err(message) => Ok(Box::new(LaunchError { message })),
        }),
    )?;
    Ok(())
}

/// Load settings and build the HTTP client; errors become a launch message.
fn build_client() -> Result<(Arc<dyn ClassifierApi>, AppConfig), String> {
    let config =
        config::load_or_default().map_err(|err| format!("Failed to load config: {err}"))?;
    let base_url = config.resolve_base_url();
    let client = ClassifierClient::new(&base_url)
        .map_err(|err| format!("Cannot use API base URL: {err}"))?
        .with_timeout(config.request_timeout());
    tracing::info!("Using classifier API at {}", client.base_url());
    Ok((Arc::new(client), config))
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start the dashboard");
                ui.label(&self.message);
            });
        });
    }
}

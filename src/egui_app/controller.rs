//! Dashboard orchestration: background fetches, fallback substitution and
//! demo submissions.

mod background_jobs;
pub(crate) mod jobs;

use std::sync::Arc;

use crate::api::{ArticlePayload, ClassifierApi};
use crate::config::AppConfig;
use crate::egui_app::state::*;
use crate::egui_app::ui::style::{self, StatusTone};

use jobs::ControllerJobs;

/// Maintains app state and bridges the classifier client to the egui UI.
pub struct DashboardController {
    pub ui: UiState,
    jobs: ControllerJobs,
    check_health_on_startup: bool,
}

impl DashboardController {
    pub fn new(api: Arc<dyn ClassifierApi>, config: &AppConfig) -> Self {
        let mut ui = UiState {
            page: config.default_page,
            api_base_url: api.base_url().to_string(),
            api_docs_url: api.docs_url(),
            ..UiState::default()
        };
        ui.status.text = format!("Classifier API at {}", ui.api_base_url);
        Self {
            ui,
            jobs: ControllerJobs::new(api),
            check_health_on_startup: config.check_health_on_startup,
        }
    }

    /// Issue the requests made when the dashboard first opens.
    pub fn start_initial_fetch(&mut self) {
        self.refresh_remote_data();
        if self.check_health_on_startup {
            self.check_api_health();
        }
    }

    /// Fetch corpus statistics and evaluation artifacts again.
    ///
    /// Requests already in flight are left to finish and not duplicated.
    pub fn refresh_remote_data(&mut self) {
        tracing::info!("Fetching dashboard data from {}", self.ui.api_base_url);
        if self.jobs.begin_eda_fetch() {
            self.ui.eda.begin();
        }
        if self.jobs.begin_artifacts_fetch() {
            self.ui.artifacts.begin();
        }
        self.set_status("Loading dashboard data", StatusTone::Busy);
    }

    pub fn check_api_health(&mut self) {
        if self.jobs.begin_health_check() {
            self.ui.status.api_health = ApiHealth::Checking;
        }
    }

    /// Submit the demo form for classification.
    pub fn submit_prediction(&mut self) {
        if !self.ui.demo.can_submit() {
            return;
        }
        let payload = ArticlePayload::new(
            self.ui.demo.title.clone(),
            self.ui.demo.abstract_text.clone(),
        );
        if self.jobs.begin_prediction(payload).is_some() {
            self.ui.demo.submitting = true;
            self.ui.demo.last_error = None;
            self.ui.demo.prediction = None;
            self.ui.demo.submitted_text.clear();
            self.set_status("Classifying article", StatusTone::Busy);
        }
    }

    /// Open the classifier's interactive API docs in the system browser.
    pub fn open_api_docs(&mut self) {
        let url = self.ui.api_docs_url.clone();
        if let Err(err) = open::that(&url) {
            tracing::warn!("Failed to open {url}: {err}");
            self.set_status(format!("Could not open {url}: {err}"), StatusTone::Error);
        }
    }

    pub fn select_page(&mut self, page: Page) {
        self.ui.page = page;
    }

    /// Choose the class shown on the metrics page. Unknown names are kept and
    /// resolved to the first class when rendering.
    pub fn select_metrics_class(&mut self, name: &str) {
        self.ui.metrics.selected_class = Some(name.to_string());
    }

    /// Drain finished requests into the UI state. Call once per frame.
    pub fn poll(&mut self) {
        self.poll_background_jobs();
    }

    /// True while any request is in flight.
    pub fn any_job_in_flight(&self) -> bool {
        self.jobs.any_in_progress()
    }

    pub fn data_loading(&self) -> bool {
        self.jobs.eda_in_progress() || self.jobs.artifacts_in_progress()
    }

    pub fn prediction_in_flight(&self) -> bool {
        self.jobs.prediction_in_progress()
    }

    pub fn health_check_in_flight(&self) -> bool {
        self.jobs.health_check_in_progress()
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.badge_label = style::status_badge_label(tone).to_string();
        self.ui.status.badge_color = style::status_badge_color(tone);
    }
}

//! Dashboard state owned by the controller and read by the renderers.

mod demo;
mod fetch;
mod metrics;
mod page;
mod status;

pub use demo::*;
pub use fetch::*;
pub use metrics::*;
pub use page::*;
pub use status::*;

use crate::api::{EdaData, EvaluationArtifacts};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Active page.
    pub page: Page,
    pub status: StatusBarState,
    /// Corpus statistics, or the sample dataset after a failed fetch.
    pub eda: RemoteSlot<EdaData>,
    /// Evaluation artifacts, or the sample artifacts after a failed fetch.
    pub artifacts: RemoteSlot<EvaluationArtifacts>,
    pub demo: DemoUiState,
    pub metrics: MetricsUiState,
    /// Base URL shown in error messages.
    pub api_base_url: String,
    /// Interactive API docs of the configured classifier.
    pub api_docs_url: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            page: Page::default(),
            status: StatusBarState::idle(),
            eda: RemoteSlot::default(),
            artifacts: RemoteSlot::default(),
            demo: DemoUiState::default(),
            metrics: MetricsUiState::default(),
            api_base_url: String::new(),
            api_docs_url: String::new(),
        }
    }
}

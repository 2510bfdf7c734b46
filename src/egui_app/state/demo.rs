use crate::api::Prediction;

/// Form and result state for the interactive classification demo.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DemoUiState {
    /// Article title input.
    pub title: String,
    /// Article abstract input.
    pub abstract_text: String,
    /// True while a prediction request is in flight.
    pub submitting: bool,
    /// Last error message, already formatted for display.
    pub last_error: Option<String>,
    /// Result of the last successful request.
    pub prediction: Option<Prediction>,
    /// Title and abstract the shown prediction was computed for.
    pub submitted_text: String,
}

impl DemoUiState {
    /// Whether the classify action is enabled.
    pub fn can_submit(&self) -> bool {
        crate::egui_app::view_model::can_submit(&self.title, &self.abstract_text, self.submitting)
    }
}

/// Local selection state for the Model Metrics page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsUiState {
    /// Class whose confusion matrix and curves are shown. `None` means the
    /// first class of the shown artifacts.
    pub selected_class: Option<String>,
}

use serde::{Deserialize, Serialize};

/// Mutually exclusive dashboard pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Summary,
    #[default]
    ExploratoryData,
    Demo,
    ModelMetrics,
    HowItWorks,
}

impl Page {
    /// Navigation order.
    pub const ORDER: [Page; 5] = [
        Page::Summary,
        Page::ExploratoryData,
        Page::Demo,
        Page::ModelMetrics,
        Page::HowItWorks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Summary => "Summary",
            Page::ExploratoryData => "Exploratory Data",
            Page::Demo => "Demo",
            Page::ModelMetrics => "Model Metrics",
            Page::HowItWorks => "How It Works",
        }
    }
}

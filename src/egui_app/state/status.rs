use crate::egui_app::ui::style;
use egui::Color32;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
    /// Result of the last reachability probe.
    pub api_health: ApiHealth,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "Connecting to the classifier API".into(),
            badge_label: "Idle".into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
            api_health: ApiHealth::Unknown,
        }
    }
}

/// Reachability of the classifier API as reported by `GET /`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ApiHealth {
    #[default]
    Unknown,
    Checking,
    Online(String),
    Unreachable(String),
}

impl ApiHealth {
    pub fn label(&self) -> &'static str {
        match self {
            ApiHealth::Unknown => "API status unknown",
            ApiHealth::Checking => "Checking API",
            ApiHealth::Online(_) => "API online",
            ApiHealth::Unreachable(_) => "API unreachable",
        }
    }

    /// Server message or error text, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiHealth::Online(detail) | ApiHealth::Unreachable(detail) if !detail.is_empty() => {
                Some(detail)
            }
            _ => None,
        }
    }

    pub fn tone(&self) -> style::StatusTone {
        match self {
            ApiHealth::Unknown => style::StatusTone::Idle,
            ApiHealth::Checking => style::StatusTone::Busy,
            ApiHealth::Online(_) => style::StatusTone::Info,
            ApiHealth::Unreachable(_) => style::StatusTone::Warning,
        }
    }
}

//! Library exports for the dashboard binary and integration tests.
/// Remote classifier client and wire types.
pub mod api;
/// Application directory helpers.
pub mod app_dirs;
/// Dashboard settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP helpers.
pub mod http_client;
/// Cosmetic per-label keyword table.
pub mod keywords;
/// Logging setup.
pub mod logging;
/// Fallback datasets shown when the API is unreachable.
pub mod samples;

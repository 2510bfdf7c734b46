//! Native dashboard: state, orchestration, view models and egui renderers.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;

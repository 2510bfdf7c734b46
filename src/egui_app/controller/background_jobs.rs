use super::jobs::{JobMessage, PredictionResult};
use super::*;
use crate::egui_app::view_model;
use crate::samples;

impl DashboardController {
    pub(in crate::egui_app::controller) fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };

            match message {
                JobMessage::EdaLoaded(result) => {
                    self.jobs.clear_eda_fetch();
                    match result {
                        Ok(eda) => {
                            tracing::info!(
                                "Loaded EDA data: {} articles, {} labels",
                                eda.general_stats.total_articles,
                                eda.label_distribution.len()
                            );
                            self.ui.eda.finish(eda);
                        }
                        Err(err) => {
                            tracing::warn!("EDA fetch failed, showing sample data: {err}");
                            self.ui.eda.fail(err.display_message(), samples::sample_eda());
                        }
                    }
                    self.refresh_data_status();
                }
                JobMessage::ArtifactsLoaded(result) => {
                    self.jobs.clear_artifacts_fetch();
                    match result {
                        Ok(artifacts) => {
                            tracing::info!(
                                "Loaded evaluation artifacts for {} classes",
                                artifacts.class_names.len()
                            );
                            if artifacts.confusion_matrices.len() != artifacts.class_names.len() {
                                tracing::warn!(
                                    "Artifacts carry {} confusion matrices for {} classes",
                                    artifacts.confusion_matrices.len(),
                                    artifacts.class_names.len()
                                );
                            }
                            self.ui.artifacts.finish(artifacts);
                        }
                        Err(err) => {
                            tracing::warn!(
                                "Evaluation artifacts fetch failed, showing sample data: {err}"
                            );
                            self.ui
                                .artifacts
                                .fail(err.display_message(), samples::sample_artifacts());
                        }
                    }
                    self.refresh_data_status();
                }
                JobMessage::PredictionFinished(result) => self.handle_prediction(result),
                JobMessage::HealthChecked(result) => {
                    self.jobs.clear_health_check();
                    self.ui.status.api_health = match result {
                        Ok(health) if health.is_ok() => {
                            tracing::info!("Classifier API online: {}", health.message);
                            ApiHealth::Online(health.message)
                        }
                        Ok(health) => {
                            tracing::warn!("Classifier API reported status {}", health.status);
                            ApiHealth::Unreachable(format!("status: {}", health.status))
                        }
                        Err(err) => {
                            tracing::warn!("Classifier API health check failed: {err}");
                            ApiHealth::Unreachable(err.display_message())
                        }
                    };
                }
            }
        }
    }

    fn handle_prediction(&mut self, message: PredictionResult) {
        if !self.jobs.finish_prediction(message.request_id) {
            return;
        }
        self.ui.demo.submitting = false;
        match message.result {
            Ok(prediction) => {
                if let Some(mismatch) = view_model::prediction_length_mismatch(&prediction) {
                    tracing::warn!(
                        "Prediction has {} labels but {} confidences; extra entries dropped",
                        mismatch.labels,
                        mismatch.confidences
                    );
                }
                tracing::info!("Prediction returned {} labels", prediction.labels.len());
                self.ui.demo.submitted_text = message.payload.combined_text();
                self.ui.demo.prediction = Some(prediction);
                self.set_status("Classification complete", StatusTone::Info);
            }
            Err(err) => {
                tracing::warn!("Prediction failed: {err}");
                self.ui.demo.last_error = Some(view_model::prediction_error_message(
                    &err.display_message(),
                    &self.ui.api_base_url,
                ));
                self.set_status("Classification failed", StatusTone::Error);
            }
        }
    }

    fn refresh_data_status(&mut self) {
        if self.data_loading() {
            return;
        }
        if self.ui.eda.is_fallback() || self.ui.artifacts.is_fallback() {
            self.set_status("API unavailable, showing sample data", StatusTone::Warning);
        } else {
            self.set_status("Dashboard data loaded", StatusTone::Info);
        }
    }
}

use std::sync::{
    Arc,
    mpsc::{Receiver, Sender},
};
use std::thread;

use crate::api::{
    ArticlePayload, ClassifierApi, EdaData, EvaluationArtifacts, HealthStatus, Prediction,
    RemoteError,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

/// Results sent from request threads back to the UI thread.
#[derive(Debug)]
pub(crate) enum JobMessage {
    EdaLoaded(Result<EdaData, RemoteError>),
    ArtifactsLoaded(Result<EvaluationArtifacts, RemoteError>),
    PredictionFinished(PredictionResult),
    HealthChecked(Result<HealthStatus, RemoteError>),
}

#[derive(Debug)]
pub(crate) struct PredictionResult {
    pub(crate) request_id: u64,
    pub(crate) payload: ArticlePayload,
    pub(crate) result: Result<Prediction, RemoteError>,
}

/// Background request bookkeeping: one in-flight flag per request kind.
pub(crate) struct ControllerJobs {
    api: Arc<dyn ClassifierApi>,
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    eda_in_progress: bool,
    artifacts_in_progress: bool,
    health_check_in_progress: bool,
    pending_prediction: Option<u64>,
    next_prediction_id: u64,
}

impl ControllerJobs {
    pub(super) fn new(api: Arc<dyn ClassifierApi>) -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            api,
            message_tx,
            message_rx,
            eda_in_progress: false,
            artifacts_in_progress: false,
            health_check_in_progress: false,
            pending_prediction: None,
            next_prediction_id: 1,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn begin_eda_fetch(&mut self) -> bool {
        if self.eda_in_progress {
            return false;
        }
        self.eda_in_progress = true;
        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api.fetch_eda();
            let _ = tx.send(JobMessage::EdaLoaded(result));
        });
        true
    }

    pub(super) fn clear_eda_fetch(&mut self) {
        self.eda_in_progress = false;
    }

    pub(super) fn begin_artifacts_fetch(&mut self) -> bool {
        if self.artifacts_in_progress {
            return false;
        }
        self.artifacts_in_progress = true;
        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api.fetch_evaluation_artifacts();
            let _ = tx.send(JobMessage::ArtifactsLoaded(result));
        });
        true
    }

    pub(super) fn clear_artifacts_fetch(&mut self) {
        self.artifacts_in_progress = false;
    }

    pub(super) fn begin_health_check(&mut self) -> bool {
        if self.health_check_in_progress {
            return false;
        }
        self.health_check_in_progress = true;
        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api.health();
            let _ = tx.send(JobMessage::HealthChecked(result));
        });
        true
    }

    pub(super) fn clear_health_check(&mut self) {
        self.health_check_in_progress = false;
    }

    /// Start a prediction and return its request id, or `None` while one is running.
    pub(super) fn begin_prediction(&mut self, payload: ArticlePayload) -> Option<u64> {
        if self.pending_prediction.is_some() {
            return None;
        }
        let request_id = self.next_prediction_id;
        self.next_prediction_id += 1;
        self.pending_prediction = Some(request_id);
        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api.predict(&payload);
            let _ = tx.send(JobMessage::PredictionFinished(PredictionResult {
                request_id,
                payload,
                result,
            }));
        });
        Some(request_id)
    }

    /// Clear the pending prediction if `request_id` is the one in flight.
    pub(super) fn finish_prediction(&mut self, request_id: u64) -> bool {
        if self.pending_prediction == Some(request_id) {
            self.pending_prediction = None;
            true
        } else {
            false
        }
    }

    pub(super) fn eda_in_progress(&self) -> bool {
        self.eda_in_progress
    }

    pub(super) fn artifacts_in_progress(&self) -> bool {
        self.artifacts_in_progress
    }

    pub(super) fn health_check_in_progress(&self) -> bool {
        self.health_check_in_progress
    }

    pub(super) fn prediction_in_progress(&self) -> bool {
        self.pending_prediction.is_some()
    }

    pub(super) fn any_in_progress(&self) -> bool {
        self.eda_in_progress
            || self.artifacts_in_progress
            || self.health_check_in_progress
            || self.pending_prediction.is_some()
    }
}

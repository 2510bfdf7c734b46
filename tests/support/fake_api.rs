use std::collections::VecDeque;
use std::sync::Mutex;

use medclass::api::{
    ArticlePayload, ClassifierApi, EdaData, EvaluationArtifacts, HealthStatus, Prediction,
    RemoteError,
};

/// In-memory classifier whose replies are queued per endpoint.
///
/// An empty queue answers with a transport error.
#[derive(Default)]
pub struct FakeApi {
    pub eda: Mutex<VecDeque<Result<EdaData, RemoteError>>>,
    pub artifacts: Mutex<VecDeque<Result<EvaluationArtifacts, RemoteError>>>,
    pub predictions: Mutex<VecDeque<Result<Prediction, RemoteError>>>,
    pub health: Mutex<VecDeque<Result<HealthStatus, RemoteError>>>,
    pub payloads: Mutex<Vec<ArticlePayload>>,
}

impl FakeApi {
    pub fn push_eda(&self, reply: Result<EdaData, RemoteError>) {
        self.eda.lock().unwrap().push_back(reply);
    }

    pub fn push_artifacts(&self, reply: Result<EvaluationArtifacts, RemoteError>) {
        self.artifacts.lock().unwrap().push_back(reply);
    }

    pub fn push_prediction(&self, reply: Result<Prediction, RemoteError>) {
        self.predictions.lock().unwrap().push_back(reply);
    }

    pub fn push_health(&self, reply: Result<HealthStatus, RemoteError>) {
        self.health.lock().unwrap().push_back(reply);
    }
}

fn next<T>(queue: &Mutex<VecDeque<Result<T, RemoteError>>>) -> Result<T, RemoteError> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(RemoteError::Transport("no canned reply".to_string())))
}

impl ClassifierApi for FakeApi {
    fn base_url(&self) -> &str {
        "http://fake.test"
    }

    fn fetch_eda(&self) -> Result<EdaData, RemoteError> {
        next(&self.eda)
    }

    fn fetch_evaluation_artifacts(&self) -> Result<EvaluationArtifacts, RemoteError> {
        next(&self.artifacts)
    }

    fn predict(&self, payload: &ArticlePayload) -> Result<Prediction, RemoteError> {
        self.payloads.lock().unwrap().push(payload.clone());
        next(&self.predictions)
    }

    fn health(&self) -> Result<HealthStatus, RemoteError> {
        next(&self.health)
    }
}

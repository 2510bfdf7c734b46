//! Remote classifier client: endpoint contract, wire types and errors.

mod client;
mod error;

pub mod models;

pub use client::{ClassifierClient, parse_base_url};
pub use error::RemoteError;
pub use models::{
    ArticlePayload, ClassMetrics, ConfusionMatrix, Counts, CurveSet, EdaData, EvaluationArtifacts,
    GeneralStats, HealthStatus, PerformanceReport, PrecisionRecallCurve, Prediction, ReportEntry,
    RocCurve,
};

/// Read operations the dashboard performs against the classifier service.
///
/// Each call is a single blocking attempt; callers run them off the UI thread.
pub trait ClassifierApi: Send + Sync {
    /// Base URL shown in error messages.
    fn base_url(&self) -> &str;

    /// `GET <base>/exploratory-data-analysis`
    fn fetch_eda(&self) -> Result<EdaData, RemoteError>;

    /// `GET <base>/evaluation-artifacts`
    fn fetch_evaluation_artifacts(&self) -> Result<EvaluationArtifacts, RemoteError>;

    /// `POST <base>/predict`
    fn predict(&self, payload: &ArticlePayload) -> Result<Prediction, RemoteError>;

    /// `GET <base>/`
    fn health(&self) -> Result<HealthStatus, RemoteError>;

    /// Interactive API documentation served by the classifier.
    fn docs_url(&self) -> String {
        format!("{}/docs", self.base_url().trim_end_matches('/'))
    }
}

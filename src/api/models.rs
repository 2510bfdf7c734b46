//! Wire types exchanged with the remote classifier.
//!
//! All payloads are produced by the server; the dashboard never mutates them
//! beyond replacing a whole object on refetch.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Request body for `POST /predict`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArticlePayload {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl ArticlePayload {
    pub fn new(title: impl Into<String>, abstract_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            abstract_text: abstract_text.into(),
        }
    }

    /// Text the keyword heuristic scans: title and abstract joined by a space.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.abstract_text)
    }
}

/// Response of `POST /predict`.
///
/// `labels` and `confidences` are parallel lists; the server is expected to
/// keep them the same length but the client does not rely on it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub labels: Vec<String>,
    pub confidences: Vec<f64>,
    pub is_low_confidence: bool,
}

/// Precision/recall/F1 figures for one class or one average row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    #[serde(rename = "f1-score")]
    pub f1_score: f64,
    #[serde(default)]
    pub support: f64,
}

/// A single row of a classification report.
///
/// Reports mix per-class objects with bare scalars such as `accuracy`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportEntry {
    Metrics(ClassMetrics),
    Scalar(f64),
}

/// Classification report keyed by class name or average name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceReport(pub BTreeMap<String, ReportEntry>);

impl PerformanceReport {
    pub const WEIGHTED_AVG: &'static str = "weighted avg";

    /// Metrics row for `name`, ignoring scalar entries.
    pub fn metrics(&self, name: &str) -> Option<&ClassMetrics> {
        match self.0.get(name)? {
            ReportEntry::Metrics(metrics) => Some(metrics),
            ReportEntry::Scalar(_) => None,
        }
    }

    pub fn weighted_avg(&self) -> Option<&ClassMetrics> {
        self.metrics(Self::WEIGHTED_AVG)
    }

    pub fn insert(&mut self, name: impl Into<String>, metrics: ClassMetrics) {
        self.0.insert(name.into(), ReportEntry::Metrics(metrics));
    }
}

/// One-vs-rest 2x2 confusion matrix laid out as `[[tn, fp], [fn, tp]]`.
pub type ConfusionMatrix = [[u64; 2]; 2];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RocCurve {
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrecisionRecallCurve {
    pub precision: Vec<f64>,
    pub recall: Vec<f64>,
}

/// Curve points and AUC for one class.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveSet {
    #[serde(default)]
    pub precision_recall_curve: Option<PrecisionRecallCurve>,
    pub roc_curve: RocCurve,
    pub auc_score: f64,
}

/// Response of `GET /evaluation-artifacts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationArtifacts {
    pub train_report: PerformanceReport,
    pub test_report: PerformanceReport,
    pub confusion_matrices: Vec<ConfusionMatrix>,
    pub curves_data: BTreeMap<String, CurveSet>,
    pub class_names: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralStats {
    pub total_articles: u64,
    pub avg_abstract_length: f64,
    pub total_unique_labels: u64,
}

/// Response of `GET /exploratory-data-analysis`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdaData {
    pub general_stats: GeneralStats,
    pub label_distribution: Counts,
    #[serde(default)]
    pub co_occurrence_matrix: BTreeMap<String, BTreeMap<String, u64>>,
    pub length_distribution: Counts,
}

/// Response of `GET /`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Name -> count mapping that keeps the server's key order.
///
/// Length buckets such as `"501-1000"` and `"3000+"` do not sort sensibly as
/// strings, so the JSON object order is the display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counts(Vec<(String, u64)>);

impl Counts {
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, count)| *count)
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|(_, count)| *count).sum()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, count)| (name.into(), count))
                .collect(),
        )
    }
}

impl Serialize for Counts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, count) in &self.0 {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Counts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = Counts;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping names to counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Counts, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, count)) = access.next_entry::<String, u64>()? {
                    entries.push((name, count));
                }
                Ok(Counts(entries))
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

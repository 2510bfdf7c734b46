//! Pure derivations from fetched data into the rows, cards and chart series
//! the renderers draw.

use std::collections::BTreeMap;

use crate::api::{ConfusionMatrix, Counts, EvaluationArtifacts, GeneralStats, Prediction};
use crate::keywords;

/// Label shown on the vectorization summary card.
pub const EMBEDDING_TECHNOLOGY: &str = "LLM Embeddings";

/// Whether the classify action is enabled. Whitespace-only fields count as empty.
pub fn can_submit(title: &str, abstract_text: &str, submitting: bool) -> bool {
    !submitting && !title.trim().is_empty() && !abstract_text.trim().is_empty()
}

/// Message shown when a prediction request fails.
pub fn prediction_error_message(error: &str, base_url: &str) -> String {
    format!("{error} Check that the API is running at: {base_url}")
}

/// Format a score in `[0, 1]` as a percentage with one decimal.
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Moderate,
    Low,
}

impl ConfidenceTier {
    pub fn from_score(score: f64) -> Self {
        if score > 0.85 {
            ConfidenceTier::High
        } else if score > 0.6 {
            ConfidenceTier::Moderate
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfidenceTier::High => "High confidence",
            ConfidenceTier::Moderate => "Moderate confidence",
            ConfidenceTier::Low => "Low confidence",
        }
    }
}

/// One result card in the demo.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionCard {
    pub label: String,
    pub confidence: f64,
    pub percent_text: String,
    pub tier: ConfidenceTier,
    /// Cosmetic keyword highlights, at most five.
    pub keywords: Vec<String>,
}

/// `labels` and `confidences` had different lengths; extra entries were dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthMismatch {
    pub labels: usize,
    pub confidences: usize,
}

/// Prediction cards ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedPredictions {
    /// Sorted by descending confidence.
    pub cards: Vec<PredictionCard>,
    pub low_confidence: bool,
    pub mismatch: Option<LengthMismatch>,
}

/// Pair labels with confidences and sort them, highest confidence first.
///
/// Pairs are formed positionally and truncated to the shorter list. Ties keep
/// the server's order.
pub fn rank_predictions(prediction: &Prediction, text: &str) -> RankedPredictions {
    let mismatch = prediction_length_mismatch(prediction);
    let mut cards: Vec<PredictionCard> = prediction
        .labels
        .iter()
        .zip(prediction.confidences.iter().copied())
        .map(|(label, confidence)| PredictionCard {
            label: label.clone(),
            confidence,
            percent_text: format_percent(confidence),
            tier: ConfidenceTier::from_score(confidence),
            keywords: keywords::influential_keywords(label, text),
        })
        .collect();
    cards.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    RankedPredictions {
        cards,
        low_confidence: prediction.is_low_confidence,
        mismatch,
    }
}

pub fn prediction_length_mismatch(prediction: &Prediction) -> Option<LengthMismatch> {
    let labels = prediction.labels.len();
    let confidences = prediction.confidences.len();
    (labels != confidences).then_some(LengthMismatch {
        labels,
        confidences,
    })
}

/// Headline figure on a summary card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub unit: Option<&'static str>,
}

pub fn eda_summary_cards(stats: &GeneralStats) -> [StatCard; 3] {
    [
        StatCard {
            title: "Total Articles",
            value: stats.total_articles.to_string(),
            unit: None,
        },
        StatCard {
            title: "Average Abstract Length",
            value: format_number(stats.avg_abstract_length),
            unit: Some("characters"),
        },
        StatCard {
            title: "Unique Labels",
            value: stats.total_unique_labels.to_string(),
            unit: None,
        },
    ]
}

/// Whole numbers print without decimals, others with two at most.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

/// Bars in the server's key order.
pub fn count_bars(counts: &Counts) -> Vec<BarDatum> {
    counts
        .iter()
        .map(|(label, count)| BarDatum {
            label: label.to_string(),
            value: count as f64,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: u64,
    /// Share of the total in `[0, 1]`; zero when the total is zero.
    pub fraction: f64,
}

pub fn pie_slices(counts: &Counts) -> Vec<PieSlice> {
    let total = counts.total();
    counts
        .iter()
        .map(|(label, count)| PieSlice {
            label: label.to_string(),
            count,
            fraction: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect()
}

/// Square label x label grid of co-occurrence counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoOccurrenceGrid {
    pub labels: Vec<String>,
    /// `cells[row][col]`; missing pairs are zero.
    pub cells: Vec<Vec<u64>>,
    pub max: u64,
}

/// Build the heat grid, ordering labels like `label_order` first.
pub fn co_occurrence_grid(
    matrix: &BTreeMap<String, BTreeMap<String, u64>>,
    label_order: &Counts,
) -> Option<CoOccurrenceGrid> {
    if matrix.is_empty() {
        return None;
    }
    let mut labels: Vec<String> = label_order
        .iter()
        .map(|(label, _)| label.to_string())
        .filter(|label| matrix.contains_key(label))
        .collect();
    let extra = matrix
        .iter()
        .flat_map(|(row, cols)| std::iter::once(row).chain(cols.keys()))
        .cloned()
        .collect::<std::collections::BTreeSet<_>>();
    for label in extra {
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    let cells: Vec<Vec<u64>> = labels
        .iter()
        .map(|row| {
            labels
                .iter()
                .map(|col| {
                    matrix
                        .get(row)
                        .and_then(|cols| cols.get(col))
                        .copied()
                        .unwrap_or(0)
                })
                .collect()
        })
        .collect();
    let max = cells.iter().flatten().copied().max().unwrap_or(0);
    Some(CoOccurrenceGrid { labels, cells, max })
}

/// Train vs. test F1 for one class, rounded to two decimals.
#[derive(Clone, Debug, PartialEq)]
pub struct OverfittingRow {
    pub class_name: String,
    pub train_f1: Option<f64>,
    pub test_f1: Option<f64>,
}

pub fn overfitting_rows(artifacts: &EvaluationArtifacts) -> Vec<OverfittingRow> {
    artifacts
        .class_names
        .iter()
        .map(|name| OverfittingRow {
            class_name: name.clone(),
            train_f1: artifacts
                .train_report
                .metrics(name)
                .map(|row| round2(row.f1_score)),
            test_f1: artifacts
                .test_report
                .metrics(name)
                .map(|row| round2(row.f1_score)),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Figures for the three cards at the top of the metrics page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricsSummary {
    /// Weighted-average test F1 as a percentage, when the report has it.
    pub test_f1: Option<String>,
    pub class_count: usize,
    pub embedding: &'static str,
}

pub fn metrics_summary(artifacts: &EvaluationArtifacts) -> MetricsSummary {
    MetricsSummary {
        test_f1: artifacts
            .test_report
            .weighted_avg()
            .map(|row| format_percent(row.f1_score)),
        class_count: artifacts.class_names.len(),
        embedding: EMBEDDING_TECHNOLOGY,
    }
}

/// Index and name of the class to show.
///
/// Falls back to the first class when `selected` is absent or unknown;
/// `None` only when there are no classes.
pub fn resolve_selected_class<'a>(
    artifacts: &'a EvaluationArtifacts,
    selected: Option<&str>,
) -> Option<(usize, &'a str)> {
    let names = &artifacts.class_names;
    selected
        .and_then(|wanted| names.iter().position(|name| name == wanted))
        .or_else(|| (!names.is_empty()).then_some(0))
        .map(|index| (index, names[index].as_str()))
}

/// Confusion matrix cells for one class under one-vs-rest framing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfusionQuadrants {
    pub true_positive: u64,
    pub false_positive: u64,
    pub false_negative: u64,
    pub true_negative: u64,
}

impl From<&ConfusionMatrix> for ConfusionQuadrants {
    fn from(matrix: &ConfusionMatrix) -> Self {
        Self {
            true_positive: matrix[1][1],
            false_positive: matrix[0][1],
            false_negative: matrix[1][0],
            true_negative: matrix[0][0],
        }
    }
}

/// Everything the per-class section of the metrics page shows.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassDetail {
    pub class_name: String,
    /// `None` when the artifacts carry fewer matrices than classes.
    pub confusion: Option<ConfusionQuadrants>,
    /// `[fpr, tpr]` points.
    pub roc_points: Vec<[f64; 2]>,
    /// `[recall, precision]` points; empty when the server sent no PR curve.
    pub pr_points: Vec<[f64; 2]>,
    pub auc: Option<f64>,
    /// Curve arrays had different lengths and were truncated.
    pub curve_mismatch: bool,
}

pub fn class_detail(artifacts: &EvaluationArtifacts, selected: Option<&str>) -> Option<ClassDetail> {
    let (index, name) = resolve_selected_class(artifacts, selected)?;
    let confusion = artifacts
        .confusion_matrices
        .get(index)
        .map(ConfusionQuadrants::from);
    let curves = artifacts.curves_data.get(name);
    let (roc_points, roc_mismatch) = curves
        .map(|set| zip_points(&set.roc_curve.fpr, &set.roc_curve.tpr))
        .unwrap_or_default();
    let (pr_points, pr_mismatch) = curves
        .and_then(|set| set.precision_recall_curve.as_ref())
        .map(|pr| zip_points(&pr.recall, &pr.precision))
        .unwrap_or_default();
    Some(ClassDetail {
        class_name: name.to_string(),
        confusion,
        roc_points,
        pr_points,
        auc: curves.map(|set| set.auc_score),
        curve_mismatch: roc_mismatch || pr_mismatch,
    })
}

/// Pair two coordinate lists, truncating to the shorter one.
pub fn zip_points(xs: &[f64], ys: &[f64]) -> (Vec<[f64; 2]>, bool) {
    let points = xs.iter().zip(ys).map(|(x, y)| [*x, *y]).collect();
    (points, xs.len() != ys.len())
}

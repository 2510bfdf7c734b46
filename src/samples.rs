//! Fixed example datasets shown when the classifier API cannot be reached.
//!
//! The values are illustrative only; views that display them also show a
//! warning banner naming the failed request.

use std::collections::BTreeMap;

use crate::api::{
    ClassMetrics, CurveSet, EdaData, EvaluationArtifacts, GeneralStats, PerformanceReport,
    RocCurve,
};

/// Class names used by the example datasets, in display order.
pub const SAMPLE_CLASSES: [&str; 4] = ["Cardiovascular", "Neurological", "Hepatorenal", "Oncological"];

/// Example corpus statistics.
pub fn sample_eda() -> EdaData {
    EdaData {
        general_stats: GeneralStats {
            total_articles: 1250,
            avg_abstract_length: 1847.0,
            total_unique_labels: 4,
        },
        label_distribution: [
            ("Cardiovascular", 312),
            ("Neurological", 298),
            ("Hepatorenal", 285),
            ("Oncological", 355),
        ]
        .into_iter()
        .collect(),
        co_occurrence_matrix: BTreeMap::new(),
        length_distribution: [
            ("Short (< 1000)", 156),
            ("Medium (1000-2000)", 687),
            ("Long (> 2000)", 407),
        ]
        .into_iter()
        .collect(),
    }
}

/// Example evaluation artifacts for the four sample classes.
pub fn sample_artifacts() -> EvaluationArtifacts {
    let train_report = report(
        [
            (0.92, 0.89, 0.905),
            (0.88, 0.91, 0.895),
            (0.90, 0.87, 0.885),
            (0.93, 0.94, 0.935),
        ],
        (0.91, 0.90, 0.905),
    );
    let test_report = report(
        [
            (0.87, 0.84, 0.855),
            (0.83, 0.86, 0.845),
            (0.85, 0.82, 0.835),
            (0.88, 0.89, 0.885),
        ],
        (0.86, 0.85, 0.855),
    );
    let confusion_matrices = vec![
        [[45, 8], [6, 41]],
        [[42, 11], [9, 38]],
        [[44, 9], [7, 40]],
        [[47, 6], [5, 42]],
    ];
    let rocs = [
        ([0.0, 0.1, 0.2, 0.3, 1.0], [0.0, 0.7, 0.8, 0.9, 1.0], 0.89),
        ([0.0, 0.15, 0.25, 0.35, 1.0], [0.0, 0.65, 0.75, 0.85, 1.0], 0.85),
        ([0.0, 0.12, 0.22, 0.32, 1.0], [0.0, 0.68, 0.78, 0.88, 1.0], 0.87),
        ([0.0, 0.08, 0.18, 0.28, 1.0], [0.0, 0.72, 0.82, 0.92, 1.0], 0.91),
    ];
    let curves_data = SAMPLE_CLASSES
        .iter()
        .zip(rocs)
        .map(|(name, (fpr, tpr, auc_score))| {
            let curves = CurveSet {
                precision_recall_curve: None,
                roc_curve: RocCurve {
                    fpr: fpr.to_vec(),
                    tpr: tpr.to_vec(),
                },
                auc_score,
            };
            (name.to_string(), curves)
        })
        .collect();

    EvaluationArtifacts {
        train_report,
        test_report,
        confusion_matrices,
        curves_data,
        class_names: SAMPLE_CLASSES.iter().map(|name| name.to_string()).collect(),
    }
}

fn report(rows: [(f64, f64, f64); 4], weighted: (f64, f64, f64)) -> PerformanceReport {
    let mut report = PerformanceReport::default();
    for (name, row) in SAMPLE_CLASSES.iter().zip(rows) {
        report.insert(*name, metrics(row));
    }
    report.insert(PerformanceReport::WEIGHTED_AVG, metrics(weighted));
    report
}

fn metrics((precision, recall, f1_score): (f64, f64, f64)) -> ClassMetrics {
    ClassMetrics {
        precision,
        recall,
        f1_score,
        support: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_artifacts_are_internally_consistent() {
        let artifacts = sample_artifacts();
        assert_eq!(artifacts.confusion_matrices.len(), artifacts.class_names.len());
        for name in &artifacts.class_names {
            let curves = &artifacts.curves_data[name];
            assert_eq!(curves.roc_curve.fpr.len(), curves.roc_curve.tpr.len());
            assert!(artifacts.train_report.metrics(name).is_some());
            assert!(artifacts.test_report.metrics(name).is_some());
        }
        assert_eq!(artifacts.test_report.weighted_avg().unwrap().f1_score, 0.855);
    }

    #[test]
    fn sample_eda_label_counts_add_up_to_total() {
        let eda = sample_eda();
        assert_eq!(eda.label_distribution.total(), eda.general_stats.total_articles);
        assert_eq!(eda.length_distribution.total(), eda.general_stats.total_articles);
        assert_eq!(eda.label_distribution.len() as u64, eda.general_stats.total_unique_labels);
    }
}

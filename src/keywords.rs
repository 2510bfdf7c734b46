//! Per-label keyword table used to highlight words in the demo results.
//!
//! This is a cosmetic lookup, not a model explanation: the classifier works on
//! sentence embeddings and never reports which tokens mattered. A word is
//! shown when it appears in the submitted text and in the fixed list for the
//! predicted label.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Maximum number of keywords shown per label.
pub const MAX_HIGHLIGHTS: usize = 5;

/// Keywords associated with one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelKeywords {
    pub label: &'static str,
    pub words: &'static [&'static str],
}

const TABLE: &[LabelKeywords] = &[
    LabelKeywords {
        label: "Cardiovascular",
        words: &[
            "heart",
            "cardiac",
            "blood",
            "vessel",
            "hypertension",
            "failure",
            "artery",
        ],
    },
    LabelKeywords {
        label: "Neurological",
        words: &[
            "brain",
            "neuro",
            "nerve",
            "stroke",
            "alzheimer",
            "neuron",
            "demyelination",
        ],
    },
    LabelKeywords {
        label: "Hepatorenal",
        words: &["liver", "kidney", "renal", "hepatic", "dialysis", "hepatitis"],
    },
    LabelKeywords {
        label: "Oncological",
        words: &[
            "cancer",
            "tumor",
            "chemotherapy",
            "oncology",
            "carcinoma",
            "metastasis",
        ],
    },
];

/// The full keyword table, in label order.
pub fn table() -> &'static [LabelKeywords] {
    TABLE
}

/// Keywords for `label`, matched case-sensitively on the label name.
pub fn keywords_for(label: &str) -> Option<&'static LabelKeywords> {
    TABLE.iter().find(|entry| entry.label == label)
}

/// Words of `text` that appear in `label`'s keyword list.
///
/// Tokens are lowercased with periods and commas removed, then split on
/// whitespace. Each word is reported once, in order of first appearance,
/// and at most [`MAX_HIGHLIGHTS`] are returned. Unknown labels yield nothing.
pub fn influential_keywords(label: &str, text: &str) -> Vec<String> {
    let Some(entry) = keywords_for(label) else {
        return Vec::new();
    };
    let mut seen = HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .filter(|token| entry.words.contains(&token.as_str()))
        .take(MAX_HIGHLIGHTS)
        .collect()
}

fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = punctuation().replace_all(&lowered, "");
    whitespace()
        .split(&cleaned)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn punctuation() -> &'static Regex {
    static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
    PUNCTUATION.get_or_init(|| Regex::new(r"[.,]").expect("punctuation regex must compile"))
}

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex must compile"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ignore_case_and_trailing_punctuation() {
        let words = influential_keywords(
            "Cardiovascular",
            "Heart failure. Cardiac output, blood pressure and HEART rate",
        );
        assert_eq!(words, vec!["heart", "failure", "cardiac", "blood"]);
    }

    #[test]
    fn caps_highlights_per_label() {
        let text = "cancer tumor chemotherapy oncology carcinoma metastasis";
        let words = influential_keywords("Oncological", text);
        assert_eq!(words.len(), MAX_HIGHLIGHTS);
        assert!(!words.contains(&"metastasis".to_string()));
    }

    #[test]
    fn unknown_label_or_partial_words_yield_nothing() {
        assert!(influential_keywords("Dermatological", "skin cancer").is_empty());
        assert!(influential_keywords("Neurological", "neurons and brains").is_empty());
    }

    #[test]
    fn other_punctuation_is_kept_attached() {
        assert!(influential_keywords("Hepatorenal", "(liver) kidney;").is_empty());
        assert_eq!(influential_keywords("Hepatorenal", "renal."), vec!["renal"]);
    }

    #[test]
    fn table_covers_sample_classes() {
        for label in crate::samples::SAMPLE_CLASSES {
            assert!(keywords_for(label).is_some(), "missing keywords for {label}");
        }
        assert_eq!(table().len(), 4);
    }
}

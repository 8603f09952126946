//! Primary substance classification.
//!
//! Selects the single substance label most representative of a report,
//! deterministically, from its free text and its structured dose records.
//! The vocabulary is an explicit ordered configuration value, never global
//! state: tie-breaks follow declaration order, so the same inputs always
//! produce the same label.

use crate::defaults::{DEFAULT_VOCABULARY, DOSE_WEIGHT, UNKNOWN_SUBSTANCE};
use crate::report::DoseRecord;
use serde::{Deserialize, Serialize};

/// Classifier configuration: the recognized substance vocabulary (ordered)
/// and the score added per matching dose record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClassifierConfig {
    pub vocabulary: Vec<String>,
    pub dose_weight: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            vocabulary: DEFAULT_VOCABULARY.iter().map(|s| s.to_string()).collect(),
            dose_weight: DOSE_WEIGHT,
        }
    }
}

/// Classify the primary substance of a report.
///
/// Priority order:
/// 1. If the dose records name exactly one distinct substance
///    (case-sensitive, as provided), that name wins outright.
/// 2. Otherwise each vocabulary entry is scored by its case-insensitive
///    whole-word occurrences in `content`, plus `dose_weight` for every
///    dose record naming it.
/// 3. The highest score wins; ties go to the earliest vocabulary entry.
/// 4. An all-zero table resolves to the `"Unknown"` sentinel, which is a
///    valid terminal value, not an error.
///
/// Pure function: same content and doses always yield the same label.
pub fn classify_substance(
    content: &str,
    doses: &[DoseRecord],
    config: &ClassifierConfig,
) -> String {
    // Dose data is authoritative when unambiguous.
    let mut distinct: Vec<&str> = Vec::new();
    for dose in doses {
        if !distinct.contains(&dose.substance.as_str()) {
            distinct.push(&dose.substance);
        }
    }
    if let [only] = distinct.as_slice() {
        return (*only).to_string();
    }

    let mut scores: Vec<u32> = config
        .vocabulary
        .iter()
        .map(|entry| count_whole_word(content, entry))
        .collect();

    for dose in doses {
        for (i, entry) in config.vocabulary.iter().enumerate() {
            if dose.substance.eq_ignore_ascii_case(entry) {
                scores[i] += config.dose_weight;
            }
        }
    }

    let best = scores.iter().copied().max().unwrap_or(0);
    if best == 0 {
        return UNKNOWN_SUBSTANCE.to_string();
    }

    // First entry reaching the maximum wins: declaration-order tie-break.
    for (entry, score) in config.vocabulary.iter().zip(&scores) {
        if *score == best {
            return entry.clone();
        }
    }
    UNKNOWN_SUBSTANCE.to_string()
}

/// Count case-insensitive whole-word occurrences of `word` in `text`.
///
/// A word is a maximal run of alphanumeric characters, so "LSD." and
/// "lsd," both count while "LSD25" does not.
fn count_whole_word(text: &str, word: &str) -> u32 {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty() && token.eq_ignore_ascii_case(word))
        .count() as u32
}

//! Splits normalized narration text into speakable units, each tagged
//! with a trailing pause duration.

use serde::{Deserialize, Serialize};

/// Punctuation that ends a sentence.
const SENTENCE_DELIMITERS: [char; 3] = ['.', '!', '?'];

/// Punctuation that separates clauses. Only treated as a delimiter when
/// `split_on_clauses` is enabled.
const CLAUSE_DELIMITERS: [char; 3] = [',', ';', ':'];

/// One speakable unit of narration text and the silence that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Trimmed, non-empty text including its trailing delimiter (if any).
    pub text: String,
    /// Silence appended after this unit is spoken, in seconds.
    pub pause_secs: f32,
}

/// Segmenter configuration: which punctuation ends a unit and how long
/// the pause after each delimiter class is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Treat `,` `;` `:` as unit boundaries in addition to `.` `!` `?`.
    pub split_on_clauses: bool,
    pub sentence_pause_secs: f32,
    pub clause_pause_secs: f32,
    pub default_pause_secs: f32,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            split_on_clauses: false,
            sentence_pause_secs: crate::defaults::SENTENCE_PAUSE_SECS,
            clause_pause_secs: crate::defaults::CLAUSE_PAUSE_SECS,
            default_pause_secs: crate::defaults::DEFAULT_PAUSE_SECS,
        }
    }
}

impl SegmenterConfig {
    fn is_delimiter(&self, c: char) -> bool {
        SENTENCE_DELIMITERS.contains(&c)
            || (self.split_on_clauses && CLAUSE_DELIMITERS.contains(&c))
    }

    /// Pause for a unit based on its trailing character.
    fn pause_for(&self, unit: &str) -> f32 {
        match unit.chars().next_back() {
            Some(c) if SENTENCE_DELIMITERS.contains(&c) => self.sentence_pause_secs,
            Some(c) if self.split_on_clauses && CLAUSE_DELIMITERS.contains(&c) => {
                self.clause_pause_secs
            }
            _ => self.default_pause_secs,
        }
    }
}

/// Split text into ordered segments covering it left to right.
///
/// Each unit is a maximal run of non-delimiter characters plus at most one
/// trailing delimiter. Units that are empty after trimming, or that consist
/// of nothing but delimiters, are discarded. Input without any delimiter
/// yields exactly one segment with the default pause. Never fails.
pub fn segment(text: &str, config: &SegmenterConfig) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut unit = String::new();

    let mut flush = |unit: &mut String| {
        let trimmed = unit.trim();
        // Discard empty units and bare delimiters with no spoken text.
        if !trimmed.is_empty() && !trimmed.chars().all(|c| config.is_delimiter(c)) {
            segments.push(Segment {
                text: trimmed.to_string(),
                pause_secs: config.pause_for(trimmed),
            });
        }
        unit.clear();
    };

    for c in text.chars() {
        unit.push(c);
        if config.is_delimiter(c) {
            flush(&mut unit);
        }
    }
    flush(&mut unit);

    segments
}

//! Default configuration constants for retell.
//!
//! This module provides shared constants used across different configuration
//! types to ensure consistency and eliminate duplication.

/// Pause inserted after a unit ending in sentence punctuation (`.` `!` `?`).
///
/// One second reads as a natural sentence boundary at typical narration
/// speed without making the track feel stalled.
pub const SENTENCE_PAUSE_SECS: f32 = 1.0;

/// Pause inserted after a unit ending in clause punctuation (`,` `;` `:`).
///
/// Only used when clause splitting is enabled.
pub const CLAUSE_PAUSE_SECS: f32 = 0.15;

/// Pause inserted after a unit with no recognized trailing delimiter,
/// e.g. the tail of a report that ends without terminal punctuation.
pub const DEFAULT_PAUSE_SECS: f32 = 0.3;

/// Weight added to a vocabulary entry's score for each dose record naming it.
///
/// Dose records are structured data and more trustworthy than incidental
/// text mentions, but they never override the single-substance short-circuit.
pub const DOSE_WEIGHT: u32 = 2;

/// Sentinel label returned when no substance can be determined.
pub const UNKNOWN_SUBSTANCE: &str = "Unknown";

/// Ordered vocabulary of substances the classifier recognizes.
///
/// Order matters: frequency ties are broken by the first entry reaching the
/// maximum score, so this list is part of the classifier's contract.
pub const DEFAULT_VOCABULARY: [&str; 8] = [
    "LSD",
    "DMT",
    "Salvia",
    "MDMA",
    "Cannabis",
    "Heroin",
    "Cocaine",
    "Ketamine",
];

/// Default external text-to-speech command.
///
/// Expected to read text on stdin and write a WAV stream to stdout,
/// which is how `piper --output_file -` behaves.
pub const DEFAULT_SYNTH_COMMAND: &str = "piper";

/// Default base URL of the report API.
pub const DEFAULT_BASE_URL: &str = "https://lysergic.kaizenklass.xyz/api/v1";

/// Substance index pages submitted when picking a random report.
pub const DEFAULT_INDEX_URLS: [&str; 5] = [
    "https://www.erowid.org/chemicals/dmt/dmt.shtml",
    "https://www.erowid.org/chemicals/lsd/lsd.shtml",
    "https://www.erowid.org/plants/salvia/salvia.shtml",
    "https://www.erowid.org/plants/cannabis/cannabis.shtml",
    "https://www.erowid.org/chemicals/mdma/mdma.shtml",
];

/// File extension of the output artifact.
pub const ARTIFACT_EXTENSION: &str = ".wav";

/// Filename used when sanitization of the report title yields nothing.
pub const FALLBACK_FILENAME: &str = "experience";

/// Punctuation retained by the filename sanitizer, besides ASCII
/// letters and digits. Spaces are kept and then mapped to underscores.
pub const FILENAME_ALLOWED_PUNCT: &str = "-_.()%";

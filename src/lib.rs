//! retell - Narrates written experience reports into spoken audio tracks.
//!
//! Fetch a report, classify its primary substance, split the narration into
//! pause-timed segments, synthesize each one, and assemble one WAV track.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod app;
pub mod assemble;
pub mod audio;
pub mod classify;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod report;
pub mod source;
pub mod synth;
pub mod text;

// Core collaborators (source → engine → synthesizer)
pub use source::{ContentSource, MockContentSource};
pub use synth::{CommandSynthesizer, MockSynthesizer, Synthesizer, Waveform};

// Engine
pub use app::{NarrateOptions, NarrationArtifact, render_narration, run_narrate_command};
pub use assemble::Assembler;
pub use audio::AudioTrack;
pub use classify::{ClassifierConfig, classify_substance};
pub use report::{DoseRecord, Experience, ScriptConfig, narration_script};
pub use text::{Segment, SegmenterConfig, normalize, sanitize_filename, segment};

// Error handling
pub use error::{Result, RetellError};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.3.1+abc1234"` when git hash is available, `"0.3.1"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_cargo_version() {
        let ver = version_string();
        assert!(
            ver.starts_with(env!("CARGO_PKG_VERSION")),
            "version_string should start with CARGO_PKG_VERSION, got: {}",
            ver
        );
    }

    #[test]
    fn version_string_contains_plus_when_git_hash_present() {
        let ver = version_string();
        // In a git repo build, GIT_HASH is set → expect "0.3.1+<hash>"
        // In CI without git, expect plain "0.3.1"
        if option_env!("GIT_HASH").is_some_and(|h| !h.is_empty()) {
            assert!(
                ver.contains('+'),
                "With GIT_HASH set, version should contain '+', got: {}",
                ver
            );
        } else {
            assert_eq!(ver, env!("CARGO_PKG_VERSION"));
        }
    }
}

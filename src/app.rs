//! Narration application entry point.
//!
//! Orchestrates the complete report-to-audio flow:
//! fetch → classify → script → normalize → segment → assemble → write

use crate::assemble::Assembler;
use crate::audio::AudioTrack;
use crate::classify::classify_substance;
use crate::config::Config;
use crate::defaults::{ARTIFACT_EXTENSION, FALLBACK_FILENAME};
use crate::error::Result;
use crate::output;
use crate::report::{Experience, narration_script};
use crate::source::ContentSource;
use crate::source::local::LocalSource;
use crate::synth::{CommandSynthesizer, Synthesizer};
use crate::text::{normalize, sanitize_filename, segment};
use std::path::{Path, PathBuf};

#[cfg(feature = "fetch")]
use crate::source::remote::RemoteSource;

/// CLI-level options for one narration run.
#[derive(Debug, Default)]
pub struct NarrateOptions {
    /// Report URL; `None` lets the source pick one arbitrarily.
    pub reference: Option<String>,
    /// Local JSON report instead of fetching; `Some("-")` reads stdin.
    pub input: Option<PathBuf>,
    pub quiet: bool,
    pub verbosity: u8,
}

/// The engine's terminal artifact for one run: the assembled track plus
/// the metadata downstream packaging needs.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationArtifact {
    /// Sanitized title plus extension, e.g. `My_First_Time.wav`.
    pub filename: String,
    pub track: AudioTrack,
    pub primary_substance: String,
}

/// Run the narration engine on an already-fetched report.
///
/// This is the pure core of the pipeline: classification is computed from
/// the same content and doses used to build the script, segmentation never
/// sees the classifier's output, and the whole thing is deterministic up
/// to the synthesizer's own determinism.
pub fn render_narration(
    experience: &Experience,
    config: &Config,
    synth: &mut dyn Synthesizer,
    quiet: bool,
) -> Result<NarrationArtifact> {
    experience.validate()?;

    let primary = classify_substance(&experience.content, &experience.doses, &config.classifier);

    let script = narration_script(experience, &primary, &config.script);
    let segments = segment(&normalize(&script), &config.segmenter);

    let track = Assembler::new(quiet).assemble(&segments, synth)?;

    let mut stem = sanitize_filename(&experience.title);
    if stem.is_empty() {
        // Degenerate titles sanitize to nothing; the artifact still needs
        // a usable name.
        stem = FALLBACK_FILENAME.to_string();
    }

    Ok(NarrationArtifact {
        filename: format!("{stem}{ARTIFACT_EXTENSION}"),
        track,
        primary_substance: primary,
    })
}

/// Run the full narrate command: fetch a report, render it, write the WAV.
///
/// Prints exactly one line to stdout on success, `{filename}|{substance}`,
/// for downstream packaging to consume.
pub async fn run_narrate_command(config: Config, options: NarrateOptions) -> Result<()> {
    let source = make_source(&config, options.input.as_deref())?;

    if !options.quiet {
        match options.reference.as_deref() {
            Some(url) => output::stage(&format!("Fetching report: {url}")),
            None if options.input.is_none() => output::stage("Fetching random report"),
            None => output::stage("Reading local report"),
        }
    }

    let experience = source.fetch(options.reference.as_deref()).await?;

    if !options.quiet {
        output::stage(&format!(
            "Loaded '{}' by {}",
            experience.title, experience.author
        ));
    }

    let mut synth = CommandSynthesizer::new(config.synth.clone());
    let artifact = render_narration(&experience, &config, &mut synth, options.quiet)?;

    if options.verbosity >= 1 {
        output::stage(&format!(
            "Primary substance: {}",
            artifact.primary_substance
        ));
    }

    let dir = config
        .output
        .directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(&artifact.filename);
    artifact.track.write_wav(&path)?;

    if !options.quiet {
        output::done(&artifact.filename, artifact.track.duration_secs());
    }

    // Machine-readable result line; main.py-era consumers take the last
    // stdout line as "filename|substance".
    println!("{}|{}", artifact.filename, artifact.primary_substance);

    Ok(())
}

fn make_source(config: &Config, input: Option<&Path>) -> Result<Box<dyn ContentSource>> {
    if let Some(path) = input {
        if path.as_os_str() == "-" {
            return Ok(Box::new(LocalSource::from_stdin()));
        }
        return Ok(Box::new(LocalSource::from_file(path)));
    }

    #[cfg(feature = "fetch")]
    {
        Ok(Box::new(RemoteSource::new(config.source.clone())))
    }

    #[cfg(not(feature = "fetch"))]
    {
        let _ = config;
        Err(crate::error::RetellError::Other(
            "built without the 'fetch' feature; use --input to narrate a local report".to_string(),
        ))
    }
}

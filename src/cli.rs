//! Command-line interface for retell
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Narrate written experience reports into spoken audio
#[derive(Parser, Debug)]
#[command(
    name = "retell",
    version,
    about = "Narrates written experience reports into spoken audio tracks",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Report URL to narrate (default: let the source pick one at random)
    #[arg(value_name = "URL")]
    pub reference: Option<String>,

    /// Read the report as JSON from a file instead of fetching ("-" for stdin)
    #[arg(long, short = 'i', value_name = "PATH", conflicts_with = "reference")]
    pub input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress status output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: segment stats, -vv: full diagnostics)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory to write the audio artifact into
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Text-to-speech command override (e.g. piper)
    #[arg(long, value_name = "CMD")]
    pub synth_command: Option<String>,

    /// Also split on clause punctuation (, ; :) with short pauses
    #[arg(long)]
    pub extended: bool,

    /// Pause after sentence punctuation. Examples: 1s, 600ms, 0.8
    #[arg(long, value_name = "DURATION", value_parser = parse_pause_secs)]
    pub sentence_pause: Option<f32>,

    /// Pause after units without terminal punctuation. Examples: 300ms, 0.15
    #[arg(long, value_name = "DURATION", value_parser = parse_pause_secs)]
    pub default_pause: Option<f32>,

    /// Skip the spoken intro framing lines
    #[arg(long)]
    pub no_intro: bool,

    /// Skip the spoken outro framing line
    #[arg(long)]
    pub no_outro: bool,
}

/// Parse a pause duration string into seconds.
///
/// Supports bare numbers (seconds, fractional allowed) and any duration
/// format accepted by `humantime` (`600ms`, `1s`, `1m30s`).
fn parse_pause_secs(s: &str) -> Result<f32, String> {
    let s = s.trim();
    // Bare number → seconds
    if let Ok(secs) = s.parse::<f32>() {
        if secs < 0.0 || !secs.is_finite() {
            return Err("pause must be a non-negative number".to_string());
        }
        return Ok(secs);
    }
    humantime::parse_duration(s)
        .map(|d| d.as_secs_f32())
        .map_err(|e| e.to_string())
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the synthesis command and configuration are usable
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

//! Dependency checks for the `check` subcommand.

use crate::config::Config;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

/// Search PATH for an executable.
fn find_in_path(command: &str) -> Option<PathBuf> {
    // Absolute or relative paths are taken as-is.
    if command.contains('/') {
        let path = Path::new(command);
        return path.exists().then(|| path.to_path_buf());
    }

    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(command))
        .find(|candidate| candidate.is_file())
}

/// Check external dependencies and report what the pipeline can do.
///
/// Returns true when everything required for a narration run is present.
pub fn check_dependencies(config: &Config) -> bool {
    let mut ok = true;

    match find_in_path(&config.synth.command) {
        Some(path) => {
            println!(
                "  {} synthesis command '{}' ({})",
                "ok".green(),
                config.synth.command,
                path.display()
            );
        }
        None => {
            ok = false;
            println!(
                "  {} synthesis command '{}' not found in PATH",
                "missing".red(),
                config.synth.command
            );
            println!("     Install it or set RETELL_SYNTH_COMMAND / synth.command");
        }
    }

    if let Some(dir) = &config.output.directory {
        if dir.is_dir() {
            println!("  {} output directory {}", "ok".green(), dir.display());
        } else {
            ok = false;
            println!(
                "  {} output directory {} does not exist",
                "missing".red(),
                dir.display()
            );
        }
    }

    if config.classifier.vocabulary.is_empty() {
        println!(
            "  {} classifier vocabulary is empty; every report will classify as Unknown",
            "warn".yellow()
        );
    }

    ok
}

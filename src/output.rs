//! Terminal status rendering.
//!
//! All status goes to stderr so stdout stays machine-readable: the final
//! line on stdout is the artifact name and substance label for whatever
//! packages the track downstream.

use owo_colors::OwoColorize;

/// Announce a pipeline stage.
pub fn stage(message: &str) {
    eprintln!("{}", message.dimmed());
}

/// Per-segment synthesis progress with a short text preview.
pub fn progress(index: usize, total: usize, text: &str) {
    let preview: String = text.chars().take(40).collect();
    let ellipsis = if text.chars().count() > 40 { "..." } else { "" };
    eprintln!(
        "{} {}",
        format!("[{}/{}]", index, total).dimmed(),
        format!("{preview}{ellipsis}")
    );
}

/// Note a segment skipped as a consecutive duplicate.
pub fn skipped(index: usize, total: usize) {
    eprintln!(
        "{} {}",
        format!("[{}/{}]", index, total).dimmed(),
        "(duplicate, skipped)".yellow()
    );
}

/// Final success line for humans; the machine-readable line goes to stdout
/// separately.
pub fn done(filename: &str, duration_secs: f64) {
    eprintln!(
        "{} {} ({:.1}s)",
        "Saved".green(),
        filename,
        duration_secs
    );
}

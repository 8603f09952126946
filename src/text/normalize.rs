//! Whitespace normalization, the foundation for segmentation and
//! duplicate detection.

/// Collapse every run of whitespace (spaces, tabs, newlines) into a single
/// space and trim the ends. No other transformation is applied.
///
/// Idempotent: normalizing already-normalized text is a no-op.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

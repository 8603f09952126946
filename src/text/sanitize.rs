//! Maps report titles to filesystem-safe artifact names.

use crate::defaults::FILENAME_ALLOWED_PUNCT;

/// Reduce a title to a filesystem-safe token.
///
/// Keeps ASCII letters, digits, spaces and `- _ . ( ) %`; every other
/// character is dropped (not substituted). Remaining spaces become
/// underscores. Total and deterministic, but not guaranteed non-empty:
/// a title made entirely of disallowed characters yields `""`, which the
/// caller must guard against before using the result as a path component.
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || FILENAME_ALLOWED_PUNCT.contains(*c))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_non_ascii_and_forbidden_punctuation() {
        assert_eq!(sanitize_filename("Déjà Vu: A Trip!"), "Dj_Vu_A_Trip");
    }

    #[test]
    fn keeps_allowed_punctuation() {
        assert_eq!(
            sanitize_filename("take-2_final.mix (50%)"),
            "take-2_final.mix_(50%)"
        );
    }

    #[test]
    fn replaces_spaces_with_underscores() {
        assert_eq!(sanitize_filename("a b  c"), "a_b__c");
    }

    #[test]
    fn all_disallowed_characters_yield_empty_string() {
        assert_eq!(sanitize_filename("🚀✨"), "");
        assert_eq!(sanitize_filename("§±@#!"), "");
        assert_eq!(sanitize_filename(""), "");
    }

    #[test]
    fn plain_alphanumeric_title_is_unchanged() {
        assert_eq!(sanitize_filename("Report42"), "Report42");
    }

    #[test]
    fn deterministic_for_same_input() {
        let title = "Some (Long) Trip: part 1 & 2";
        assert_eq!(sanitize_filename(title), sanitize_filename(title));
    }

    #[test]
    fn slashes_are_dropped_not_kept() {
        // Path separators must never survive into a filename.
        assert_eq!(sanitize_filename("a/b\\c"), "abc");
    }
}

//! Text matching helpers.
//!
//! Rendered text is normalized (whitespace runs collapsed, ends trimmed)
//! before matching. The loose query mode is a case-insensitive substring
//! match; the strict mode compares the whole normalized string.

/// Collapse interior whitespace runs to single spaces and trim the ends.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Loose text query: true when `needle` occurs as a case-insensitive
/// substring of `haystack`, after both sides are normalized.
pub fn contains_text(haystack: &str, needle: &str) -> bool {
    let haystack = normalize_text(haystack).to_lowercase();
    let needle = normalize_text(needle).to_lowercase();
    haystack.contains(&needle)
}

/// Strict text query: true when the normalized `haystack` equals `needle`
/// exactly, including case.
pub fn matches_text(haystack: &str, needle: &str) -> bool {
    normalize_text(haystack) == needle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_text("  Hello \n\t world  "), "Hello world");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn contains_is_case_insensitive() {
        assert!(contains_text("Hello world", "hello WORLD"));
    }

    #[test]
    fn contains_matches_substrings() {
        assert!(contains_text("Say: Hello   world!", "Hello world"));
    }

    #[test]
    fn contains_rejects_absent_text() {
        assert!(!contains_text("Hello there", "Hello world"));
    }

    #[test]
    fn matches_requires_the_exact_text() {
        assert!(matches_text("  Hello world ", "Hello world"));
        assert!(!matches_text("Hello world!", "Hello world"));
        assert!(!matches_text("hello world", "Hello world"));
    }
}

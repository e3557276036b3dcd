//! Query and term normalization.

/// Trim, lower-case, and collapse internal whitespace.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive substring check. `needle` must already be normalized;
/// an empty needle matches everything.
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || normalize(haystack).contains(needle)
}

/// Whether one term contains the other.
pub fn is_similar(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_case_and_whitespace() {
        assert_eq!(normalize("  Milano   Centrale "), "milano centrale");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\tRoma\n"), "roma");
    }

    #[test]
    fn contains_is_case_insensitive() {
        assert!(contains_normalized("Milano Centrale", "mil"));
        assert!(contains_normalized("Milano Centrale", "o c"));
        assert!(!contains_normalized("Torino", "mil"));
        assert!(contains_normalized("anything", ""));
    }

    #[test]
    fn similarity_is_symmetric() {
        assert!(is_similar("milano", "milano centrale"));
        assert!(is_similar("milano centrale", "milano"));
        assert!(!is_similar("milano", "roma"));
    }
}

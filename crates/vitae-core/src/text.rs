use once_cell::sync::Lazy;
use regex::Regex;

/// Collapse runs of consecutive newlines to a single newline and strip
/// leading and trailing whitespace.
///
/// Total and idempotent: `normalize(normalize(t)) == normalize(t)`.
pub fn normalize(text: &str) -> String {
    static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());
    NEWLINE_RUNS.replace_all(text, "\n").trim().to_string()
}

/// Expand common typographic ligatures found in PDF text.
pub fn expand_ligatures(text: &str) -> String {
    text.replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
        .replace(['\u{FB05}', '\u{FB06}'], "st")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_newline_runs() {
        assert_eq!(normalize("a\n\n\nb\n\nc"), "a\nb\nc");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize("  \n\nSkills\nPython\n\n  "), "Skills\nPython");
    }

    #[test]
    fn test_normalize_empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n \n "), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "",
            "plain line",
            "a\n\nb",
            "\n\n\nleading and trailing\n\n\n",
            "mixed \t whitespace\n\n\tindented\n",
            "unicode caf\u{e9}\n\n\u{fb01}nance",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_normalize_preserves_single_newlines() {
        assert_eq!(normalize("a\nb\nc"), "a\nb\nc");
    }

    #[test]
    fn test_expand_ligatures() {
        assert_eq!(expand_ligatures("\u{fb01}nance \u{fb02}uent"), "finance fluent");
        assert_eq!(expand_ligatures("no ligatures here"), "no ligatures here");
    }
}

//! Slug and tag label utilities.
//!
//! Sanitizes slugs and tags for comparison, and converts raw tags into
//! human-readable labels for tag pages.

/// Path separator stripped at the string boundary.
const SEPARATOR: char = '/';

/// Characters treated as word breaks when humanizing a tag.
const WORD_BREAKS: &[char] = &['-', '_'];

// ============================================================================
// Sanitization
// ============================================================================

/// Strip leading and trailing path separators.
///
/// Internal characters are never touched:
///
/// | Input | Output |
/// |-------|--------|
/// | `/web-dev/` | `web-dev` |
/// | `web-dev` | `web-dev` |
/// | `/a/b/` | `a/b` |
/// | `/` | `` |
pub fn sanitize(text: &str) -> &str {
    text.trim_matches(SEPARATOR)
}

// ============================================================================
// Humanization
// ============================================================================

/// Convert a raw tag into its display label.
///
/// Each hyphen or underscore becomes one space and the first letter of each
/// word is capitalized. Everything else is kept as is, so acronyms survive:
/// `"open-source"` → `"Open Source"`, `"AI"` → `"AI"`.
pub fn humanize(tag: &str) -> String {
    let mut label = String::with_capacity(tag.len());
    let mut word_start = true;
    for c in tag.chars() {
        let c = if WORD_BREAKS.contains(&c) { ' ' } else { c };
        if word_start {
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
        word_start = c.is_whitespace();
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_both_ends() {
        assert_eq!(sanitize("/web-dev/"), "web-dev");
        assert_eq!(sanitize("/web-dev"), "web-dev");
        assert_eq!(sanitize("web-dev/"), "web-dev");
    }

    #[test]
    fn test_sanitize_keeps_internal_separators() {
        assert_eq!(sanitize("/guides/rust/"), "guides/rust");
        assert_eq!(sanitize("a b/c-d"), "a b/c-d");
    }

    #[test]
    fn test_sanitize_root_and_empty() {
        assert_eq!(sanitize("/"), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for input in ["/web-dev/", "//double//", "plain", "/", "/a/b/", ""] {
            let once = sanitize(input);
            assert_eq!(sanitize(once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_humanize_hyphens() {
        assert_eq!(humanize("open-source"), "Open Source");
        assert_eq!(humanize("machine-learning-tools"), "Machine Learning Tools");
    }

    #[test]
    fn test_humanize_underscores() {
        assert_eq!(humanize("web_design"), "Web Design");
    }

    #[test]
    fn test_humanize_keeps_case_of_tail() {
        assert_eq!(humanize("AI"), "AI");
        assert_eq!(humanize("ai"), "Ai");
        assert_eq!(humanize("gitHub-actions"), "GitHub Actions");
    }

    #[test]
    fn test_humanize_maps_every_break() {
        assert_eq!(humanize("data--viz"), "Data  Viz");
        assert_eq!(humanize("-lead_"), " Lead ");
        assert_eq!(humanize("dev ops"), "Dev Ops");
    }

    #[test]
    fn test_humanize_unicode() {
        assert_eq!(humanize("élan-vital"), "Élan Vital");
    }

    #[test]
    fn test_humanize_is_deterministic() {
        assert_eq!(humanize("open-source"), humanize("open-source"));
        assert_eq!(humanize(""), "");
    }
}

//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [source] Section Defaults
// ============================================================================

pub mod source {
    use std::path::PathBuf;

    pub fn documents() -> PathBuf {
        "data/documents.json".into()
    }

    pub fn links() -> PathBuf {
        "data/links.json".into()
    }

    pub fn status() -> String {
        "Completed".into()
    }

    pub fn base_path() -> String {
        "pages".into()
    }
}

// ============================================================================
// [templates] Section Defaults
// ============================================================================

pub mod templates {
    use std::path::PathBuf;

    pub fn category() -> PathBuf {
        "src/templates/category.jsx".into()
    }

    pub fn tag() -> PathBuf {
        "src/templates/tag.jsx".into()
    }
}

// ============================================================================
// [output] Section Defaults
// ============================================================================

pub mod output {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "public".into()
    }

    pub fn tags_prefix() -> String {
        "/tags/".into()
    }
}

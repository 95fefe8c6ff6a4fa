//! Content types consumed from the host's query results.
//!
//! Every field the host may omit is optional here: a missing value reaches
//! the page context as `null` instead of aborting the build.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A category document: one Markdown file with front-matter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    /// Front-matter block, passed to the category page untouched.
    pub frontmatter: Frontmatter,

    /// URL slug derived from the file path (e.g. "/web-dev/").
    pub slug: String,

    /// Rendered HTML body.
    pub html: Option<String>,
}

/// Front-matter of a category document.
///
/// `title`, `intro` and `image` are the fields the templates query. Any
/// other key is kept in `extra` so the page context receives the full block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub intro: Option<String>,

    #[serde(default)]
    pub image: Option<ImageVariants>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Pre-rendered sizes of a document's cover image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageVariants {
    /// Social card variant.
    #[serde(default)]
    pub twitter_card: Option<FixedImage>,

    /// Full-width banner variant (1600px).
    #[serde(default)]
    pub banner: Option<FixedImage>,
}

/// A fixed-size image produced by the image pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedImage {
    #[serde(default)]
    pub fixed: Option<ImageSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    #[serde(default)]
    pub src: Option<String>,
}

/// A link from the dataset.
///
/// Set-valued fields keep the dataset's order; membership is what matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub countries: Vec<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "null_as_false")]
    pub featured: bool,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    /// Declared by the schema hook so records without an image still resolve.
    #[serde(default)]
    pub image: Option<String>,
}

impl LinkRecord {
    /// Whether this link is listed under the given category slug.
    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Whether this link carries the given tag (case-sensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Spreadsheet cells come back as `null` when empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

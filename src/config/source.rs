//! `[source]` section configuration.
//!
//! Locates the exported query responses and controls how they are read.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[source]` section in linkpages.toml - upstream query results.
///
/// # Example
/// ```toml
/// [source]
/// documents = "data/documents.json"
/// links = "data/links.json"
/// status = "Completed"
/// base_path = "pages"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Response of the category documents query.
    #[serde(default = "defaults::source::documents")]
    #[educe(Default = defaults::source::documents())]
    pub documents: PathBuf,

    /// Response of the dataset links query.
    #[serde(default = "defaults::source::links")]
    #[educe(Default = defaults::source::links())]
    pub links: PathBuf,

    /// Only dataset rows with this status are published.
    #[serde(default = "defaults::source::status")]
    #[educe(Default = defaults::source::status())]
    pub status: String,

    /// Content directory prefix stripped when deriving document slugs.
    #[serde(default = "defaults::source::base_path")]
    #[educe(Default = defaults::source::base_path())]
    pub base_path: String,
}

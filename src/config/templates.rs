//! `[templates]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[templates]` section in linkpages.toml - page template files.
///
/// # Example
/// ```toml
/// [templates]
/// category = "src/templates/category.jsx"
/// tag = "src/templates/tag.jsx"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Template for category listing pages.
    #[serde(default = "defaults::templates::category")]
    #[educe(Default = defaults::templates::category())]
    pub category: PathBuf,

    /// Template for tag listing pages.
    #[serde(default = "defaults::templates::tag")]
    #[educe(Default = defaults::templates::tag())]
    pub tag: PathBuf,
}

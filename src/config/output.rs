//! `[output]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[output]` section in linkpages.toml - where registrations go.
///
/// # Example
/// ```toml
/// [output]
/// dir = "public"
/// tags_prefix = "/tags/"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory receiving `pages.json` and `schema.graphql`.
    #[serde(default = "defaults::output::dir")]
    #[educe(Default = defaults::output::dir())]
    pub dir: PathBuf,

    /// Path prefix of tag pages. Must start and end with `/`.
    #[serde(default = "defaults::output::tags_prefix")]
    #[educe(Default = defaults::output::tags_prefix())]
    pub tags_prefix: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_output_config() {
        let config = r#"
            [output]
            dir = "build"
            tags_prefix = "/topics/"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.output.dir, PathBuf::from("build"));
        assert_eq!(config.output.tags_prefix, "/topics/");
    }

    #[test]
    fn test_output_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.output.dir, PathBuf::from("public"));
        assert_eq!(config.output.tags_prefix, "/tags/");
    }
}

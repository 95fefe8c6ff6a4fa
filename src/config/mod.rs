//! Site configuration management for `linkpages.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                         |
//! |---------------|-------------------------------------------------|
//! | `[source]`    | Exported query responses, status filter         |
//! | `[templates]` | Template files for category and tag pages       |
//! | `[output]`    | Manifest directory, tag page path prefix        |
//!
//! # Example
//!
//! ```toml
//! [source]
//! documents = "data/documents.json"
//! links = "data/links.json"
//!
//! [templates]
//! category = "src/templates/category.jsx"
//! tag = "src/templates/tag.jsx"
//!
//! [output]
//! dir = "public"
//! ```

pub mod defaults;
mod error;
mod output;
mod source;
mod templates;

use output::OutputConfig;
use source::SourceConfig;
use templates::TemplatesConfig;

pub use error::ConfigError;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing linkpages.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root every relative path is resolved against
    #[serde(skip)]
    #[educe(Default = PathBuf::from("./"))]
    pub root: PathBuf,

    /// Upstream query results
    #[serde(default)]
    pub source: SourceConfig,

    /// Page templates
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// Registration output
    #[serde(default)]
    pub output: OutputConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));

        if let Commands::Build { documents, links, output } = &cli.command {
            Self::update_option(&mut self.source.documents, documents.as_ref());
            Self::update_option(&mut self.source.links, links.as_ref());
            Self::update_option(&mut self.output.dir, output.as_ref());
        }

        self.update_path_with_root(&root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against the root and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config: &Path) {
        let root = Self::normalize_path(root);

        self.config_path = Self::normalize_path(&root.join(config));
        self.source.documents = Self::normalize_path(&root.join(&self.source.documents));
        self.source.links = Self::normalize_path(&root.join(&self.source.links));
        self.templates.category = Self::normalize_path(&root.join(&self.templates.category));
        self.templates.tag = Self::normalize_path(&root.join(&self.templates.tag));
        self.output.dir = Self::normalize_path(&root.join(&self.output.dir));
        self.root = root;
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before building
    pub fn validate(&self) -> Result<()> {
        if self.source.status.trim().is_empty() {
            bail!(ConfigError::Validation(
                "[source.status] must not be empty".into()
            ));
        }

        let prefix = &self.output.tags_prefix;
        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            bail!(ConfigError::Validation(format!(
                "[output.tags_prefix] must start and end with `/`, got `{prefix}`"
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Page registration with the host build.
//!
//! Registration is sequential: each request is awaited before the next one
//! is sent, so the host sees pages in emission order.

use std::future::Future;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::Serialize;

use super::{PageContext, PageRequest, Template};
use crate::config::SiteConfig;
use crate::data::schema::{schema_customization, to_sdl};
use crate::log;

/// File name of the registered pages manifest.
pub const MANIFEST_FILE: &str = "pages.json";
/// File name of the schema type definitions.
pub const SCHEMA_FILE: &str = "schema.graphql";

/// Receives page-creation requests.
pub trait PageRegistrar {
    fn create_page(&mut self, page: PageRequest) -> impl Future<Output = Result<()>>;
}

/// Register every page in order, stopping at the first failure.
///
/// Returns the number of pages registered.
pub async fn create_pages<R: PageRegistrar>(registrar: &mut R, pages: Vec<PageRequest>) -> Result<usize> {
    let mut count = 0;
    for page in pages {
        let path = page.path.clone();
        registrar
            .create_page(page)
            .await
            .with_context(|| format!("Failed to create page `{path}`"))?;
        count += 1;
    }
    Ok(count)
}

/// A page as the host consumes it: path, template file and context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisteredPage {
    pub path: String,
    pub component: PathBuf,
    pub context: PageContext,
}

/// Collects registrations and writes them out as a manifest.
#[derive(Debug)]
pub struct ManifestRegistrar {
    category: PathBuf,
    tag: PathBuf,
    pages: Vec<RegisteredPage>,
    /// Position of each path in `pages`.
    index: FxHashMap<String, usize>,
}

impl ManifestRegistrar {
    pub fn new(category: impl Into<PathBuf>, tag: impl Into<PathBuf>) -> Self {
        Self {
            category: category.into(),
            tag: tag.into(),
            pages: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.templates.category.clone(), config.templates.tag.clone())
    }

    /// Template file for a template id.
    pub fn component(&self, template: Template) -> &Path {
        match template {
            Template::Category => &self.category,
            Template::Tag => &self.tag,
        }
    }

    pub fn pages(&self) -> &[RegisteredPage] {
        &self.pages
    }

    /// Write `pages.json` and `schema.graphql` into `output`.
    pub fn write(&self, output: &Path) -> Result<()> {
        std::fs::create_dir_all(output)
            .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

        let manifest = output.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(&self.pages)?;
        std::fs::write(&manifest, json)
            .with_context(|| format!("Failed to write {}", manifest.display()))?;

        let schema = output.join(SCHEMA_FILE);
        std::fs::write(&schema, to_sdl(&schema_customization()))
            .with_context(|| format!("Failed to write {}", schema.display()))?;

        Ok(())
    }
}

impl PageRegistrar for ManifestRegistrar {
    /// A later request for an already registered path replaces the earlier one.
    async fn create_page(&mut self, page: PageRequest) -> Result<()> {
        let registered = RegisteredPage {
            component: self.component(page.template).to_path_buf(),
            path: page.path,
            context: page.context,
        };

        match self.index.get(&registered.path) {
            Some(&pos) => {
                log!("warn"; "page `{}` registered twice, keeping the last one", registered.path);
                self.pages[pos] = registered;
            }
            None => {
                self.index.insert(registered.path.clone(), self.pages.len());
                self.pages.push(registered);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LinkRecord;
    use crate::pages::TagContext;
    use anyhow::bail;
    use tempfile::TempDir;

    fn tag_page(path: &str, label: &str) -> PageRequest {
        PageRequest {
            path: path.into(),
            template: Template::Tag,
            context: PageContext::Tag(TagContext {
                tag: label.into(),
                links: vec![LinkRecord::default()],
            }),
        }
    }

    /// Records paths and fails on a chosen one.
    #[derive(Default)]
    struct Recorder {
        seen: Vec<String>,
        fail_on: Option<&'static str>,
    }

    impl PageRegistrar for Recorder {
        async fn create_page(&mut self, page: PageRequest) -> Result<()> {
            tokio::task::yield_now().await;
            if self.fail_on == Some(page.path.as_str()) {
                bail!("rejected");
            }
            self.seen.push(page.path);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_create_pages_preserves_order() {
        let mut recorder = Recorder::default();
        let pages = vec![tag_page("/c", "C"), tag_page("/a", "A"), tag_page("/b", "B")];

        let count = create_pages(&mut recorder, pages).await.unwrap();
        assert_eq!(count, 3);
        assert_eq!(recorder.seen, vec!["/c", "/a", "/b"]);
    }

    #[tokio::test]
    async fn test_create_pages_stops_at_first_failure() {
        let mut recorder = Recorder {
            fail_on: Some("/a"),
            ..Default::default()
        };
        let pages = vec![tag_page("/c", "C"), tag_page("/a", "A"), tag_page("/b", "B")];

        let err = create_pages(&mut recorder, pages).await.unwrap_err();
        assert!(format!("{err:#}").contains("/a"));
        assert_eq!(recorder.seen, vec!["/c"]);
    }

    #[tokio::test]
    async fn test_manifest_resolves_components() {
        let mut registrar = ManifestRegistrar::new("/site/category.jsx", "/site/tag.jsx");
        registrar.create_page(tag_page("/tags/rust", "Rust")).await.unwrap();

        let page = &registrar.pages()[0];
        assert_eq!(page.component, PathBuf::from("/site/tag.jsx"));
        assert_eq!(registrar.component(Template::Category), Path::new("/site/category.jsx"));
    }

    #[tokio::test]
    async fn test_manifest_replaces_duplicate_path() {
        let mut registrar = ManifestRegistrar::new("c.jsx", "t.jsx");
        registrar.create_page(tag_page("/tags/x", "First")).await.unwrap();
        registrar.create_page(tag_page("/tags/y", "Other")).await.unwrap();
        registrar.create_page(tag_page("/tags/x", "Second")).await.unwrap();

        let pages = registrar.pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].path, "/tags/x");
        let PageContext::Tag(ctx) = &pages[0].context else {
            panic!("expected tag context");
        };
        assert_eq!(ctx.tag, "Second");
    }

    #[tokio::test]
    async fn test_manifest_write() {
        let dir = TempDir::new().unwrap();
        let mut registrar = ManifestRegistrar::new("c.jsx", "t.jsx");
        registrar.create_page(tag_page("/tags/rust", "Rust")).await.unwrap();
        registrar.write(&dir.path().join("out")).unwrap();

        let manifest = std::fs::read_to_string(dir.path().join("out").join(MANIFEST_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(value[0]["path"], "/tags/rust");
        assert_eq!(value[0]["component"], "t.jsx");
        assert_eq!(value[0]["context"]["tag"], "Rust");

        let schema = std::fs::read_to_string(dir.path().join("out").join(SCHEMA_FILE)).unwrap();
        assert!(schema.contains("type AirtableData implements Node"));
    }
}

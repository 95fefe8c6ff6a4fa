//! Page-creation requests for category and tag listings.
//!
//! # Architecture
//!
//! ```text
//! documents ──► category_pages() ──┐
//!                                  ├──► Vec<PageRequest> ──► registrar
//! links ──► collect_tags() ──► tag_pages()
//! ```
//!
//! Categories come first in document order, then tags in order of first
//! occurrence. A category or tag with no matching links still gets a page.

mod registrar;

pub use registrar::{ManifestRegistrar, PageRegistrar, create_pages};

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::data::{Document, Frontmatter, LinkRecord};
use crate::utils::slug::{humanize, sanitize};

/// Template a page is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Category,
    Tag,
}

/// One page the host should emit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRequest {
    pub path: String,
    pub template: Template,
    pub context: PageContext,
}

/// Data handed to the page template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageContext {
    Category(CategoryContext),
    Tag(TagContext),
}

impl PageContext {
    pub fn links(&self) -> &[LinkRecord] {
        match self {
            Self::Category(ctx) => &ctx.links,
            Self::Tag(ctx) => &ctx.links,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryContext {
    /// Full front-matter of the category document.
    pub category: Frontmatter,
    pub html: Option<String>,
    pub links: Vec<LinkRecord>,
    /// Slug as indexed, separators included.
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagContext {
    /// Human-readable tag label.
    pub tag: String,
    pub links: Vec<LinkRecord>,
}

/// Derives page-creation requests from the build's query results.
#[derive(Debug, Clone)]
pub struct PageContextBuilder {
    /// Prefix of tag page paths, e.g. `/tags/`.
    tags_prefix: String,
}

impl Default for PageContextBuilder {
    fn default() -> Self {
        Self::new(crate::config::defaults::output::tags_prefix())
    }
}

impl PageContextBuilder {
    pub fn new(tags_prefix: impl Into<String>) -> Self {
        Self { tags_prefix: tags_prefix.into() }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.output.tags_prefix.clone())
    }

    /// All page requests: categories in document order, then tags.
    pub fn build(&self, documents: &[Document], links: &[LinkRecord]) -> Vec<PageRequest> {
        let mut pages = self.category_pages(documents, links);
        pages.extend(self.tag_pages(links));
        pages
    }

    /// One request per document, listing the links filed under its slug.
    pub fn category_pages(&self, documents: &[Document], links: &[LinkRecord]) -> Vec<PageRequest> {
        documents
            .iter()
            .map(|doc| {
                let category = sanitize(&doc.slug);
                let links = links.iter().filter(|l| l.in_category(category)).cloned().collect();
                PageRequest {
                    path: doc.slug.clone(),
                    template: Template::Category,
                    context: PageContext::Category(CategoryContext {
                        category: doc.frontmatter.clone(),
                        html: doc.html.clone(),
                        links,
                        slug: doc.slug.clone(),
                    }),
                }
            })
            .collect()
    }

    /// One request per distinct tag.
    pub fn tag_pages(&self, links: &[LinkRecord]) -> Vec<PageRequest> {
        collect_tags(links)
            .into_iter()
            .map(|tag| {
                let sanitized = sanitize(tag);
                let tagged = links.iter().filter(|l| l.has_tag(sanitized)).cloned().collect();
                PageRequest {
                    path: format!("{}{tag}", self.tags_prefix),
                    template: Template::Tag,
                    context: PageContext::Tag(TagContext {
                        tag: humanize(tag),
                        links: tagged,
                    }),
                }
            })
            .collect()
    }
}

/// Union of every link's tags, in order of first occurrence.
///
/// Tags are compared case-sensitively: `ai` and `AI` are distinct.
pub fn collect_tags(links: &[LinkRecord]) -> Vec<&str> {
    let (tags, _seen) = links.iter().flat_map(|link| &link.tags).fold(
        (Vec::new(), FxHashSet::default()),
        |(mut tags, mut seen), tag| {
            if seen.insert(tag.as_str()) {
                tags.push(tag.as_str());
            }
            (tags, seen)
        },
    );
    tags
}

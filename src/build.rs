//! Page generation orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── QuerySource::documents()   ─┐  either failing aborts the build
//!     ├── QuerySource::links()       ─┘
//!     │
//!     ├── PageContextBuilder::build() ──► categories, then tags
//!     │
//!     ├── create_pages()  ──► one registration at a time, in order
//!     │
//!     └── ManifestRegistrar::write() ──► pages.json + schema.graphql
//! ```

use crate::{
    config::SiteConfig,
    data::{JsonQuerySource, QuerySource},
    log,
    pages::{ManifestRegistrar, PageContextBuilder, PageRegistrar, Template, create_pages},
};
use anyhow::{Context, Result};

/// Counts reported once a build succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub documents: usize,
    pub links: usize,
    pub category_pages: usize,
    pub tag_pages: usize,
}

/// Build every listing page described by `config`.
///
/// The manifest is written only after all registrations succeeded.
pub async fn build_site(config: &SiteConfig) -> Result<BuildSummary> {
    let source = JsonQuerySource::from_config(config);
    let builder = PageContextBuilder::from_config(config);
    let mut registrar = ManifestRegistrar::from_config(config);

    let summary = generate_pages(&source, &builder, &mut registrar).await?;

    registrar.write(&config.output.dir)?;
    log!("build"; "wrote {} pages to {}", registrar.pages().len(), config.output.dir.display());

    Ok(summary)
}

/// Query, derive and register pages.
pub async fn generate_pages<S, R>(
    source: &S,
    builder: &PageContextBuilder,
    registrar: &mut R,
) -> Result<BuildSummary>
where
    S: QuerySource,
    R: PageRegistrar,
{
    let documents = source.documents().await.context("Failed to query category documents")?;
    let links = source.links().await.context("Failed to query links")?;
    log!("query"; "{} documents, {} links", documents.len(), links.len());

    let pages = builder.build(&documents, &links);
    let empty = pages.iter().filter(|p| p.context.links().is_empty()).count();
    if empty > 0 {
        log!("warn"; "{empty} pages list no links");
    }
    let category_pages = pages.iter().filter(|p| p.template == Template::Category).count();
    let summary = BuildSummary {
        documents: documents.len(),
        links: links.len(),
        category_pages,
        tag_pages: pages.len() - category_pages,
    };

    let registered = create_pages(registrar, pages).await?;
    log!(
        "pages";
        "registered {} pages ({} categories, {} tags)",
        registered, summary.category_pages, summary.tag_pages
    );

    Ok(summary)
}

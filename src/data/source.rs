//! Query sources: where the documents and links come from.

use std::future::Future;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::query::{DocumentsData, LinksData, QueryError, QueryResponse};
use super::types::{Document, LinkRecord};
use crate::config::SiteConfig;

/// The two upstream queries of a build.
///
/// Either failing aborts page generation; nothing is retried.
pub trait QuerySource {
    /// Category documents, in the host's iteration order.
    fn documents(&self) -> impl Future<Output = Result<Vec<Document>, QueryError>>;

    /// Dataset links already filtered to the published status.
    fn links(&self) -> impl Future<Output = Result<Vec<LinkRecord>, QueryError>>;
}

/// Reads query responses the host exported as JSON files.
#[derive(Debug, Clone)]
pub struct JsonQuerySource {
    pub documents: PathBuf,
    pub links: PathBuf,
    /// Dataset status a link must have to be published.
    pub status: String,
    /// Content directory prefix stripped when deriving slugs.
    pub base_path: String,
}

impl JsonQuerySource {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            documents: config.source.documents.clone(),
            links: config.source.links.clone(),
            status: config.source.status.clone(),
            base_path: config.source.base_path.clone(),
        }
    }
}

impl QuerySource for JsonQuerySource {
    async fn documents(&self) -> Result<Vec<Document>, QueryError> {
        let data: DocumentsData = read_response(&self.documents, "documents").await?;
        Ok(data.into_documents(&self.base_path))
    }

    async fn links(&self) -> Result<Vec<LinkRecord>, QueryError> {
        let data: LinksData = read_response(&self.links, "links").await?;
        Ok(data.into_links(&self.status))
    }
}

async fn read_response<T: DeserializeOwned>(path: &Path, query: &'static str) -> Result<T, QueryError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| QueryError::Io(path.to_path_buf(), err))?;
    let response: QueryResponse<T> =
        serde_json::from_slice(&bytes).map_err(|err| QueryError::Decode(path.to_path_buf(), err))?;
    response.into_data(query)
}

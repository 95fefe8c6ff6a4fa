//! Decoding of the host's query responses.
//!
//! Two queries feed the build:
//!
//! | Query | Root field | Yields |
//! |-------|------------|--------|
//! | documents | `allMarkdownRemark.edges[].node` | [`Document`] |
//! | links | `allAirtable.nodes[].data` | [`LinkRecord`] |
//!
//! A response carrying `errors`, or lacking `data`, is a failed query.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use super::node::{MARKDOWN_NODE, NodeInfo, on_create_node};
use super::types::{Document, Frontmatter, LinkRecord};

/// Failure of an upstream query. Always fatal to the build.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to decode `{0}`")]
    Decode(PathBuf, #[source] serde_json::Error),

    #[error("{query} query failed: {}", .messages.join("; "))]
    Upstream {
        query: &'static str,
        messages: Vec<String>,
    },

    #[error("{query} query returned no data")]
    MissingData { query: &'static str },
}

/// GraphQL-style response envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct QueryResponse<T> {
    #[serde(default)]
    pub data: Option<T>,

    #[serde(default)]
    pub errors: Vec<QueryErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct QueryErrorEntry {
    pub message: String,
}

impl<T> QueryResponse<T> {
    /// Unwrap the payload, turning reported errors into a [`QueryError`].
    pub fn into_data(self, query: &'static str) -> Result<T, QueryError> {
        if !self.errors.is_empty() {
            return Err(QueryError::Upstream {
                query,
                messages: self.errors.into_iter().map(|e| e.message).collect(),
            });
        }
        self.data.ok_or(QueryError::MissingData { query })
    }
}

// ============================================================================
// Documents query
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsData {
    pub all_markdown_remark: Connection<DocumentNode>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    #[serde(default)]
    pub frontmatter: Frontmatter,

    #[serde(default)]
    pub fields: NodeFields,

    #[serde(default)]
    pub html: Option<String>,

    /// Source path relative to the content root, when the host exports it.
    #[serde(default)]
    pub file_relative_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NodeFields {
    #[serde(default)]
    pub slug: Option<String>,
}

impl DocumentsData {
    /// Flatten the connection into documents.
    ///
    /// Nodes exported without a `slug` field get one from the node field
    /// hook. A node with neither keeps an empty slug.
    pub fn into_documents(self, base_path: &str) -> Vec<Document> {
        self.all_markdown_remark
            .edges
            .into_iter()
            .map(|Edge { node }| {
                let slug = node.fields.slug.or_else(|| {
                    let path = node.file_relative_path.as_deref()?;
                    let info = NodeInfo { kind: MARKDOWN_NODE, relative_path: Some(path) };
                    on_create_node(&info, base_path).map(|field| field.value)
                });
                Document {
                    frontmatter: node.frontmatter,
                    slug: slug.unwrap_or_default(),
                    html: node.html,
                }
            })
            .collect()
    }
}

// ============================================================================
// Links query
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinksData {
    pub all_airtable: NodeList<DatasetNode>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct NodeList<T> {
    #[serde(default)]
    pub nodes: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct DatasetNode {
    pub data: DatasetRow,
}

/// One spreadsheet row: the link plus its publication status.
#[derive(Debug, Deserialize)]
pub struct DatasetRow {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(flatten)]
    pub link: LinkRecord,
}

impl LinksData {
    /// Keep only rows whose status equals `status`.
    pub fn into_links(self, status: &str) -> Vec<LinkRecord> {
        self.all_airtable
            .nodes
            .into_iter()
            .filter(|node| node.data.status.as_deref() == Some(status))
            .map(|node| node.data.link)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn documents(value: serde_json::Value) -> Result<DocumentsData, QueryError> {
        serde_json::from_value::<QueryResponse<DocumentsData>>(value)
            .unwrap()
            .into_data("documents")
    }

    #[test]
    fn test_documents_response() {
        let docs = documents(json!({
            "data": { "allMarkdownRemark": { "edges": [
                { "node": {
                    "frontmatter": { "title": "Web Dev", "intro": "Build things" },
                    "fields": { "slug": "/web-dev/" },
                    "html": "<p>Hello</p>"
                } }
            ] } }
        }))
        .unwrap()
        .into_documents("pages");

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].slug, "/web-dev/");
        assert_eq!(docs[0].html.as_deref(), Some("<p>Hello</p>"));
        assert_eq!(docs[0].frontmatter.title.as_deref(), Some("Web Dev"));
    }

    #[test]
    fn test_documents_slug_from_file_path() {
        let docs = documents(json!({
            "data": { "allMarkdownRemark": { "edges": [
                { "node": { "fileRelativePath": "pages/design/index.md" } },
                { "node": { "html": "<p>orphan</p>" } }
            ] } }
        }))
        .unwrap()
        .into_documents("pages");

        assert_eq!(docs[0].slug, "/design/");
        assert_eq!(docs[1].slug, "");
    }

    #[test]
    fn test_upstream_errors_fail() {
        let err = documents(json!({
            "data": null,
            "errors": [{ "message": "Cannot query field" }, { "message": "second" }]
        }))
        .unwrap_err();

        assert!(matches!(err, QueryError::Upstream { query: "documents", .. }));
        let display = err.to_string();
        assert!(display.contains("Cannot query field"));
        assert!(display.contains("second"));
    }

    #[test]
    fn test_missing_data_fails() {
        let err = documents(json!({})).unwrap_err();
        assert!(matches!(err, QueryError::MissingData { query: "documents" }));
    }

    #[test]
    fn test_links_filtered_by_status() {
        let response: QueryResponse<LinksData> = serde_json::from_value(json!({
            "data": { "allAirtable": { "nodes": [
                { "data": { "status": "Completed", "title": "Kept", "tags": ["ai"] } },
                { "data": { "status": "Draft", "title": "Dropped" } },
                { "data": { "title": "No status" } }
            ] } }
        }))
        .unwrap();

        let links = response.into_data("links").unwrap().into_links("Completed");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].title.as_deref(), Some("Kept"));
        assert_eq!(links[0].tags, vec!["ai"]);
    }

    #[test]
    fn test_empty_connections() {
        let docs = documents(json!({ "data": { "allMarkdownRemark": {} } }))
            .unwrap()
            .into_documents("pages");
        assert!(docs.is_empty());

        let response: QueryResponse<LinksData> =
            serde_json::from_value(json!({ "data": { "allAirtable": {} } })).unwrap();
        assert!(response.into_data("links").unwrap().into_links("Completed").is_empty());
    }

    #[test]
    fn test_status_match_is_exact() {
        let response: QueryResponse<LinksData> = serde_json::from_value(json!({
            "data": { "allAirtable": { "nodes": [
                { "data": { "status": "completed" } }
            ] } }
        }))
        .unwrap();

        assert!(response.into_data("links").unwrap().into_links("Completed").is_empty());
    }
}

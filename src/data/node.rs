//! Node field extension: derives the `slug` field of Markdown nodes.
//!
//! # Path Mapping Examples
//!
//! | Relative path | Base path | Slug |
//! |---------------|-----------|------|
//! | `pages/web-dev.md` | `pages` | `/web-dev/` |
//! | `pages/design/index.md` | `pages` | `/design/` |
//! | `pages/index.md` | `pages` | `/` |
//! | `guides/rust.md` | `pages` | `/guides/rust/` |

/// Node type of indexed Markdown documents.
pub const MARKDOWN_NODE: &str = "MarkdownRemark";

/// Name of the derived field.
pub const SLUG_FIELD: &str = "slug";

/// The parts of an indexed node the hook looks at.
#[derive(Debug, Clone, Copy)]
pub struct NodeInfo<'a> {
    /// Host node type (e.g. `MarkdownRemark`).
    pub kind: &'a str,
    /// File path relative to the content root, for file-backed nodes.
    pub relative_path: Option<&'a str>,
}

/// A derived field to attach to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeField {
    pub name: &'static str,
    pub value: String,
}

/// Compute the fields to attach to a newly created node.
///
/// Only file-backed Markdown nodes get a slug; every other node is left alone.
pub fn on_create_node(node: &NodeInfo<'_>, base_path: &str) -> Option<NodeField> {
    if node.kind != MARKDOWN_NODE {
        return None;
    }
    let path = node.relative_path?;
    Some(NodeField {
        name: SLUG_FIELD,
        value: create_file_path(path, base_path),
    })
}

/// Map a content file path to its URL slug.
///
/// Strips `base_path` when it prefixes the path, drops the extension, and
/// folds `index` files into their directory. The result always starts and
/// ends with `/`.
pub fn create_file_path(relative_path: &str, base_path: &str) -> String {
    let path = relative_path.replace('\\', "/");
    let base = base_path.trim_matches('/');

    let path = path.trim_start_matches("./").trim_matches('/');
    let path = match path.strip_prefix(base) {
        Some(rest) if !base.is_empty() && (rest.is_empty() || rest.starts_with('/')) => rest,
        _ => path,
    };

    let (dir, file) = match path.trim_matches('/').rsplit_once('/') {
        Some((dir, file)) => (dir, file),
        None => ("", path.trim_matches('/')),
    };
    let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);

    let segments: Vec<&str> = dir
        .split('/')
        .chain((stem != "index").then_some(stem))
        .filter(|s| !s.is_empty())
        .collect();

    if segments.is_empty() {
        "/".to_owned()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

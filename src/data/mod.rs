//! Content consumed from the host framework.
//!
//! # Hooks
//!
//! ```text
//! node indexing ──► node::on_create_node    (slug field on Markdown nodes)
//! schema build  ──► schema::schema_customization (optional `image` column)
//! page build    ──► source::QuerySource     (documents + links queries)
//! ```

pub mod node;
pub mod query;
pub mod schema;
pub mod source;
mod types;

pub use query::QueryError;
pub use source::{JsonQuerySource, QuerySource};
pub use types::{Document, Frontmatter, LinkRecord};

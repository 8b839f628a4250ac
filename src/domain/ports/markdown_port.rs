//! Markdown rendering port definition.

use crate::domain::node::Node;

/// Port converting markdown source into a renderable node.
#[cfg_attr(test, mockall::automock)]
pub trait MarkdownPort: Send + Sync {
    /// Renders `markdown` into a node tree.
    fn render(&self, markdown: &str) -> Node;
}

use std::fmt;
use std::sync::Arc;

use crate::domain::node::Node;
use crate::domain::ports::MarkdownPort;
use crate::domain::theme::DeckTheme;

/// Long text split into paragraphs on newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongParagraphSlide {
    /// Body text; every `'\n'` starts a new block.
    pub text: String,
    /// Section title above the body.
    pub title: Option<String>,
}

impl LongParagraphSlide {
    /// Creates a paragraph slide.
    #[must_use]
    pub fn new(text: impl Into<String>, title: Option<String>) -> Self {
        Self {
            text: text.into(),
            title,
        }
    }

    /// Paragraph blocks in order, empty segments included.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    pub(super) fn content(&self, theme: &DeckTheme) -> Node {
        let blocks = self.paragraphs().map(Node::text).collect();

        let title = match self.title.as_deref().filter(|t| !t.is_empty()) {
            Some(title) => Node::text(title).with_class("fs-4"),
            None => Node::hidden(),
        };

        let body = Node::container(blocks)
            .with_class(format!(
                "d-flex flex-column gap-1 p-3 {} border-3 rounded",
                theme.border
            ))
            .with_style("width", "80%")
            .with_style("height", "80%")
            .with_style("overflow-y", "scroll");

        Node::container(vec![title, body])
            .with_class(format!("d-flex flex-column gap-2 {}", theme.center))
    }
}

/// Markdown block with an optional caption.
#[derive(Clone)]
pub struct MarkdownSlide {
    /// Markdown source.
    pub markdown: String,
    /// Caption under the block.
    pub footer: Option<String>,
    renderer: Arc<dyn MarkdownPort>,
}

impl MarkdownSlide {
    /// Creates a markdown slide converted through `renderer`.
    #[must_use]
    pub fn new(
        markdown: impl Into<String>,
        footer: Option<String>,
        renderer: Arc<dyn MarkdownPort>,
    ) -> Self {
        Self {
            markdown: markdown.into(),
            footer,
            renderer,
        }
    }

    pub(super) fn content(&self, theme: &DeckTheme) -> Node {
        let rendered = self.renderer.render(&self.markdown);

        let block = Node::container(vec![rendered])
            .with_class(format!(
                "d-flex {} {} border-2 border-black markdown",
                theme.center, theme.border
            ))
            .with_style("max-width", "80%")
            .with_style("max-height", "80%")
            .with_style("overflow-y", "scroll");

        let footer = match self.footer.as_deref().filter(|f| !f.is_empty()) {
            Some(footer) => Node::text(footer)
                .with_class(format!("d-flex {}", theme.center))
                .with_style("max-width", "100%")
                .with_style("font-weight", "300")
                .with_style("text-align", "center"),
            None => Node::hidden(),
        };

        Node::container(vec![block, footer])
            .with_class(format!("d-flex flex-column gap-2 {} p-1", theme.center))
    }
}

impl fmt::Debug for MarkdownSlide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkdownSlide")
            .field("markdown", &self.markdown)
            .field("footer", &self.footer)
            .finish_non_exhaustive()
    }
}

/// Numbered list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSlide {
    /// Items in display order.
    pub items: Vec<String>,
}

impl ListSlide {
    /// Creates a list slide.
    #[must_use]
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub(super) fn content(&self, theme: &DeckTheme) -> Node {
        let items = self
            .items
            .iter()
            .map(|item| Node::text(item).with_class("list-group-item"))
            .collect();

        Node::container(vec![
            Node::list(items, true).with_class("list-group list-group-numbered"),
        ])
        .with_class(format!("d-flex {} fs-2", theme.center))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::NodeKind;
    use crate::domain::ports::mocks::MockMarkdownPort;
    use mockall::predicate::function;

    #[test]
    fn test_paragraphs_split_on_newline_keeping_empty_segments() {
        let slide = LongParagraphSlide::new("a\nb\n\nc", None);
        let node = slide.content(&DeckTheme::default());

        let body = &node.children[1];
        let texts: Vec<_> = body.children.iter().filter_map(Node::as_text).collect();
        assert_eq!(texts, vec!["a", "b", "", "c"]);
        assert_eq!(body.style.get("overflow-y"), Some("scroll"));
    }

    #[test]
    fn test_paragraph_title_slot() {
        let theme = DeckTheme::default();
        let untitled = LongParagraphSlide::new("x", None).content(&theme);
        assert!(untitled.children[0].is_hidden());

        let titled = LongParagraphSlide::new("x", Some("Why".into())).content(&theme);
        assert_eq!(titled.children[0].as_text(), Some("Why"));
        assert!(titled.children[0].has_class("fs-4"));
    }

    #[test]
    fn test_markdown_delegates_to_renderer() {
        let mut port = MockMarkdownPort::new();
        port.expect_render()
            .with(function(|markdown: &str| markdown == "**bold**"))
            .times(1)
            .returning(|_| Node::text("bold").with_class("rendered"));

        let slide = MarkdownSlide::new("**bold**", Some("caption".into()), Arc::new(port));
        let node = slide.content(&DeckTheme::default());

        let block = &node.children[0];
        assert!(block.has_class("markdown"));
        assert_eq!(block.style.get("overflow-y"), Some("scroll"));
        assert!(block.children[0].has_class("rendered"));

        let footer = &node.children[1];
        assert_eq!(footer.as_text(), Some("caption"));
        assert_eq!(footer.style.get("font-weight"), Some("300"));
    }

    #[test]
    fn test_markdown_without_footer_hides_slot() {
        let mut port = MockMarkdownPort::new();
        port.expect_render().returning(|_| Node::default());

        let node = MarkdownSlide::new("text", None, Arc::new(port)).content(&DeckTheme::default());
        assert_eq!(node.children.len(), 2);
        assert!(node.children[1].is_hidden());
    }

    #[test]
    fn test_list_preserves_order_and_is_numbered() {
        let node = ListSlide::new(vec!["one".into(), "two".into(), "three".into()])
            .content(&DeckTheme::default());

        let list = &node.children[0];
        assert_eq!(list.kind, NodeKind::List { numbered: true });
        let items: Vec<_> = list.children.iter().filter_map(Node::as_text).collect();
        assert_eq!(items, vec!["one", "two", "three"]);
    }
}

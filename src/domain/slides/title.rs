use crate::domain::node::Node;
use crate::domain::theme::DeckTheme;

/// Background painted behind every outro slide.
pub const OUTRO_BACKGROUND: &str =
    "linear-gradient(0deg, rgba(255,255,255,1) 0%, rgba(255,160,0,1) 100%)";

/// Title slide fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleSlide {
    /// Main title.
    pub title: String,
    /// Line under the title.
    pub subtitle: Option<String>,
    /// Authors, joined with commas.
    pub authors: Option<Vec<String>>,
}

impl TitleSlide {
    /// Creates a title slide with only a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the authors.
    #[must_use]
    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = Some(authors);
        self
    }

    pub(super) fn content(&self, theme: &DeckTheme) -> Node {
        let title = Node::text(&self.title)
            .with_class("slide-title")
            .with_style("font-size", &theme.title_size)
            .with_style("font-weight", &theme.title_weight)
            .with_style("text-align", "center")
            .with_style("display", if self.title.is_empty() { "none" } else { "block" });

        let subtitle = match self.subtitle.as_deref().filter(|s| !s.is_empty()) {
            Some(subtitle) => Node::text(subtitle)
                .with_style("font-size", &theme.subtitle_size)
                .with_style("text-align", "center"),
            None => Node::hidden(),
        }
        .with_class("slide-subtitle");

        let authors = match self.authors.as_deref().filter(|a| !a.is_empty()) {
            Some(authors) => Node::text(authors.join(", "))
                .with_style("font-size", "1rem")
                .with_style("font-weight", "400")
                .with_style("text-align", "center"),
            None => Node::hidden(),
        }
        .with_class("slide-authors");

        Node::container(vec![title, subtitle, authors])
            .with_class(format!("d-flex flex-column gap-1 {}", theme.center))
    }
}

/// Closing slide text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutroSlide {
    /// Large centered text.
    pub text: String,
}

impl OutroSlide {
    /// Creates an outro slide.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub(super) fn content(&self, theme: &DeckTheme) -> Node {
        Node::text(&self.text)
            .with_class(format!("d-flex {}", theme.center))
            .with_style("font-size", &theme.title_size)
            .with_style("color", "white")
            .with_style("text-align", "center")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find_class<'a>(node: &'a Node, class: &str) -> &'a Node {
        node.children
            .iter()
            .find(|c| c.has_class(class))
            .unwrap_or_else(|| panic!("missing {class}"))
    }

    #[test]
    fn test_title_without_optionals_keeps_hidden_slots() {
        let node = TitleSlide::new("DocLLM").content(&DeckTheme::default());

        assert_eq!(node.children.len(), 3);
        let subtitle = find_class(&node, "slide-subtitle");
        let authors = find_class(&node, "slide-authors");
        assert!(subtitle.is_hidden());
        assert!(authors.is_hidden());
        assert!(!find_class(&node, "slide-title").is_hidden());
    }

    #[test]
    fn test_title_with_all_fields() {
        let theme = DeckTheme::default();
        let node = TitleSlide::new("Feedback")
            .with_subtitle("Shared task")
            .with_authors(vec!["Ada".into(), "Grace".into()])
            .content(&theme);

        let title = find_class(&node, "slide-title");
        assert_eq!(title.as_text(), Some("Feedback"));
        assert_eq!(title.style.get("font-size"), Some(theme.title_size.as_str()));
        assert_eq!(
            title.style.get("font-weight"),
            Some(theme.title_weight.as_str())
        );

        let subtitle = find_class(&node, "slide-subtitle");
        assert!(!subtitle.is_hidden());
        assert_eq!(subtitle.as_text(), Some("Shared task"));

        let authors = find_class(&node, "slide-authors");
        assert_eq!(authors.as_text(), Some("Ada, Grace"));
        assert!(node.has_class("flex-column"));
    }

    #[test]
    fn test_empty_author_list_is_hidden() {
        let node = TitleSlide::new("T")
            .with_authors(Vec::new())
            .content(&DeckTheme::default());
        assert!(find_class(&node, "slide-authors").is_hidden());
    }

    #[test]
    fn test_outro_text_is_large_and_white() {
        let theme = DeckTheme::default();
        let node = OutroSlide::new("Merci").content(&theme);
        assert_eq!(node.as_text(), Some("Merci"));
        assert_eq!(node.style.get("color"), Some("white"));
        assert_eq!(node.style.get("font-size"), Some(theme.title_size.as_str()));
    }
}

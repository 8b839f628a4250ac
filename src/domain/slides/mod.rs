//! Slide variants and the shared slide wrapper.
//!
//! Every variant only produces its content node. [`Slide::render`] is the one
//! place that sizes that content, overlays the index badge and applies the
//! background, so the wrapping is identical for every kind of slide.

mod composite;
mod media;
mod text;
mod title;

use std::sync::Arc;

pub use composite::{AutoFillSlide, SplitMode, SplitSlide};
pub use media::{CustomSlide, ImageSlide};
pub use text::{ListSlide, LongParagraphSlide, MarkdownSlide};
pub use title::{OUTRO_BACKGROUND, OutroSlide, TitleSlide};

use super::node::Node;
use super::theme::DeckTheme;

/// Vertical offset of the index badge.
pub const BADGE_TOP: &str = "97vh";
/// Horizontal offset of the index badge.
pub const BADGE_LEFT: &str = "3vh";
/// Class carried by every slide wrapper.
pub const WRAPPER_CLASS: &str = "slide-wrapper";
/// Class carried by every index badge.
pub const BADGE_CLASS: &str = "slide-badge";

/// Content variant of a slide.
#[derive(Debug, Clone)]
pub enum SlideKind {
    /// Title with optional subtitle and authors.
    Title(TitleSlide),
    /// Closing slide on a fixed gradient.
    Outro(OutroSlide),
    /// Scrollable stack of paragraphs.
    LongParagraph(LongParagraphSlide),
    /// Rendered markdown with optional footer.
    Markdown(MarkdownSlide),
    /// Numbered list.
    List(ListSlide),
    /// Single fitted image.
    Image(ImageSlide),
    /// Two slides side by side or stacked.
    Split(SplitSlide),
    /// Slides tiled in a wrapping grid.
    AutoFill(AutoFillSlide),
    /// Externally supplied node.
    Custom(CustomSlide),
}

impl SlideKind {
    fn content(&self, theme: &DeckTheme) -> Node {
        match self {
            Self::Title(slide) => slide.content(theme),
            Self::Outro(slide) => slide.content(theme),
            Self::LongParagraph(slide) => slide.content(theme),
            Self::Markdown(slide) => slide.content(theme),
            Self::List(slide) => slide.content(theme),
            Self::Image(slide) => slide.content(theme),
            Self::Split(slide) => slide.content(),
            Self::AutoFill(slide) => slide.content(theme),
            Self::Custom(slide) => slide.content(),
        }
    }

    /// Short lowercase name of the variant.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Outro(_) => "outro",
            Self::LongParagraph(_) => "paragraph",
            Self::Markdown(_) => "markdown",
            Self::List(_) => "list",
            Self::Image(_) => "image",
            Self::Split(_) => "split",
            Self::AutoFill(_) => "autofill",
            Self::Custom(_) => "custom",
        }
    }
}

/// One renderable unit of a deck.
#[derive(Debug, Clone)]
pub struct Slide {
    kind: SlideKind,
    theme: Arc<DeckTheme>,
    background: Option<String>,
}

impl Slide {
    /// Creates a slide. Outro slides start with their fixed gradient.
    #[must_use]
    pub fn new(kind: SlideKind, theme: Arc<DeckTheme>) -> Self {
        let background = match kind {
            SlideKind::Outro(_) => Some(OUTRO_BACKGROUND.to_string()),
            _ => None,
        };
        Self {
            kind,
            theme,
            background,
        }
    }

    /// Returns the content variant.
    #[must_use]
    pub const fn kind(&self) -> &SlideKind {
        &self.kind
    }

    /// Returns the stored background description.
    #[must_use]
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Stores a background description such as a CSS gradient. Not validated.
    pub fn set_background(&mut self, background: impl Into<String>) {
        self.background = Some(background.into());
    }

    /// Builder form of [`Slide::set_background`].
    #[must_use]
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.set_background(background);
        self
    }

    /// Produces the variant content without the slide wrapper.
    ///
    /// Composite slides embed their children through this, bypassing the
    /// children's own wrapper.
    #[must_use]
    pub fn content(&self) -> Node {
        self.kind.content(&self.theme)
    }

    /// Renders the full slide for position `index`.
    #[must_use]
    pub fn render(&self, index: usize) -> Node {
        wrap_content(self.content(), index, self.background.as_deref())
    }
}

fn wrap_content(mut content: Node, index: usize, background: Option<&str>) -> Node {
    content.style.set("height", "100%");
    content.style.set("width", "100%");

    let mut wrapper = Node::container(vec![content, index_badge(index)])
        .with_class(WRAPPER_CLASS)
        .with_id(format!("wrapper-{index}"))
        .with_style("padding", "0px")
        .with_style("width", "100%")
        .with_style("height", "100%");

    if let Some(background) = background {
        wrapper.style.set("background", background);
    }
    wrapper
}

fn index_badge(index: usize) -> Node {
    Node::text(index.to_string())
        .with_class(BADGE_CLASS)
        .with_style("position", "absolute")
        .with_style("top", BADGE_TOP)
        .with_style("left", BADGE_LEFT)
        .with_style("font-size", "large")
}

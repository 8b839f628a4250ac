//! Slide construction with a shared theme and markdown collaborator.

use std::sync::Arc;

use crate::domain::errors::SlideError;
use crate::domain::node::Node;
use crate::domain::ports::MarkdownPort;
use crate::domain::slides::{
    AutoFillSlide, CustomSlide, ImageSlide, ListSlide, LongParagraphSlide, MarkdownSlide,
    OutroSlide, Slide, SlideKind, SplitSlide, TitleSlide,
};
use crate::domain::theme::DeckTheme;

/// Builds slides that all share one theme and one markdown renderer.
#[derive(Clone)]
pub struct SlideFactory {
    theme: Arc<DeckTheme>,
    markdown: Arc<dyn MarkdownPort>,
}

impl SlideFactory {
    #[must_use]
    pub fn new(theme: DeckTheme, markdown: Arc<dyn MarkdownPort>) -> Self {
        Self {
            theme: Arc::new(theme),
            markdown,
        }
    }

    #[must_use]
    pub fn theme(&self) -> &DeckTheme {
        &self.theme
    }

    fn slide(&self, kind: SlideKind) -> Slide {
        Slide::new(kind, Arc::clone(&self.theme))
    }

    #[must_use]
    pub fn title(
        &self,
        title: impl Into<String>,
        subtitle: Option<String>,
        authors: Option<Vec<String>>,
    ) -> Slide {
        self.slide(SlideKind::Title(TitleSlide {
            title: title.into(),
            subtitle,
            authors,
        }))
    }

    #[must_use]
    pub fn outro(&self, text: impl Into<String>) -> Slide {
        self.slide(SlideKind::Outro(OutroSlide::new(text)))
    }

    #[must_use]
    pub fn paragraph(&self, text: impl Into<String>, title: Option<String>) -> Slide {
        self.slide(SlideKind::LongParagraph(LongParagraphSlide::new(text, title)))
    }

    #[must_use]
    pub fn markdown(&self, markdown: impl Into<String>, footer: Option<String>) -> Slide {
        self.slide(SlideKind::Markdown(MarkdownSlide::new(
            markdown,
            footer,
            Arc::clone(&self.markdown),
        )))
    }

    #[must_use]
    pub fn list(&self, items: Vec<String>) -> Slide {
        self.slide(SlideKind::List(ListSlide::new(items)))
    }

    #[must_use]
    pub fn image(&self, path: impl Into<String>, border_thickness: f32) -> Slide {
        self.slide(SlideKind::Image(ImageSlide::new(path, border_thickness)))
    }

    /// # Errors
    /// Returns [`SlideError::InvalidSplitMode`] for a mode other than `row` or `column`.
    pub fn split(
        &self,
        first: impl Into<Arc<Slide>>,
        second: impl Into<Arc<Slide>>,
        mode: &str,
        separator: bool,
    ) -> Result<Slide, SlideError> {
        let split = SplitSlide::new(first.into(), second.into(), mode, separator)?;
        Ok(self.slide(SlideKind::Split(split)))
    }

    #[must_use]
    pub fn autofill(&self, slides: Vec<Arc<Slide>>) -> Slide {
        self.slide(SlideKind::AutoFill(AutoFillSlide::new(slides)))
    }

    #[must_use]
    pub fn custom(&self, node: Node) -> Slide {
        self.slide(SlideKind::Custom(CustomSlide::new(node)))
    }
}

//! Deck description to presentation use case.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::dto::{DeckDto, SlideDto, SlideKindDto};
use crate::application::services::slide_factory::SlideFactory;
use crate::domain::deck::Presentation;
use crate::domain::errors::DeckError;
use crate::domain::ports::MarkdownPort;
use crate::domain::slides::Slide;
use crate::domain::theme::DeckTheme;

/// Builds a [`Presentation`] from a parsed deck description.
pub struct BuildPresentationUseCase {
    theme: DeckTheme,
    markdown: Arc<dyn MarkdownPort>,
}

impl BuildPresentationUseCase {
    /// Creates new use case with the configured theme.
    #[must_use]
    pub fn new(theme: DeckTheme, markdown: Arc<dyn MarkdownPort>) -> Self {
        Self { theme, markdown }
    }

    /// Builds every slide in order. The deck's own theme wins over the
    /// configured one.
    ///
    /// # Errors
    /// Returns [`DeckError::Slide`] when a slide fails validation and
    /// [`DeckError::EmptyPresentation`] when the deck has no slides.
    pub fn execute(&self, deck: DeckDto) -> Result<Presentation, DeckError> {
        let theme = deck.theme.unwrap_or_else(|| self.theme.clone());
        let factory = SlideFactory::new(theme, Arc::clone(&self.markdown));

        let mut presentation = Presentation::new();
        for dto in deck.slides {
            presentation.add_slide(build_slide(&factory, dto)?);
        }

        if presentation.is_empty() {
            return Err(DeckError::EmptyPresentation);
        }

        info!(slides = presentation.len(), "Presentation built");
        Ok(presentation)
    }
}

fn build_slide(factory: &SlideFactory, dto: SlideDto) -> Result<Slide, DeckError> {
    let slide = match dto.kind {
        SlideKindDto::Title {
            title,
            subtitle,
            authors,
        } => factory.title(title, subtitle, authors),
        SlideKindDto::Outro { text } => factory.outro(text),
        SlideKindDto::Paragraph { text, title } => factory.paragraph(text, title),
        SlideKindDto::Markdown { text, file, footer } => {
            let Some(text) = text else {
                debug!(file = ?file, "Markdown slide without a source");
                return Err(DeckError::MissingMarkdown {
                    file: file.map(|f| f.display().to_string()),
                });
            };
            factory.markdown(text, footer)
        }
        SlideKindDto::List { items } => factory.list(items),
        SlideKindDto::Image { path, border } => factory.image(path, border),
        SlideKindDto::Split {
            first,
            second,
            mode,
            separator,
        } => {
            let first = build_slide(factory, *first)?;
            let second = build_slide(factory, *second)?;
            factory.split(first, second, &mode, separator)?
        }
        SlideKindDto::Autofill { slides } => {
            let children = slides
                .into_iter()
                .map(|child| build_slide(factory, child).map(Arc::new))
                .collect::<Result<Vec<_>, _>>()?;
            factory.autofill(children)
        }
        SlideKindDto::Custom { node } => factory.custom(node),
    };

    Ok(match dto.background {
        Some(background) => slide.with_background(background),
        None => slide,
    })
}

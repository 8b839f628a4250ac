//! Presentation errors.

use thiserror::Error;

use super::SlideError;

/// Presentation error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Rendering or navigating a presentation without slides.
    #[error("presentation has no slides; add at least one before rendering")]
    EmptyPresentation,

    /// Markdown slide with neither inline text nor a loaded file.
    #[error("markdown slide needs `text` or a readable `file` (file: {file:?})")]
    MissingMarkdown {
        /// The unread `file` reference, if one was given.
        file: Option<String>,
    },

    #[error("invalid slide: {0}")]
    #[allow(missing_docs)]
    Slide(#[from] SlideError),
}

impl DeckError {
    /// Returns whether the error is a caller precondition violation.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::EmptyPresentation)
    }
}

//! Slide construction errors.

use thiserror::Error;

/// Slide construction error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlideError {
    /// Split layout mode outside the allowed values.
    #[error("split slide mode must be either 'row' or 'column', got '{mode}'")]
    InvalidSplitMode {
        /// The rejected mode.
        mode: String,
    },
}

impl SlideError {
    /// Creates invalid split mode error.
    #[must_use]
    pub fn invalid_split_mode(mode: impl Into<String>) -> Self {
        Self::InvalidSplitMode { mode: mode.into() }
    }
}

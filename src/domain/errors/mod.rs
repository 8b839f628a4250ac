//! Domain error types.

mod deck_error;
mod slide_error;

pub use deck_error::DeckError;
pub use slide_error::SlideError;

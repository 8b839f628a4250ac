//! Domain layer with the node model, slides and presentation state.

/// Presentation cursor and slide sequence.
pub mod deck;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Renderable node tree.
pub mod node;
/// Port definitions.
pub mod ports;
/// Slide variants.
pub mod slides;
/// Styling constants.
pub mod theme;

pub use deck::Presentation;
pub use errors::{DeckError, SlideError};
pub use node::{Node, NodeKind, StyleMap};
pub use ports::MarkdownPort;
pub use slides::{Slide, SlideKind};
pub use theme::DeckTheme;

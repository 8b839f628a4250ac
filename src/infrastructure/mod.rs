//! Infrastructure layer with file system adapters.

/// Application configuration.
pub mod config;
/// Deck file loading.
pub mod deck_file;
/// Image decoding for image slides.
#[cfg(feature = "image")]
pub mod image;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use deck_file::{DeckLoadError, LoadedDeck, load_deck};
#[cfg(feature = "image")]
pub use image::{ImageLoadError, ImageLoader};

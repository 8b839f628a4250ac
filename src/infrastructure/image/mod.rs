//! Image handling infrastructure.

pub mod loader;

pub use loader::{ImageLoadError, ImageLoader};

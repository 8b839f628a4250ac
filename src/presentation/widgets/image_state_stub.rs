//! Image slides without the image feature: every image draws its placeholder.

use std::path::PathBuf;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::node_view::ImageRenderer;

/// Stub ImageManager when image feature is disabled.
#[derive(Debug, Default)]
pub struct ImageManager;

impl ImageManager {
    #[must_use]
    pub fn new(_base_dir: impl Into<PathBuf>) -> Self {
        Self
    }

    #[must_use]
    pub fn halfblocks(_base_dir: impl Into<PathBuf>) -> Self {
        Self
    }
}

impl ImageRenderer for ImageManager {
    fn render_image(&mut self, _src: &str, _area: Rect, _buf: &mut Buffer) -> bool {
        false
    }
}

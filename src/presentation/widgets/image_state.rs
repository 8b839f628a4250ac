//! Terminal image protocols for image slides.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;
use ratatui_image::picker::{Picker, ProtocolType};
use ratatui_image::protocol::StatefulProtocol;
use ratatui_image::{Resize, StatefulImage};
use tracing::debug;

use super::node_view::ImageRenderer;
use crate::infrastructure::image::ImageLoader;

/// Picks the terminal graphics protocol and keeps one resize protocol per image.
pub struct ImageManager {
    picker: Picker,
    loader: ImageLoader,
    protocols: HashMap<String, StatefulProtocol>,
    failed: HashSet<String>,
}

impl ImageManager {
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let mut picker = Picker::from_query_stdio().unwrap_or_else(|_| Picker::halfblocks());

        let caps = picker.capabilities();
        let has_sixel = caps
            .iter()
            .any(|c| matches!(c, ratatui_image::picker::Capability::Sixel));
        let has_kitty = caps
            .iter()
            .any(|c| matches!(c, ratatui_image::picker::Capability::Kitty));

        if has_sixel && !has_kitty && picker.protocol_type() == ProtocolType::Halfblocks {
            picker.set_protocol_type(ProtocolType::Sixel);
        }

        Self::with_picker(picker, base_dir)
    }

    #[must_use]
    pub fn halfblocks(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_picker(Picker::halfblocks(), base_dir)
    }

    fn with_picker(picker: Picker, base_dir: impl Into<PathBuf>) -> Self {
        debug!(protocol = ?picker.protocol_type(), "Image protocol selected");
        Self {
            picker,
            loader: ImageLoader::new(base_dir),
            protocols: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    #[must_use]
    pub fn protocol_type(&self) -> ProtocolType {
        self.picker.protocol_type()
    }

    fn protocol_for(&mut self, src: &str) -> Option<&mut StatefulProtocol> {
        if self.failed.contains(src) {
            return None;
        }

        if !self.protocols.contains_key(src) {
            match self.loader.load(src) {
                Ok(image) => {
                    let protocol = self.picker.new_resize_protocol((*image).clone());
                    self.protocols.insert(src.to_string(), protocol);
                }
                Err(_) => {
                    self.failed.insert(src.to_string());
                    return None;
                }
            }
        }

        self.protocols.get_mut(src)
    }
}

impl ImageRenderer for ImageManager {
    fn render_image(&mut self, src: &str, area: Rect, buf: &mut Buffer) -> bool {
        let Some(protocol) = self.protocol_for(src) else {
            return false;
        };
        StatefulImage::default()
            .resize(Resize::Fit(None))
            .render(area, buf, protocol);
        true
    }
}

impl std::fmt::Debug for ImageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageManager")
            .field("protocol", &self.picker.protocol_type())
            .field("loaded", &self.protocols.len())
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_image_falls_back() {
        let dir = tempdir().unwrap();
        let mut manager = ImageManager::halfblocks(dir.path());
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);

        assert!(!manager.render_image("missing.png", area, &mut buf));
        assert!(manager.failed.contains("missing.png"));
        assert!(!manager.render_image("missing.png", area, &mut buf));
    }

    #[test]
    fn test_loaded_image_gets_a_protocol() {
        let dir = tempdir().unwrap();
        image::DynamicImage::new_rgb8(8, 8)
            .save(dir.path().join("square.png"))
            .unwrap();

        let mut manager = ImageManager::halfblocks(dir.path());
        assert_eq!(manager.protocol_type(), ProtocolType::Halfblocks);

        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        assert!(manager.render_image("square.png", area, &mut buf));
        assert_eq!(manager.protocols.len(), 1);
    }
}

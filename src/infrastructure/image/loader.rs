//! Local image loading for image slides.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

/// Image loading errors.
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decodes images referenced by slides, resolving relative paths against
/// the deck directory. Decoded images are kept for the process lifetime.
#[derive(Debug, Default)]
pub struct ImageLoader {
    base_dir: PathBuf,
    cache: HashMap<String, Arc<image::DynamicImage>>,
}

impl ImageLoader {
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            cache: HashMap::new(),
        }
    }

    /// Resolves `src` against the deck directory unless it is absolute.
    #[must_use]
    pub fn resolve(&self, src: &str) -> PathBuf {
        let path = Path::new(src);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Loads and caches the image at `src`.
    ///
    /// # Errors
    /// Returns [`ImageLoadError::Decode`] when the file is missing or not a
    /// supported image.
    pub fn load(&mut self, src: &str) -> Result<Arc<image::DynamicImage>, ImageLoadError> {
        if let Some(image) = self.cache.get(src) {
            return Ok(Arc::clone(image));
        }

        let path = self.resolve(src);
        debug!(path = %path.display(), "Decoding slide image");
        let image = image::open(&path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "Failed to decode slide image");
            ImageLoadError::Decode { path, source }
        })?;

        let image = Arc::new(image);
        self.cache.insert(src.to_string(), Arc::clone(&image));
        Ok(image)
    }
}

//! Deck file loading.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::application::dto::{DeckDto, SlideDto, SlideKindDto};

/// Deck file loading errors.
#[derive(Debug, Error)]
pub enum DeckLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse deck {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A parsed deck together with the directory its relative paths resolve against.
#[derive(Debug, Clone)]
pub struct LoadedDeck {
    /// Parsed description with markdown files inlined.
    pub deck: DeckDto,
    /// Directory of the deck file.
    pub base_dir: PathBuf,
}

/// Reads a TOML deck and inlines every markdown `file` reference.
///
/// # Errors
/// Returns [`DeckLoadError`] when the deck or a referenced markdown file
/// cannot be read, or when the deck is not valid TOML.
pub fn load_deck(path: &Path) -> Result<LoadedDeck, DeckLoadError> {
    let content = read(path)?;
    let mut deck: DeckDto = toml::from_str(&content).map_err(|source| DeckLoadError::Toml {
        path: path.to_path_buf(),
        source,
    })?;

    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    for slide in &mut deck.slides {
        inline_markdown(slide, &base_dir)?;
    }

    info!(path = %path.display(), slides = deck.slides.len(), "Deck loaded");
    Ok(LoadedDeck { deck, base_dir })
}

fn inline_markdown(slide: &mut SlideDto, base_dir: &Path) -> Result<(), DeckLoadError> {
    match &mut slide.kind {
        SlideKindDto::Markdown {
            text,
            file: Some(file),
            ..
        } if text.is_none() => {
            let resolved = base_dir.join(&*file);
            debug!(file = %resolved.display(), "Reading markdown slide");
            *text = Some(read(&resolved)?);
        }
        SlideKindDto::Split { first, second, .. } => {
            inline_markdown(first, base_dir)?;
            inline_markdown(second, base_dir)?;
        }
        SlideKindDto::Autofill { slides } => {
            for child in slides {
                inline_markdown(child, base_dir)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, DeckLoadError> {
    fs::read_to_string(path).map_err(|source| DeckLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

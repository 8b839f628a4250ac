//! Deck file data transfer objects.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::node::Node;
use crate::domain::theme::DeckTheme;

/// Whole deck description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckDto {
    /// Theme replacing the configured one for this deck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<DeckTheme>,

    /// Slides in display order.
    #[serde(default)]
    pub slides: Vec<SlideDto>,
}

/// One slide entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideDto {
    /// Variant fields.
    #[serde(flatten)]
    pub kind: SlideKindDto,

    /// Background description applied to the slide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl From<SlideKindDto> for SlideDto {
    fn from(kind: SlideKindDto) -> Self {
        Self {
            kind,
            background: None,
        }
    }
}

/// Slide variant fields, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum SlideKindDto {
    Title {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        authors: Option<Vec<String>>,
    },
    Outro {
        text: String,
    },
    Paragraph {
        text: String,
        #[serde(default)]
        title: Option<String>,
    },
    Markdown {
        #[serde(default)]
        text: Option<String>,
        /// Markdown file read relative to the deck file.
        #[serde(default)]
        file: Option<PathBuf>,
        #[serde(default)]
        footer: Option<String>,
    },
    List {
        items: Vec<String>,
    },
    Image {
        path: String,
        #[serde(default)]
        border: f32,
    },
    Split {
        first: Box<SlideDto>,
        second: Box<SlideDto>,
        #[serde(default = "default_split_mode")]
        mode: String,
        #[serde(default)]
        separator: bool,
    },
    Autofill {
        slides: Vec<SlideDto>,
    },
    Custom {
        node: Node,
    },
}

fn default_split_mode() -> String {
    "row".to_string()
}

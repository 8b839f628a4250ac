use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::Slide;
use crate::domain::errors::SlideError;
use crate::domain::node::Node;
use crate::domain::theme::DeckTheme;

/// Direction of a split slide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitMode {
    /// Children side by side.
    #[default]
    Row,
    /// Children stacked.
    Column,
}

impl SplitMode {
    /// CSS flex direction name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}

impl FromStr for SplitMode {
    type Err = SlideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(Self::Row),
            "column" => Ok(Self::Column),
            other => Err(SlideError::invalid_split_mode(other)),
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two slides laid out in a row or a column.
#[derive(Debug, Clone)]
pub struct SplitSlide {
    first: Arc<Slide>,
    second: Arc<Slide>,
    mode: SplitMode,
    separator: bool,
}

impl SplitSlide {
    /// Creates a split slide, validating `mode`.
    ///
    /// # Errors
    /// Returns [`SlideError::InvalidSplitMode`] unless `mode` is `row` or `column`.
    pub fn new(
        first: Arc<Slide>,
        second: Arc<Slide>,
        mode: &str,
        separator: bool,
    ) -> Result<Self, SlideError> {
        let mode = mode.parse()?;
        Ok(Self::with_mode(first, second, mode, separator))
    }

    /// Creates a split slide from an already validated mode.
    #[must_use]
    pub fn with_mode(first: Arc<Slide>, second: Arc<Slide>, mode: SplitMode, separator: bool) -> Self {
        Self {
            first,
            second,
            mode,
            separator,
        }
    }

    /// Layout direction.
    #[must_use]
    pub const fn mode(&self) -> SplitMode {
        self.mode
    }

    /// Whether a separator is drawn in column mode.
    #[must_use]
    pub const fn has_separator(&self) -> bool {
        self.separator
    }

    pub(super) fn content(&self) -> Node {
        let mut first = self.first.content();
        let mut second = self.second.content();

        let mut filler = Node::hidden();
        let (width, height) = match self.mode {
            SplitMode::Column => {
                if self.separator {
                    filler = Node::rule().with_style("width", "100%");
                }
                ("100%", "auto")
            }
            SplitMode::Row => {
                first.style.set("width", "100%");
                second.style.set("width", "100%");
                ("auto", "100%")
            }
        };

        Node::container(vec![first, filler, second])
            .with_class(format!(
                "d-flex flex-{} justify-content-start gap-2",
                self.mode
            ))
            .with_style("width", width)
            .with_style("height", height)
    }
}

/// Slides tiled in a wrapping grid.
///
/// Tiles are sized once, at construction, from fresh copies of the children's
/// content; the shared child slides are never touched.
#[derive(Debug, Clone)]
pub struct AutoFillSlide {
    slides: Vec<Arc<Slide>>,
    tiles: Vec<Node>,
}

impl AutoFillSlide {
    /// Creates the grid and sizes every tile.
    #[must_use]
    pub fn new(slides: Vec<Arc<Slide>>) -> Self {
        let basis = flex_basis(slides.len());
        let tiles = slides
            .iter()
            .map(|slide| {
                let mut tile = slide.content();
                tile.style.set("flex", format!("1 1 {basis}%"));
                tile
            })
            .collect();
        Self { slides, tiles }
    }

    /// Child slides in order.
    #[must_use]
    pub fn slides(&self) -> &[Arc<Slide>] {
        &self.slides
    }

    /// Sized tiles in order.
    #[must_use]
    pub fn tiles(&self) -> &[Node] {
        &self.tiles
    }

    pub(super) fn content(&self, theme: &DeckTheme) -> Node {
        Node::container(self.tiles.clone())
            .with_class(format!("d-flex flex-wrap gap-2 {}", theme.center))
    }
}

/// Flex basis percentage packing `count` tiles two rows deep.
#[allow(clippy::cast_precision_loss)]
fn flex_basis(count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    200.0 / count as f64 - 5.0
}

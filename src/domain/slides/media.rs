use crate::domain::node::Node;
use crate::domain::theme::DeckTheme;

/// Single image scaled to fit.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSlide {
    /// Opaque image path, passed through unvalidated.
    pub path: String,
    /// Border thickness in rem; zero draws no border.
    pub border_thickness: f32,
}

impl ImageSlide {
    /// Creates an image slide.
    #[must_use]
    pub fn new(path: impl Into<String>, border_thickness: f32) -> Self {
        Self {
            path: path.into(),
            border_thickness,
        }
    }

    pub(super) fn content(&self, theme: &DeckTheme) -> Node {
        let image = Node::image(&self.path)
            .with_style("width", "100%")
            .with_style("height", "100%")
            .with_style("border", format!("solid black {}rem", self.border_thickness))
            .with_style("object-fit", "contain");

        Node::container(vec![image])
            .with_class(format!("p-2 d-flex {}", theme.center))
            .with_style("width", "100%")
            .with_style("height", "100%")
            .with_style("overflow", "hidden")
    }
}

/// Externally supplied node embedded as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomSlide {
    /// Node returned unchanged as the slide content.
    pub node: Node,
}

impl CustomSlide {
    /// Creates a custom slide.
    #[must_use]
    pub fn new(node: Node) -> Self {
        Self { node }
    }

    pub(super) fn content(&self) -> Node {
        self.node.clone()
    }
}

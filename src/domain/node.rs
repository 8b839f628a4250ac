//! Renderable node tree.
//!
//! A [`Node`] is the DOM-like element every slide produces: a typed kind,
//! optional id, class list, CSS-like style map and children. The terminal
//! drawer in `presentation::widgets` is the only consumer that turns these
//! into cells; everything else treats the tree as data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mutable CSS-like property map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    /// Creates an empty style map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing any previous value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    /// Returns a property value.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Removes a property.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.0.remove(property)
    }

    /// Returns whether no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Element kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Block container laid out according to its classes.
    #[default]
    Container,
    /// Text block.
    Text {
        /// Text content, may contain newlines.
        text: String,
    },
    /// One line of styled runs; children are `Text` nodes.
    Inline,
    /// List whose children are the items.
    List {
        /// Prefix items with 1-based numbers.
        #[serde(default)]
        numbered: bool,
    },
    /// Image referenced by an opaque path.
    Image {
        /// Source path or URL.
        src: String,
    },
    /// Horizontal separator.
    Rule,
}

/// Renderable tree node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Element kind.
    #[serde(flatten)]
    pub kind: NodeKind,
    /// External identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Space separated class fragments.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub class_name: String,
    /// Style properties.
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
    /// Child nodes in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a container holding `children`.
    #[must_use]
    pub fn container(children: Vec<Node>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    /// Creates a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::of_kind(NodeKind::Text { text: text.into() })
    }

    /// Creates an inline run from styled text children.
    #[must_use]
    pub fn inline(spans: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Inline,
            children: spans,
            ..Self::default()
        }
    }

    /// Creates a list node.
    #[must_use]
    pub fn list(items: Vec<Node>, numbered: bool) -> Self {
        Self {
            kind: NodeKind::List { numbered },
            children: items,
            ..Self::default()
        }
    }

    /// Creates an image node.
    #[must_use]
    pub fn image(src: impl Into<String>) -> Self {
        Self::of_kind(NodeKind::Image { src: src.into() })
    }

    /// Creates a horizontal rule.
    #[must_use]
    pub fn rule() -> Self {
        Self::of_kind(NodeKind::Rule)
    }

    /// Creates an empty container with `display: none`.
    ///
    /// Used for absent optional fields so the slot still exists in the layout.
    #[must_use]
    pub fn hidden() -> Self {
        Self::default().with_style("display", "none")
    }

    fn of_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Sets the class list.
    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Sets one style property.
    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns whether the class list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class)
    }

    /// Returns whether the node is suppressed with `display: none`.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.style.get("display") == Some("none")
    }

    /// Returns the text of a `Text` node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Concatenates the text of this node and all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = self.as_text() {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Finds the first descendant (or self) whose id equals `id`.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }
}

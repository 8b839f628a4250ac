use std::borrow::Cow;

/// Key name moving to the previous slide.
pub const KEY_PREVIOUS: &str = "ArrowLeft";
/// Key name moving to the next slide.
pub const KEY_NEXT: &str = "ArrowRight";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,

    // Navigation
    PreviousSlide,
    NextSlide,
    FirstSlide,
    LastSlide,

    // Scrolling inside the active slide
    ScrollUp,
    ScrollDown,
}

impl Action {
    /// Resolves a DOM-style key name; unknown names map to `None`.
    #[must_use]
    pub fn from_key_name(key_name: &str) -> Option<Self> {
        match key_name {
            KEY_PREVIOUS => Some(Self::PreviousSlide),
            KEY_NEXT => Some(Self::NextSlide),
            "Home" => Some(Self::FirstSlide),
            "End" => Some(Self::LastSlide),
            "ArrowUp" | "PageUp" => Some(Self::ScrollUp),
            "ArrowDown" | "PageDown" => Some(Self::ScrollDown),
            "q" | "Escape" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Key binding shown in the help line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: &'static str,
    pub action: Action,
    pub label: Cow<'static, str>,
}

impl Keybind {
    pub fn new(key: &'static str, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
        }
    }
}

/// Bindings in help-line order.
#[must_use]
pub fn default_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new("←", Action::PreviousSlide, "prev"),
        Keybind::new("→", Action::NextSlide, "next"),
        Keybind::new("↑↓", Action::ScrollDown, "scroll"),
        Keybind::new("q", Action::Quit, "quit"),
    ]
}

//! Deck styling constants.

use serde::{Deserialize, Serialize};

/// Styling constants threaded into slide constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckTheme {
    /// Main title font size.
    #[serde(default = "default_title_size")]
    pub title_size: String,

    /// Main title font weight.
    #[serde(default = "default_title_weight")]
    pub title_weight: String,

    /// Subtitle font size.
    #[serde(default = "default_subtitle_size")]
    pub subtitle_size: String,

    /// Padding around the deck, as a percentage of the screen.
    #[serde(default = "default_screen_padding")]
    pub screen_padding: u16,

    /// Class fragment that centers content on both axes.
    #[serde(default = "default_center")]
    pub center: String,

    /// Class fragment that draws a border.
    #[serde(default = "default_border")]
    pub border: String,
}

fn default_title_size() -> String {
    "4rem".to_string()
}

fn default_title_weight() -> String {
    "700".to_string()
}

fn default_subtitle_size() -> String {
    "2rem".to_string()
}

const fn default_screen_padding() -> u16 {
    2
}

fn default_center() -> String {
    "justify-content-center align-items-center".to_string()
}

fn default_border() -> String {
    "border".to_string()
}

impl Default for DeckTheme {
    fn default() -> Self {
        Self {
            title_size: default_title_size(),
            title_weight: default_title_weight(),
            subtitle_size: default_subtitle_size(),
            screen_padding: default_screen_padding(),
            center: default_center(),
            border: default_border(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_theme_fills_defaults() {
        let theme: DeckTheme = toml::from_str(r#"title_size = "6rem""#).expect("parse");
        assert_eq!(theme.title_size, "6rem");
        assert_eq!(theme.subtitle_size, DeckTheme::default().subtitle_size);
        assert_eq!(theme.screen_padding, 2);
    }
}

use super::adapter::ColorConverter;
use crate::infrastructure::config::DEFAULT_ACCENT;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Terminal styles derived from the accent colour.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub border_style: Style,
    pub badge_style: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(DEFAULT_ACCENT)
    }
}

impl Theme {
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let accent_hsl = ColorConverter::to_hsl(accent);

        let mut badge_bg_hsl = accent_hsl;
        badge_bg_hsl.l = 0.2;
        badge_bg_hsl.s = 0.3;
        let badge_bg = ColorConverter::to_ratatui(badge_bg_hsl);

        let badge_style = Style::default()
            .bg(badge_bg)
            .fg(accent)
            .add_modifier(Modifier::BOLD);

        Self {
            accent,
            border_style: Style::default().fg(accent),
            badge_style,
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
        }
    }
}

/// Parses a colour name or hex code, falling back to yellow.
#[must_use]
pub fn parse_color(s: &str) -> Color {
    try_parse_color(s).unwrap_or(Color::Yellow)
}

/// Parses ratatui colour names, `#rgb`/`#rrggbb` and `rgb()`/`rgba()` forms.
#[must_use]
pub fn try_parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Some(Color::Rgb(r, g, b));
    }

    if let Some((r, g, b)) = parse_rgb_function(s) {
        return Some(Color::Rgb(r, g, b));
    }

    if let Ok(c) = Color::from_str(s) {
        return Some(c);
    }

    match s.to_lowercase().as_str() {
        "orange" => Some(Color::Indexed(208)),
        _ => None,
    }
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&format!("{}{}", &s[0..1], &s[0..1]), 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&format!("{}{}", &s[1..2], &s[1..2]), 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&format!("{}{}", &s[2..3], &s[2..3]), 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else {
        Err(())
    }
}

/// `rgb(r, g, b)` or `rgba(r, g, b, a)`; alpha is ignored.
fn parse_rgb_function(s: &str) -> Option<(u8, u8, u8)> {
    let inner = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let mut channels = inner.split(',').map(|c| c.trim().parse::<u8>());
    let r = channels.next()?.ok()?;
    let g = channels.next()?.ok()?;
    let b = channels.next()?.ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Orange"), Color::Indexed(208));
        assert_eq!(parse_color("Invalid"), Color::Yellow);
    }

    #[test]
    fn test_parse_css_functions() {
        assert_eq!(
            try_parse_color("rgba(255,160,0,1)"),
            Some(Color::Rgb(255, 160, 0))
        );
        assert_eq!(
            try_parse_color("rgb( 1, 2, 3 )"),
            Some(Color::Rgb(1, 2, 3))
        );
        assert_eq!(try_parse_color("rgb(300, 0, 0)"), None);
        assert_eq!(try_parse_color("linear-gradient(red, blue)"), None);
    }

    #[test]
    fn test_badge_style_uses_accent() {
        let theme = Theme::new("#ffa000");
        assert_eq!(theme.accent, Color::Rgb(255, 160, 0));
        assert_eq!(theme.badge_style.fg, Some(Color::Rgb(255, 160, 0)));
        assert!(theme.badge_style.bg.is_some());
    }

    #[test]
    fn test_default_theme_uses_deck_orange() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Rgb(0xff, 0x79, 0x00));
        assert_eq!(theme.border_style.fg, Some(Color::Rgb(0xff, 0x79, 0x00)));
    }
}

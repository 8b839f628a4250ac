//! CSS background strings to terminal colours.

use std::sync::OnceLock;

use ratatui::style::Color;
use regex::Regex;

use super::adapter::ColorConverter;
use super::service::try_parse_color;

/// Axis a gradient runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientAxis {
    /// First stop at the bottom row.
    BottomToTop,
    /// First stop at the top row.
    TopToBottom,
    /// First stop at the left column.
    LeftToRight,
    /// First stop at the right column.
    RightToLeft,
}

/// A paintable background.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Solid(Color),
    Gradient {
        axis: GradientAxis,
        /// Colour stops with positions in `0.0..=1.0`, ascending.
        stops: Vec<((u8, u8, u8), f32)>,
    },
}

impl Background {
    /// Parses a solid colour or a `linear-gradient(...)`.
    #[must_use]
    pub fn parse(css: &str) -> Option<Self> {
        let css = css.trim();
        if let Some(inner) = css
            .strip_prefix("linear-gradient(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_gradient(inner);
        }
        try_parse_color(css).map(Self::Solid)
    }

    /// Colour at cell `(x, y)` of a `width` x `height` area.
    #[must_use]
    pub fn color_at(&self, x: u16, y: u16, width: u16, height: u16) -> Color {
        match self {
            Self::Solid(color) => *color,
            Self::Gradient { axis, stops } => {
                let position = match axis {
                    GradientAxis::TopToBottom => fraction(y, height),
                    GradientAxis::BottomToTop => 1.0 - fraction(y, height),
                    GradientAxis::LeftToRight => fraction(x, width),
                    GradientAxis::RightToLeft => 1.0 - fraction(x, width),
                };
                let (r, g, b) = interpolate(stops, position);
                Color::Rgb(r, g, b)
            }
        }
    }
}

fn parse_gradient(inner: &str) -> Option<Background> {
    let mut parts = split_top_level(inner).into_iter().peekable();

    let axis = match parts.peek().and_then(|first| parse_axis(first)) {
        Some(axis) => {
            parts.next();
            axis
        }
        None => GradientAxis::TopToBottom,
    };

    let raw: Vec<((u8, u8, u8), Option<f32>)> = parts.filter_map(|p| parse_stop(&p)).collect();
    if raw.is_empty() {
        return None;
    }

    let last = raw.len().saturating_sub(1).max(1);
    #[allow(clippy::cast_precision_loss)]
    let stops = raw
        .into_iter()
        .enumerate()
        .map(|(i, (rgb, pos))| (rgb, pos.unwrap_or(i as f32 / last as f32)))
        .collect();

    Some(Background::Gradient { axis, stops })
}

fn parse_axis(part: &str) -> Option<GradientAxis> {
    static ANGLE: OnceLock<Regex> = OnceLock::new();
    let angle = ANGLE.get_or_init(|| Regex::new(r"^(-?\d+(?:\.\d+)?)deg$").expect("Invalid regex"));

    match part {
        "to top" => return Some(GradientAxis::BottomToTop),
        "to bottom" => return Some(GradientAxis::TopToBottom),
        "to right" => return Some(GradientAxis::LeftToRight),
        "to left" => return Some(GradientAxis::RightToLeft),
        _ => {}
    }

    let degrees: f32 = angle.captures(part)?.get(1)?.as_str().parse().ok()?;
    let degrees = degrees.rem_euclid(360.0);
    Some(if !(45.0..315.0).contains(&degrees) {
        GradientAxis::BottomToTop
    } else if degrees < 135.0 {
        GradientAxis::LeftToRight
    } else if degrees < 225.0 {
        GradientAxis::TopToBottom
    } else {
        GradientAxis::RightToLeft
    })
}

fn parse_stop(part: &str) -> Option<((u8, u8, u8), Option<f32>)> {
    static STOP: OnceLock<Regex> = OnceLock::new();
    let stop =
        STOP.get_or_init(|| Regex::new(r"^(.*?)\s+(-?\d+(?:\.\d+)?)%$").expect("Invalid regex"));

    let (color, position) = match stop.captures(part) {
        Some(caps) => (
            caps.get(1)?.as_str(),
            caps.get(2)?.as_str().parse::<f32>().ok().map(|p| p / 100.0),
        ),
        None => (part, None),
    };

    let rgb = ColorConverter::to_rgb(try_parse_color(color)?);
    Some((rgb, position))
}

/// Splits on commas outside parentheses.
fn split_top_level(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(current.trim().to_string());
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    if !current.trim().is_empty() {
        parts.push(current.trim().to_string());
    }
    parts
}

fn fraction(offset: u16, extent: u16) -> f32 {
    if extent <= 1 {
        return 0.0;
    }
    f32::from(offset) / f32::from(extent - 1)
}

fn interpolate(stops: &[((u8, u8, u8), f32)], position: f32) -> (u8, u8, u8) {
    let Some(&(first, first_pos)) = stops.first() else {
        return (0, 0, 0);
    };
    if position <= first_pos {
        return first;
    }

    for pair in stops.windows(2) {
        let (from, from_pos) = pair[0];
        let (to, to_pos) = pair[1];
        if position <= to_pos {
            let span = (to_pos - from_pos).max(f32::EPSILON);
            let t = (position - from_pos) / span;
            return (mix(from.0, to.0, t), mix(from.1, to.1, t), mix(from.2, to.2, t));
        }
    }

    stops.last().map_or(first, |&(rgb, _)| rgb)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mix(from: u8, to: u8, t: f32) -> u8 {
    let value = f32::from(from) + (f32::from(to) - f32::from(from)) * t.clamp(0.0, 1.0);
    value.round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slides::OUTRO_BACKGROUND;

    #[test]
    fn test_outro_gradient_runs_white_to_orange_upwards() {
        let background = Background::parse(OUTRO_BACKGROUND).expect("gradient");
        let Background::Gradient { axis, stops } = &background else {
            panic!("expected gradient");
        };
        assert_eq!(*axis, GradientAxis::BottomToTop);
        assert_eq!(stops.len(), 2);

        assert_eq!(background.color_at(0, 9, 10, 10), Color::Rgb(255, 255, 255));
        assert_eq!(background.color_at(0, 0, 10, 10), Color::Rgb(255, 160, 0));
    }

    #[test]
    fn test_solid_backgrounds() {
        assert_eq!(
            Background::parse("#112233"),
            Some(Background::Solid(Color::Rgb(0x11, 0x22, 0x33)))
        );
        assert_eq!(
            Background::parse("rgb(1,2,3)"),
            Some(Background::Solid(Color::Rgb(1, 2, 3)))
        );
        assert_eq!(Background::parse("url(cat.png)"), None);
    }

    #[test]
    fn test_named_stops_resolve_through_palette() {
        let background = Background::parse("linear-gradient(to bottom, orange, black)").unwrap();
        assert_eq!(background.color_at(0, 0, 1, 2), Color::Rgb(255, 135, 0));
        assert_eq!(background.color_at(0, 1, 1, 2), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_stops_without_positions_are_spread_evenly() {
        let background = Background::parse("linear-gradient(to right, #000000, #ffffff)").unwrap();
        assert_eq!(background.color_at(0, 0, 3, 1), Color::Rgb(0, 0, 0));
        assert_eq!(background.color_at(1, 0, 3, 1), Color::Rgb(128, 128, 128));
        assert_eq!(background.color_at(2, 0, 3, 1), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_angle_axes() {
        assert_eq!(parse_axis("90deg"), Some(GradientAxis::LeftToRight));
        assert_eq!(parse_axis("180deg"), Some(GradientAxis::TopToBottom));
        assert_eq!(parse_axis("270deg"), Some(GradientAxis::RightToLeft));
        assert_eq!(parse_axis("-360deg"), Some(GradientAxis::BottomToTop));
        assert_eq!(parse_axis("red"), None);
    }
}

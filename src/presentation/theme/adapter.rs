use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// Conversions between terminal colours and RGB/HSL values.
pub struct ColorConverter;

impl ColorConverter {
    /// RGB triple for any terminal colour, using the VGA palette for named ones.
    #[must_use]
    pub fn to_rgb(color: Color) -> (u8, u8, u8) {
        match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Indexed(i) => indexed_rgb(i),
            Color::Black => indexed_rgb(0),
            Color::Red => indexed_rgb(1),
            Color::Green => indexed_rgb(2),
            Color::Yellow => indexed_rgb(3),
            Color::Blue => indexed_rgb(4),
            Color::Magenta => indexed_rgb(5),
            Color::Cyan => indexed_rgb(6),
            Color::Gray => indexed_rgb(7),
            Color::DarkGray => indexed_rgb(8),
            Color::LightRed => indexed_rgb(9),
            Color::LightGreen => indexed_rgb(10),
            Color::LightYellow => indexed_rgb(11),
            Color::LightBlue => indexed_rgb(12),
            Color::LightMagenta => indexed_rgb(13),
            Color::LightCyan => indexed_rgb(14),
            Color::White | Color::Reset => indexed_rgb(15),
        }
    }

    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        let (r, g, b) = Self::to_rgb(color);
        Rgb::new(r, g, b).to_hsl()
    }

    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

fn indexed_rgb(i: u8) -> (u8, u8, u8) {
    const BASE: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (170, 0, 0),
        (0, 170, 0),
        (170, 85, 0),
        (0, 0, 170),
        (170, 0, 170),
        (0, 170, 170),
        (170, 170, 170),
        (85, 85, 85),
        (255, 85, 85),
        (85, 255, 85),
        (255, 255, 85),
        (85, 85, 255),
        (255, 85, 255),
        (85, 255, 255),
        (255, 255, 255),
    ];

    match i {
        0..=15 => BASE[usize::from(i)],
        16..=231 => {
            let cube = i - 16;
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (level(cube / 36), level((cube / 6) % 6), level(cube % 6))
        }
        _ => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Color::Rgb(1, 2, 3), (1, 2, 3) ; "rgb passes through")]
    #[test_case(Color::Red, (170, 0, 0) ; "named red")]
    #[test_case(Color::White, (255, 255, 255) ; "named white")]
    #[test_case(Color::Indexed(208), (255, 135, 0) ; "orange from the cube")]
    #[test_case(Color::Indexed(16), (0, 0, 0) ; "cube origin")]
    #[test_case(Color::Indexed(231), (255, 255, 255) ; "cube corner")]
    #[test_case(Color::Indexed(232), (8, 8, 8) ; "darkest grey ramp")]
    #[test_case(Color::Indexed(255), (238, 238, 238) ; "lightest grey ramp")]
    fn test_to_rgb(color: Color, expected: (u8, u8, u8)) {
        assert_eq!(ColorConverter::to_rgb(color), expected);
    }

    #[test]
    fn test_hsl_keeps_rgb_within_rounding() {
        let back = ColorConverter::to_ratatui(ColorConverter::to_hsl(Color::Rgb(100, 150, 200)));

        let Color::Rgb(r, g, b) = back else {
            panic!("Expected RGB color");
        };
        assert!((i16::from(r) - 100).abs() <= 1);
        assert!((i16::from(g) - 150).abs() <= 1);
        assert!((i16::from(b) - 200).abs() <= 1);
    }
}

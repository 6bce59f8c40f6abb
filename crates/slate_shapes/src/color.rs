//! RGBA color with CSS string parsing
//!
//! The drawing service styles shapes with CSS color strings (the model is
//! prompted to emit `#rrggbb`, but anything a browser canvas accepts can
//! show up). We parse the common forms and let callers fall back to a
//! default for the rest.

/// RGBA color, components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parse a CSS color string.
    ///
    /// Supported forms: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
    /// `rgb(r, g, b)`, `rgba(r, g, b, a)`, and common named colors.
    /// Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            return Self::parse_functional(args.strip_suffix(')')?);
        }
        named_color(&lower)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        let digit = |c: u8| (c as char).to_digit(16).map(|d| d as u8);
        let bytes = hex.as_bytes();
        match bytes.len() {
            // #rgb / #rgba: each digit doubles
            3 | 4 => {
                let mut parts = [0u8; 4];
                parts[3] = 255;
                for (i, &b) in bytes.iter().enumerate() {
                    let d = digit(b)?;
                    parts[i] = d << 4 | d;
                }
                Some(Self::from_rgb8(parts[0], parts[1], parts[2]).with_alpha8(parts[3]))
            }
            6 | 8 => {
                let mut parts = [0u8; 4];
                parts[3] = 255;
                for (i, pair) in bytes.chunks_exact(2).enumerate() {
                    parts[i] = digit(pair[0])? << 4 | digit(pair[1])?;
                }
                Some(Self::from_rgb8(parts[0], parts[1], parts[2]).with_alpha8(parts[3]))
            }
            _ => None,
        }
    }

    fn parse_functional(args: &str) -> Option<Self> {
        let mut it = args.split(',').map(str::trim);
        let r = it.next()?.parse::<f32>().ok()?;
        let g = it.next()?.parse::<f32>().ok()?;
        let b = it.next()?.parse::<f32>().ok()?;
        let a = match it.next() {
            Some(a) => a.parse::<f32>().ok()?,
            None => 1.0,
        };
        if it.next().is_some() {
            return None;
        }
        Some(Self::rgba(
            (r / 255.0).clamp(0.0, 1.0),
            (g / 255.0).clamp(0.0, 1.0),
            (b / 255.0).clamp(0.0, 1.0),
            a.clamp(0.0, 1.0),
        ))
    }

    fn with_alpha8(mut self, a: u8) -> Self {
        self.a = a as f32 / 255.0;
        self
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn named_color(name: &str) -> Option<Color> {
    let (r, g, b) = match name {
        "black" => (0x00, 0x00, 0x00),
        "white" => (0xff, 0xff, 0xff),
        "red" => (0xff, 0x00, 0x00),
        "green" => (0x00, 0x80, 0x00),
        "blue" => (0x00, 0x00, 0xff),
        "yellow" => (0xff, 0xff, 0x00),
        "orange" => (0xff, 0xa5, 0x00),
        "purple" => (0x80, 0x00, 0x80),
        "pink" => (0xff, 0xc0, 0xcb),
        "brown" => (0xa5, 0x2a, 0x2a),
        "gray" | "grey" => (0x80, 0x80, 0x80),
        "silver" => (0xc0, 0xc0, 0xc0),
        "cyan" | "aqua" => (0x00, 0xff, 0xff),
        "magenta" | "fuchsia" => (0xff, 0x00, 0xff),
        "lime" => (0x00, 0xff, 0x00),
        "navy" => (0x00, 0x00, 0x80),
        "teal" => (0x00, 0x80, 0x80),
        "maroon" => (0x80, 0x00, 0x00),
        "olive" => (0x80, 0x80, 0x00),
        _ => return None,
    };
    Some(Color::from_rgb8(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Color::parse("#ff0000"), Some(Color::rgb(1.0, 0.0, 0.0)));
        assert_eq!(Color::parse("#000000"), Some(Color::BLACK));
        assert_eq!(Color::parse("#FFFFFF"), Some(Color::WHITE));
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!(Color::parse("#f00"), Some(Color::rgb(1.0, 0.0, 0.0)));
        let c = Color::parse("#f008").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.a - 0x88 as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parses_eight_digit_hex() {
        let c = Color::parse("#ff000080").unwrap();
        assert_eq!((c.r, c.g, c.b), (1.0, 0.0, 0.0));
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parses_functional_forms() {
        assert_eq!(
            Color::parse("rgb(255, 0, 0)"),
            Some(Color::rgb(1.0, 0.0, 0.0))
        );
        assert_eq!(
            Color::parse("rgba(0, 0, 255, 0.5)"),
            Some(Color::rgba(0.0, 0.0, 1.0, 0.5))
        );
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(Color::parse("red"), Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(Color::parse("RED"), Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(Color::parse("grey"), Color::parse("gray"));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Color::parse(""), None);
        assert_eq!(Color::parse("#gg0000"), None);
        assert_eq!(Color::parse("#ff000"), None);
        assert_eq!(Color::parse("notacolor"), None);
        assert_eq!(Color::parse("rgb(1,2)"), None);
    }

    #[test]
    fn four_digit_hex_is_rgba() {
        // #ff00 is fully transparent yellow, not garbage.
        assert_eq!(Color::parse("#ff00"), Some(Color::rgba(1.0, 1.0, 0.0, 0.0)));
    }
}

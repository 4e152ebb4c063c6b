//! Color representation

use std::fmt;

/// Color used by fonts, fills and border edges
///
/// Mirrors the ways a stylesheet can reference a color: an explicit ARGB
/// value, a theme slot, a legacy palette index, or "automatic".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Automatic/system color
    #[default]
    Auto,

    /// RGB color (emitted fully opaque)
    Rgb { r: u8, g: u8, b: u8 },

    /// ARGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },

    /// Theme color with optional tint
    ///
    /// Theme indices:
    /// 0 = Background 1 (light)
    /// 1 = Text 1 (dark)
    /// 2 = Background 2
    /// 3 = Text 2
    /// 4-9 = Accent 1-6
    Theme {
        /// Theme color index
        index: u8,
        /// Tint in thousandths (-1000 = -1.0 darkest, 1000 = 1.0 lightest)
        ///
        /// Finer tints are rounded when read, so a stylesheet tint such as
        /// `-0.249977111117893` is written back as `-0.25`.
        tint: i16,
    },

    /// Indexed color (legacy palette)
    Indexed(u8),
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Create a theme color without tint
    pub const fn theme(index: u8) -> Self {
        Color::Theme { index, tint: 0 }
    }

    /// Create a tinted theme color, `tint` given in thousandths
    pub const fn theme_tinted(index: u8, tint: i16) -> Self {
        Color::Theme { index, tint }
    }

    /// Parse a hex string (`"#FF0000"`, `"FF0000"` or 8-digit ARGB `"80FF0000"`)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

        match hex.len() {
            6 => Some(Color::Rgb {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
            }),
            8 => {
                let a = byte(0)?;
                let (r, g, b) = (byte(2)?, byte(4)?, byte(6)?);
                // Fully opaque ARGB is the same color as plain RGB
                if a == 0xFF {
                    Some(Color::Rgb { r, g, b })
                } else {
                    Some(Color::Argb { a, r, g, b })
                }
            }
            _ => None,
        }
    }

    /// ARGB hex string as used by the `rgb` attribute, e.g. `"FFFF0000"`.
    ///
    /// Returns `None` for colors that are not expressed as an RGB value.
    pub fn to_argb_hex(&self) -> Option<String> {
        match self {
            Color::Rgb { r, g, b } => Some(format!("FF{:02X}{:02X}{:02X}", r, g, b)),
            Color::Argb { a, r, g, b } => Some(format!("{:02X}{:02X}{:02X}{:02X}", a, r, g, b)),
            Color::Auto | Color::Theme { .. } | Color::Indexed(_) => None,
        }
    }

    /// Tint as the floating point value written to `tint` attributes
    pub fn tint(&self) -> Option<f64> {
        match self {
            Color::Theme { tint, .. } if *tint != 0 => Some(*tint as f64 / 1000.0),
            _ => None,
        }
    }

    /// Check if color is automatic/default
    pub fn is_auto(&self) -> bool {
        matches!(self, Color::Auto)
    }

    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const RED: Color = Color::Rgb { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color::Rgb { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color::Rgb { r: 0, g: 0, b: 255 };
    pub const YELLOW: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 0,
    };
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb { a, r, g, b } => write!(f, "#{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
            Color::Theme { index, tint } => write!(f, "theme({}, {})", index, *tint as f64 / 1000.0),
            Color::Indexed(i) => write!(f, "indexed({})", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("00FF00"), Some(Color::GREEN));
        assert_eq!(Color::from_hex("FF0000FF"), Some(Color::BLUE));
        assert_eq!(
            Color::from_hex("#80FFFFFF"),
            Some(Color::argb(128, 255, 255, 255))
        );
        assert_eq!(Color::from_hex("FFF"), None);
        assert_eq!(Color::from_hex("GG0000"), None);
    }

    #[test]
    fn test_to_argb_hex() {
        assert_eq!(Color::RED.to_argb_hex().as_deref(), Some("FFFF0000"));
        assert_eq!(
            Color::argb(0x80, 1, 2, 3).to_argb_hex().as_deref(),
            Some("80010203")
        );
        assert_eq!(Color::theme(1).to_argb_hex(), None);
        assert_eq!(Color::Auto.to_argb_hex(), None);
    }

    #[test]
    fn test_tint() {
        assert_eq!(Color::theme(4).tint(), None);
        assert_eq!(Color::theme_tinted(4, -250).tint(), Some(-0.25));
        assert_eq!(Color::theme_tinted(4, 400).to_string(), "theme(4, 0.4)");
    }
}

//! Font style types

use super::Color;

/// Font settings of a cell style
///
/// Equality and hashing cover every attribute except [`Font::index`], which
/// is identity assigned by the registry.
#[derive(Debug, Clone)]
pub struct Font {
    /// Font family name (e.g., "Calibri", "Arial")
    pub name: String,
    /// Font size in points
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub strikeout: bool,
    pub outline: bool,
    pub shadow: bool,
    pub underline: Underline,
    /// Superscript/subscript
    pub script: FontScript,
    pub color: Color,
    /// Font family class (2 = swiss)
    pub family: Option<u8>,
    pub charset: Option<u8>,
    pub scheme: FontScheme,
    /// Position in the registry font table, `None` until registered
    pub index: Option<u32>,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            name: "Calibri".to_string(),
            size: 11.0,
            bold: false,
            italic: false,
            strikeout: false,
            outline: false,
            shadow: false,
            underline: Underline::None,
            script: FontScript::Normal,
            color: Color::theme(1),
            family: Some(2),
            charset: None,
            scheme: FontScheme::Minor,
            index: None,
        }
    }
}

impl Font {
    /// Create a new default font
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_underline(mut self, underline: Underline) -> Self {
        self.underline = underline;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Check whether this font carries only default values
    pub fn is_default(&self) -> bool {
        *self == Font::default()
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.size.to_bits() == other.size.to_bits()
            && self.bold == other.bold
            && self.italic == other.italic
            && self.strikeout == other.strikeout
            && self.outline == other.outline
            && self.shadow == other.shadow
            && self.underline == other.underline
            && self.script == other.script
            && self.color == other.color
            && self.family == other.family
            && self.charset == other.charset
            && self.scheme == other.scheme
    }
}

impl Eq for Font {}

impl std::hash::Hash for Font {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.to_bits().hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.strikeout.hash(state);
        self.outline.hash(state);
        self.shadow.hash(state);
        self.underline.hash(state);
        self.script.hash(state);
        self.color.hash(state);
        self.family.hash(state);
        self.charset.hash(state);
        self.scheme.hash(state);
    }
}

/// Underline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
    /// Single accounting underline (extends to cell width)
    SingleAccounting,
    DoubleAccounting,
}

impl Underline {
    /// Token used by the `val` attribute of `<u>`
    pub fn as_str(&self) -> &'static str {
        match self {
            Underline::None => "none",
            Underline::Single => "single",
            Underline::Double => "double",
            Underline::SingleAccounting => "singleAccounting",
            Underline::DoubleAccounting => "doubleAccounting",
        }
    }

    pub fn from_str_token(s: &str) -> Option<Self> {
        Some(match s {
            "none" => Underline::None,
            "single" => Underline::Single,
            "double" => Underline::Double,
            "singleAccounting" => Underline::SingleAccounting,
            "doubleAccounting" => Underline::DoubleAccounting,
            _ => return None,
        })
    }
}

/// Font script position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontScript {
    #[default]
    Normal,
    Superscript,
    Subscript,
}

impl FontScript {
    /// Token used by `<vertAlign val=...>`
    pub fn as_str(&self) -> &'static str {
        match self {
            FontScript::Normal => "baseline",
            FontScript::Superscript => "superscript",
            FontScript::Subscript => "subscript",
        }
    }

    pub fn from_str_token(s: &str) -> Option<Self> {
        Some(match s {
            "baseline" => FontScript::Normal,
            "superscript" => FontScript::Superscript,
            "subscript" => FontScript::Subscript,
            _ => return None,
        })
    }
}

/// Theme font scheme a font belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontScheme {
    None,
    Major,
    #[default]
    Minor,
}

impl FontScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontScheme::None => "none",
            FontScheme::Major => "major",
            FontScheme::Minor => "minor",
        }
    }

    pub fn from_str_token(s: &str) -> Option<Self> {
        Some(match s {
            "none" => FontScheme::None,
            "major" => FontScheme::Major,
            "minor" => FontScheme::Minor,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_ignored_by_equality() {
        let a = Font::default();
        let mut b = Font::default();
        b.index = Some(7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_size_difference_is_significant() {
        assert_ne!(Font::default(), Font::default().with_size(12.0));
        assert!(Font::default().is_default());
        assert!(!Font::default().with_bold(true).is_default());
    }

    #[test]
    fn test_tokens() {
        assert_eq!(Underline::from_str_token("doubleAccounting"), Some(Underline::DoubleAccounting));
        assert_eq!(FontScript::Superscript.as_str(), "superscript");
        assert_eq!(FontScheme::from_str_token("major"), Some(FontScheme::Major));
        assert_eq!(FontScheme::from_str_token("bogus"), None);
    }
}

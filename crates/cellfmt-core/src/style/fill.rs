//! Fill/background style types

use super::Color;

/// Pattern fill for a cell background
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Fill {
    pub pattern: PatternType,
    pub foreground: Color,
    pub background: Color,
}

impl Fill {
    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        Self {
            pattern: PatternType::Solid,
            foreground: color,
            background: Color::Auto,
        }
    }

    /// Create a pattern fill
    pub fn pattern(pattern: PatternType, foreground: Color, background: Color) -> Self {
        Self {
            pattern,
            foreground,
            background,
        }
    }

    /// The `gray125` fill every stylesheet carries at index 1
    pub fn gray125() -> Self {
        Self::pattern(PatternType::Gray125, Color::Auto, Color::Auto)
    }

    /// Fill as it is registered: a color without a pattern means a solid fill.
    pub fn normalized(&self) -> Fill {
        if self.pattern == PatternType::None
            && (!self.foreground.is_auto() || !self.background.is_auto())
        {
            let color = if self.foreground.is_auto() {
                self.background
            } else {
                self.foreground
            };
            return Fill::solid(color);
        }
        self.clone()
    }

    /// Check whether the fill paints anything once normalized
    pub fn is_present(&self) -> bool {
        self.normalized() != Fill::default()
    }
}

/// Pattern fill types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternType {
    /// No pattern
    #[default]
    None,
    /// Solid (100% foreground)
    Solid,
    /// 50% gray
    MediumGray,
    /// 75% gray
    DarkGray,
    /// 25% gray
    LightGray,
    DarkHorizontal,
    DarkVertical,
    DarkDown,
    DarkUp,
    DarkGrid,
    DarkTrellis,
    LightHorizontal,
    LightVertical,
    LightDown,
    LightUp,
    LightGrid,
    LightTrellis,
    /// 12.5% gray
    Gray125,
    /// 6.25% gray
    Gray0625,
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::None => "none",
            PatternType::Solid => "solid",
            PatternType::MediumGray => "mediumGray",
            PatternType::DarkGray => "darkGray",
            PatternType::LightGray => "lightGray",
            PatternType::DarkHorizontal => "darkHorizontal",
            PatternType::DarkVertical => "darkVertical",
            PatternType::DarkDown => "darkDown",
            PatternType::DarkUp => "darkUp",
            PatternType::DarkGrid => "darkGrid",
            PatternType::DarkTrellis => "darkTrellis",
            PatternType::LightHorizontal => "lightHorizontal",
            PatternType::LightVertical => "lightVertical",
            PatternType::LightDown => "lightDown",
            PatternType::LightUp => "lightUp",
            PatternType::LightGrid => "lightGrid",
            PatternType::LightTrellis => "lightTrellis",
            PatternType::Gray125 => "gray125",
            PatternType::Gray0625 => "gray0625",
        }
    }

    pub fn from_str_token(s: &str) -> Option<Self> {
        Some(match s {
            "none" => PatternType::None,
            "solid" => PatternType::Solid,
            "mediumGray" => PatternType::MediumGray,
            "darkGray" => PatternType::DarkGray,
            "lightGray" => PatternType::LightGray,
            "darkHorizontal" => PatternType::DarkHorizontal,
            "darkVertical" => PatternType::DarkVertical,
            "darkDown" => PatternType::DarkDown,
            "darkUp" => PatternType::DarkUp,
            "darkGrid" => PatternType::DarkGrid,
            "darkTrellis" => PatternType::DarkTrellis,
            "lightHorizontal" => PatternType::LightHorizontal,
            "lightVertical" => PatternType::LightVertical,
            "lightDown" => PatternType::LightDown,
            "lightUp" => PatternType::LightUp,
            "lightGrid" => PatternType::LightGrid,
            "lightTrellis" => PatternType::LightTrellis,
            "gray125" => PatternType::Gray125,
            "gray0625" => PatternType::Gray0625,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_without_pattern_becomes_solid() {
        let fill = Fill {
            foreground: Color::RED,
            ..Default::default()
        };
        assert_eq!(fill.normalized(), Fill::solid(Color::RED));
        assert!(fill.is_present());

        let fill = Fill {
            background: Color::BLUE,
            ..Default::default()
        };
        assert_eq!(fill.normalized(), Fill::solid(Color::BLUE));
    }

    #[test]
    fn test_default_fill_is_absent() {
        assert!(!Fill::default().is_present());
        assert!(Fill::gray125().is_present());
        let patterned = Fill::pattern(PatternType::DarkGrid, Color::RED, Color::WHITE);
        assert_eq!(patterned.normalized(), patterned);
    }
}

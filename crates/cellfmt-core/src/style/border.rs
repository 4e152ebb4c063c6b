//! Border style types

use super::Color;

/// Border settings for a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Border {
    pub left: BorderEdge,
    pub right: BorderEdge,
    pub top: BorderEdge,
    pub bottom: BorderEdge,
    pub diagonal: BorderEdge,
    pub diagonal_direction: DiagonalDirection,
}

impl Border {
    /// Create a border with no edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Outline borders (left, right, top, bottom) with the same line
    pub fn outline(style: BorderLineStyle, color: Color) -> Self {
        let edge = BorderEdge::new(style, color);
        Self {
            left: edge,
            right: edge,
            top: edge,
            bottom: edge,
            ..Default::default()
        }
    }

    pub fn edge(&self, side: BorderSide) -> &BorderEdge {
        match side {
            BorderSide::Left => &self.left,
            BorderSide::Right => &self.right,
            BorderSide::Top => &self.top,
            BorderSide::Bottom => &self.bottom,
            BorderSide::Diagonal => &self.diagonal,
        }
    }

    pub fn edge_mut(&mut self, side: BorderSide) -> &mut BorderEdge {
        match side {
            BorderSide::Left => &mut self.left,
            BorderSide::Right => &mut self.right,
            BorderSide::Top => &mut self.top,
            BorderSide::Bottom => &mut self.bottom,
            BorderSide::Diagonal => &mut self.diagonal,
        }
    }

    pub fn with_edge(mut self, side: BorderSide, style: BorderLineStyle, color: Color) -> Self {
        *self.edge_mut(side) = BorderEdge::new(style, color);
        self
    }

    /// Check if no edge draws a line
    pub fn is_empty(&self) -> bool {
        BorderSide::ALL.iter().all(|s| self.edge(*s).is_none())
            && self.diagonal_direction == DiagonalDirection::None
    }

    /// Border as it is registered: edges without a line carry no color.
    pub fn normalized(&self) -> Border {
        let mut border = self.clone();
        for side in BorderSide::ALL {
            let edge = border.edge_mut(side);
            if edge.is_none() {
                edge.color = Color::Auto;
            }
        }
        border
    }
}

/// Edge of a cell border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSide {
    Left,
    Right,
    Top,
    Bottom,
    Diagonal,
}

impl BorderSide {
    /// Edges in stylesheet element order
    pub const ALL: [BorderSide; 5] = [
        BorderSide::Left,
        BorderSide::Right,
        BorderSide::Top,
        BorderSide::Bottom,
        BorderSide::Diagonal,
    ];

    /// Element name of the edge inside `<border>`
    pub fn tag(&self) -> &'static str {
        match self {
            BorderSide::Left => "left",
            BorderSide::Right => "right",
            BorderSide::Top => "top",
            BorderSide::Bottom => "bottom",
            BorderSide::Diagonal => "diagonal",
        }
    }
}

/// A single border edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BorderEdge {
    pub style: BorderLineStyle,
    pub color: Color,
}

impl BorderEdge {
    pub fn new(style: BorderLineStyle, color: Color) -> Self {
        Self { style, color }
    }

    /// Thin black line
    pub fn thin() -> Self {
        Self::new(BorderLineStyle::Thin, Color::BLACK)
    }

    pub fn is_none(&self) -> bool {
        self.style == BorderLineStyle::None
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderLineStyle {
    #[default]
    None,
    Thin,
    Medium,
    Thick,
    Dashed,
    Dotted,
    Double,
    /// Very thin line
    Hair,
    MediumDashed,
    DashDot,
    MediumDashDot,
    DashDotDot,
    MediumDashDotDot,
    SlantDashDot,
}

impl BorderLineStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderLineStyle::None => "none",
            BorderLineStyle::Thin => "thin",
            BorderLineStyle::Medium => "medium",
            BorderLineStyle::Thick => "thick",
            BorderLineStyle::Dashed => "dashed",
            BorderLineStyle::Dotted => "dotted",
            BorderLineStyle::Double => "double",
            BorderLineStyle::Hair => "hair",
            BorderLineStyle::MediumDashed => "mediumDashed",
            BorderLineStyle::DashDot => "dashDot",
            BorderLineStyle::MediumDashDot => "mediumDashDot",
            BorderLineStyle::DashDotDot => "dashDotDot",
            BorderLineStyle::MediumDashDotDot => "mediumDashDotDot",
            BorderLineStyle::SlantDashDot => "slantDashDot",
        }
    }

    pub fn from_str_token(s: &str) -> Option<Self> {
        Some(match s {
            "none" => BorderLineStyle::None,
            "thin" => BorderLineStyle::Thin,
            "medium" => BorderLineStyle::Medium,
            "thick" => BorderLineStyle::Thick,
            "dashed" => BorderLineStyle::Dashed,
            "dotted" => BorderLineStyle::Dotted,
            "double" => BorderLineStyle::Double,
            "hair" => BorderLineStyle::Hair,
            "mediumDashed" => BorderLineStyle::MediumDashed,
            "dashDot" => BorderLineStyle::DashDot,
            "mediumDashDot" => BorderLineStyle::MediumDashDot,
            "dashDotDot" => BorderLineStyle::DashDotDot,
            "mediumDashDotDot" => BorderLineStyle::MediumDashDotDot,
            "slantDashDot" => BorderLineStyle::SlantDashDot,
            _ => return None,
        })
    }
}

/// Diagonal border direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DiagonalDirection {
    #[default]
    None,
    /// Top-left to bottom-right
    Down,
    /// Bottom-left to top-right
    Up,
    Both,
}

impl DiagonalDirection {
    pub fn is_up(&self) -> bool {
        matches!(self, DiagonalDirection::Up | DiagonalDirection::Both)
    }

    pub fn is_down(&self) -> bool {
        matches!(self, DiagonalDirection::Down | DiagonalDirection::Both)
    }

    pub fn from_flags(up: bool, down: bool) -> Self {
        match (up, down) {
            (true, true) => DiagonalDirection::Both,
            (true, false) => DiagonalDirection::Up,
            (false, true) => DiagonalDirection::Down,
            (false, false) => DiagonalDirection::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_leaves_diagonal_empty() {
        let border = Border::outline(BorderLineStyle::Thin, Color::BLACK);
        assert_eq!(border.left, BorderEdge::thin());
        assert_eq!(border.bottom, BorderEdge::thin());
        assert!(border.diagonal.is_none());
        assert!(!border.is_empty());
    }

    #[test]
    fn test_with_edge() {
        let border = Border::new().with_edge(BorderSide::Right, BorderLineStyle::Medium, Color::RED);
        assert_eq!(border.edge(BorderSide::Right).style, BorderLineStyle::Medium);
        assert!(border.left.is_none());
        assert!(Border::new().is_empty());
    }

    #[test]
    fn test_normalized_drops_color_of_missing_edges() {
        let mut border = Border::new().with_edge(BorderSide::Top, BorderLineStyle::Thin, Color::RED);
        border.left = BorderEdge::new(BorderLineStyle::None, Color::BLUE);
        border.diagonal.color = Color::GREEN;

        let normalized = border.normalized();
        assert_eq!(normalized.left, BorderEdge::default());
        assert_eq!(normalized.diagonal, BorderEdge::default());
        assert_eq!(normalized.top, BorderEdge::new(BorderLineStyle::Thin, Color::RED));

        let colored_only = Border::new().with_edge(BorderSide::Left, BorderLineStyle::None, Color::RED);
        assert!(colored_only.is_empty());
        assert_eq!(colored_only.normalized(), Border::new());
    }

    #[test]
    fn test_diagonal_flags() {
        assert_eq!(DiagonalDirection::from_flags(true, true), DiagonalDirection::Both);
        assert!(DiagonalDirection::Both.is_up() && DiagonalDirection::Both.is_down());
        assert!(!DiagonalDirection::Down.is_up());
    }
}

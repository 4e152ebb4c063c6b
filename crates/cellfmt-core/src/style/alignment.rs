//! Text alignment types
//!
//! Alignment fields depend on each other: indentation only makes sense for a
//! few horizontal modes, and wrap and shrink-to-fit exclude one another. The
//! setters here keep those rules after every call, so fields are private.

/// Text alignment settings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
    wrap_text: bool,
    shrink_to_fit: bool,
    indent: u32,
    rotation: i32,
}

impl Alignment {
    /// Rotation value meaning "stacked vertical text"
    pub const VERTICAL_TEXT: i32 = 255;

    /// Create a new default alignment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal(&self) -> HorizontalAlignment {
        self.horizontal
    }

    pub fn vertical(&self) -> VerticalAlignment {
        self.vertical
    }

    pub fn wrap_text(&self) -> bool {
        self.wrap_text
    }

    pub fn shrink_to_fit(&self) -> bool {
        self.shrink_to_fit
    }

    pub fn indent(&self) -> u32 {
        self.indent
    }

    /// Rotation in degrees (-90..=90) or [`Alignment::VERTICAL_TEXT`]
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    /// Set horizontal alignment.
    ///
    /// Clears the indent unless `align` can be indented, and clears
    /// shrink-to-fit for the stretching modes.
    pub fn set_horizontal(&mut self, align: HorizontalAlignment) {
        if self.indent != 0 && !align.keeps_indent() {
            self.indent = 0;
        }
        if self.shrink_to_fit && align.stretches() {
            self.shrink_to_fit = false;
        }
        self.horizontal = align;
    }

    pub fn set_vertical(&mut self, align: VerticalAlignment) {
        self.vertical = align;
    }

    /// Enabling wrap turns shrink-to-fit off.
    pub fn set_wrap_text(&mut self, wrap: bool) {
        if wrap {
            self.shrink_to_fit = false;
        }
        self.wrap_text = wrap;
    }

    /// Enabling shrink-to-fit turns wrap off and moves a stretching
    /// horizontal alignment back to left.
    pub fn set_shrink_to_fit(&mut self, shrink: bool) {
        if shrink {
            self.wrap_text = false;
            if self.horizontal.stretches() {
                self.horizontal = HorizontalAlignment::Left;
            }
        }
        self.shrink_to_fit = shrink;
    }

    /// A non-zero indent forces horizontal alignment to left unless the
    /// current mode accepts an indent.
    pub fn set_indent(&mut self, indent: u32) {
        if indent != 0 && !self.horizontal.accepts_indent() {
            self.horizontal = HorizontalAlignment::Left;
        }
        self.indent = indent;
    }

    /// Stored as given; see [`Alignment::VERTICAL_TEXT`].
    pub fn set_rotation(&mut self, rotation: i32) {
        self.rotation = rotation;
    }

    /// True when any field differs from its default and the alignment has to
    /// be written out.
    pub fn is_customized(&self) -> bool {
        self.horizontal != HorizontalAlignment::General
            || self.vertical != VerticalAlignment::Bottom
            || self.indent != 0
            || self.wrap_text
            || self.rotation != 0
            || self.shrink_to_fit
    }

    /// Consuming builder for horizontal alignment
    pub fn with_horizontal(mut self, align: HorizontalAlignment) -> Self {
        self.set_horizontal(align);
        self
    }

    pub fn with_vertical(mut self, align: VerticalAlignment) -> Self {
        self.set_vertical(align);
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.set_wrap_text(wrap);
        self
    }

    pub fn with_indent(mut self, indent: u32) -> Self {
        self.set_indent(indent);
        self
    }

    pub fn with_rotation(mut self, degrees: i32) -> Self {
        self.set_rotation(degrees);
        self
    }
}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// General alignment (text left, numbers right)
    #[default]
    General,
    Left,
    Center,
    Right,
    /// Repeat content to fill cell width
    Fill,
    Justify,
    /// Center across selection
    CenterContinuous,
    /// Like justify, but for East Asian text
    Distributed,
}

impl HorizontalAlignment {
    /// Wire token; empty for [`HorizontalAlignment::General`], which is never written.
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlignment::General => "",
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
            HorizontalAlignment::Fill => "fill",
            HorizontalAlignment::Justify => "justify",
            HorizontalAlignment::CenterContinuous => "centerContinuous",
            HorizontalAlignment::Distributed => "distributed",
        }
    }

    pub fn from_str_token(s: &str) -> Option<Self> {
        Some(match s {
            "general" => HorizontalAlignment::General,
            "left" => HorizontalAlignment::Left,
            "center" => HorizontalAlignment::Center,
            "right" => HorizontalAlignment::Right,
            "fill" => HorizontalAlignment::Fill,
            "justify" => HorizontalAlignment::Justify,
            "centerContinuous" => HorizontalAlignment::CenterContinuous,
            "distributed" => HorizontalAlignment::Distributed,
            _ => return None,
        })
    }

    // Modes a new indent may be applied to without switching to left.
    fn accepts_indent(self) -> bool {
        matches!(
            self,
            HorizontalAlignment::General
                | HorizontalAlignment::Left
                | HorizontalAlignment::Right
                | HorizontalAlignment::Justify
        )
    }

    // Modes that keep an existing indent when selected.
    fn keeps_indent(self) -> bool {
        matches!(
            self,
            HorizontalAlignment::General
                | HorizontalAlignment::Left
                | HorizontalAlignment::Right
                | HorizontalAlignment::Distributed
        )
    }

    fn stretches(self) -> bool {
        matches!(
            self,
            HorizontalAlignment::Fill
                | HorizontalAlignment::Justify
                | HorizontalAlignment::Distributed
        )
    }
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    Top,
    Center,
    /// Bottom aligned (default)
    #[default]
    Bottom,
    Justify,
    Distributed,
}

impl VerticalAlignment {
    /// Wire token; empty for [`VerticalAlignment::Bottom`], which is never written.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "",
            VerticalAlignment::Justify => "justify",
            VerticalAlignment::Distributed => "distributed",
        }
    }

    pub fn from_str_token(s: &str) -> Option<Self> {
        Some(match s {
            "top" => VerticalAlignment::Top,
            "center" => VerticalAlignment::Center,
            "bottom" => VerticalAlignment::Bottom,
            "justify" => VerticalAlignment::Justify,
            "distributed" => VerticalAlignment::Distributed,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL_H: [HorizontalAlignment; 8] = [
        HorizontalAlignment::General,
        HorizontalAlignment::Left,
        HorizontalAlignment::Center,
        HorizontalAlignment::Right,
        HorizontalAlignment::Fill,
        HorizontalAlignment::Justify,
        HorizontalAlignment::CenterContinuous,
        HorizontalAlignment::Distributed,
    ];

    #[test]
    fn test_default_is_not_customized() {
        let al = Alignment::new();
        assert!(!al.is_customized());
        assert_eq!(al.horizontal().as_str(), "");
        assert_eq!(al.vertical().as_str(), "");
    }

    #[test]
    fn test_indent_then_center_clears_indent() {
        let mut al = Alignment::new();
        al.set_indent(5);
        al.set_horizontal(HorizontalAlignment::Center);
        assert_eq!(al.indent(), 0);
        assert_eq!(al.horizontal(), HorizontalAlignment::Center);
    }

    #[test]
    fn test_indent_forces_left() {
        let al = Alignment::new()
            .with_horizontal(HorizontalAlignment::Center)
            .with_indent(2);
        assert_eq!(al.horizontal(), HorizontalAlignment::Left);
        assert_eq!(al.indent(), 2);

        let al = Alignment::new()
            .with_horizontal(HorizontalAlignment::Justify)
            .with_indent(2);
        assert_eq!(al.horizontal(), HorizontalAlignment::Justify);

        // Zero indent leaves the alignment alone
        let al = Alignment::new()
            .with_horizontal(HorizontalAlignment::Center)
            .with_indent(0);
        assert_eq!(al.horizontal(), HorizontalAlignment::Center);
    }

    #[test]
    fn test_distributed_keeps_indent_but_justify_drops_it() {
        let al = Alignment::new()
            .with_indent(3)
            .with_horizontal(HorizontalAlignment::Distributed);
        assert_eq!(al.indent(), 3);

        let al = Alignment::new()
            .with_indent(3)
            .with_horizontal(HorizontalAlignment::Justify);
        assert_eq!(al.indent(), 0);
    }

    #[test]
    fn test_shrink_resets_stretching_alignment() {
        for h in [
            HorizontalAlignment::Fill,
            HorizontalAlignment::Justify,
            HorizontalAlignment::Distributed,
        ] {
            let mut al = Alignment::new().with_horizontal(h);
            al.set_shrink_to_fit(true);
            assert_eq!(al.horizontal(), HorizontalAlignment::Left);
            assert!(al.shrink_to_fit());

            al.set_horizontal(h);
            assert!(!al.shrink_to_fit());
        }

        let mut al = Alignment::new().with_horizontal(HorizontalAlignment::Center);
        al.set_shrink_to_fit(true);
        assert_eq!(al.horizontal(), HorizontalAlignment::Center);
    }

    #[test]
    fn test_disabling_shrink_has_no_side_effects() {
        let mut al = Alignment::new().with_horizontal(HorizontalAlignment::Fill);
        al.set_shrink_to_fit(false);
        assert_eq!(al.horizontal(), HorizontalAlignment::Fill);
    }

    #[test]
    fn test_tokens() {
        let tokens: Vec<&str> = ALL_H.iter().map(|h| h.as_str()).collect();
        assert_eq!(
            tokens,
            [
                "",
                "left",
                "center",
                "right",
                "fill",
                "justify",
                "centerContinuous",
                "distributed"
            ]
        );
        for h in &ALL_H[1..] {
            assert_eq!(HorizontalAlignment::from_str_token(h.as_str()), Some(*h));
        }
        assert_eq!(
            HorizontalAlignment::from_str_token("general"),
            Some(HorizontalAlignment::General)
        );
        assert_eq!(VerticalAlignment::Justify.as_str(), "justify");
        assert_eq!(
            VerticalAlignment::from_str_token("bottom"),
            Some(VerticalAlignment::Bottom)
        );
    }

    #[derive(Debug, Clone)]
    enum Op {
        Horizontal(usize),
        Indent(u32),
        Wrap(bool),
        Shrink(bool),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..ALL_H.len()).prop_map(Op::Horizontal),
            (0u32..20).prop_map(Op::Indent),
            any::<bool>().prop_map(Op::Wrap),
            any::<bool>().prop_map(Op::Shrink),
        ]
    }

    proptest! {
        #[test]
        fn prop_wrap_and_shrink_never_both_set(ops in proptest::collection::vec(op(), 0..32)) {
            let mut al = Alignment::new();
            for op in ops {
                match op {
                    Op::Horizontal(i) => al.set_horizontal(ALL_H[i]),
                    Op::Indent(n) => al.set_indent(n),
                    Op::Wrap(w) => al.set_wrap_text(w),
                    Op::Shrink(s) => al.set_shrink_to_fit(s),
                }
                prop_assert!(!(al.wrap_text() && al.shrink_to_fit()));
                prop_assert!(!(al.shrink_to_fit() && al.horizontal().stretches()));
            }
        }

        #[test]
        fn prop_wrap_then_shrink(h in 0..ALL_H.len()) {
            let mut al = Alignment::new().with_horizontal(ALL_H[h]);
            al.set_wrap_text(true);
            al.set_shrink_to_fit(true);
            prop_assert!(!al.wrap_text());
            prop_assert!(al.shrink_to_fit());
            al.set_wrap_text(true);
            prop_assert!(al.wrap_text());
            prop_assert!(!al.shrink_to_fit());
        }

        #[test]
        fn prop_non_indentable_alignment_clears_indent(n in 1u32..250, h in 0..ALL_H.len()) {
            let mut al = Alignment::new().with_indent(n);
            al.set_horizontal(ALL_H[h]);
            if ALL_H[h].keeps_indent() {
                prop_assert_eq!(al.indent(), n);
            } else {
                prop_assert_eq!(al.indent(), 0);
            }
        }

        #[test]
        fn prop_single_change_customizes(rotation in -90i32..=90, indent in 1u32..250) {
            prop_assert_eq!(Alignment::new().with_rotation(rotation).is_customized(), rotation != 0);
            prop_assert!(Alignment::new().with_indent(indent).is_customized());
        }
    }
}

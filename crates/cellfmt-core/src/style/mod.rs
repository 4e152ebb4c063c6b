//! Cell styling types
//!
//! This module contains types for cell formatting:
//! - [`Style`] - Complete cell style, the unit cells are formatted with
//! - [`Font`] - Font settings
//! - [`Fill`] - Background fill
//! - [`Border`] - Cell borders
//! - [`Alignment`] - Text alignment
//! - [`Color`] - Color representation
//! - [`StyleRegistry`] - Deduplicated style tables

mod alignment;
mod border;
mod color;
mod fill;
mod font;
mod number_format;
mod registry;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use border::{Border, BorderEdge, BorderLineStyle, BorderSide, DiagonalDirection};
pub use color::Color;
pub use fill::{Fill, PatternType};
pub use font::{Font, FontScheme, FontScript, Underline};
pub use number_format::NumberFormat;
pub use registry::{CellXf, StyleRegistry, StyleTable};

use crate::error::{Error, Result};

/// Complete cell style
///
/// Setters apply one field together with any alignment rule it triggers, so
/// the style is consistent after every call. Setters never fail; numeric
/// fields are stored as given (see [`Style::validate`] for the strict check).
///
/// Registering a style with a [`StyleRegistry`] records the assigned indices
/// on it. Any later mutation drops those indices again: a changed style has
/// to be registered again to get a valid index.
#[derive(Debug, Clone, Default)]
pub struct Style {
    font: Font,
    alignment: Alignment,
    fill: Fill,
    border: Border,
    number_format: NumberFormat,
    protection: Protection,
    differential: bool,
    pub(crate) identity: Identity,
}

/// Registry-assigned identity of a [`Style`]
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Identity {
    pub(crate) xf: Option<u32>,
    pub(crate) dxf: Option<u32>,
    pub(crate) fill: Option<u32>,
    pub(crate) border: Option<u32>,
    pub(crate) num_fmt: Option<u32>,
    pub(crate) has_fill: bool,
    pub(crate) has_border: bool,
}

impl Style {
    /// Largest font size spreadsheet applications accept, in points
    pub const MAX_FONT_SIZE: f64 = 409.0;
    /// Largest indent level spreadsheet applications accept
    pub const MAX_INDENT: u32 = 250;

    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a differential (conditional formatting) style
    pub fn differential() -> Self {
        Self {
            differential: true,
            ..Self::default()
        }
    }

    // Any mutation invalidates registration.
    fn touch(&mut self) {
        self.identity = Identity::default();
        self.font.index = None;
    }

    // === Font ===

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn font_name(&self) -> &str {
        &self.font.name
    }

    pub fn font_size(&self) -> f64 {
        self.font.size
    }

    pub fn font_bold(&self) -> bool {
        self.font.bold
    }

    pub fn font_italic(&self) -> bool {
        self.font.italic
    }

    pub fn font_strikeout(&self) -> bool {
        self.font.strikeout
    }

    pub fn font_outline(&self) -> bool {
        self.font.outline
    }

    pub fn font_shadow(&self) -> bool {
        self.font.shadow
    }

    pub fn font_underline(&self) -> Underline {
        self.font.underline
    }

    pub fn font_script(&self) -> FontScript {
        self.font.script
    }

    pub fn font_color(&self) -> Color {
        self.font.color
    }

    /// Replace the whole font
    pub fn set_font(&mut self, font: Font) {
        self.touch();
        self.font = Font { index: None, ..font };
    }

    pub fn set_font_name<S: Into<String>>(&mut self, name: S) {
        self.touch();
        self.font.name = name.into();
    }

    /// Set font size in points. No range check; see [`Style::validate`].
    pub fn set_font_size(&mut self, size: f64) {
        self.touch();
        self.font.size = size;
    }

    pub fn set_font_bold(&mut self, bold: bool) {
        self.touch();
        self.font.bold = bold;
    }

    pub fn set_font_italic(&mut self, italic: bool) {
        self.touch();
        self.font.italic = italic;
    }

    pub fn set_font_strikeout(&mut self, strikeout: bool) {
        self.touch();
        self.font.strikeout = strikeout;
    }

    pub fn set_font_outline(&mut self, outline: bool) {
        self.touch();
        self.font.outline = outline;
    }

    pub fn set_font_shadow(&mut self, shadow: bool) {
        self.touch();
        self.font.shadow = shadow;
    }

    pub fn set_font_underline(&mut self, underline: Underline) {
        self.touch();
        self.font.underline = underline;
    }

    pub fn set_font_script(&mut self, script: FontScript) {
        self.touch();
        self.font.script = script;
    }

    pub fn set_font_color(&mut self, color: Color) {
        self.touch();
        self.font.color = color;
    }

    // === Alignment ===

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.alignment.horizontal()
    }

    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.alignment.vertical()
    }

    pub fn text_wrap(&self) -> bool {
        self.alignment.wrap_text()
    }

    pub fn shrink_to_fit(&self) -> bool {
        self.alignment.shrink_to_fit()
    }

    pub fn indent(&self) -> u32 {
        self.alignment.indent()
    }

    pub fn rotation(&self) -> i32 {
        self.alignment.rotation()
    }

    /// Set horizontal alignment.
    ///
    /// An existing indent survives only for general, left, right and
    /// distributed; fill, justify and distributed turn shrink-to-fit off.
    pub fn set_horizontal_alignment(&mut self, align: HorizontalAlignment) {
        self.touch();
        self.alignment.set_horizontal(align);
    }

    pub fn set_vertical_alignment(&mut self, align: VerticalAlignment) {
        self.touch();
        self.alignment.set_vertical(align);
    }

    /// Set the indent level; a non-zero indent moves center, fill,
    /// center-continuous and distributed alignment to left.
    pub fn set_indent(&mut self, indent: u32) {
        self.touch();
        self.alignment.set_indent(indent);
    }

    /// Wrap and shrink-to-fit are exclusive; enabling wrap disables shrink.
    pub fn set_text_wrap(&mut self, wrap: bool) {
        self.touch();
        self.alignment.set_wrap_text(wrap);
    }

    /// Enabling shrink-to-fit disables wrap and resets fill, justify and
    /// distributed alignment to left.
    pub fn set_shrink_to_fit(&mut self, shrink: bool) {
        self.touch();
        self.alignment.set_shrink_to_fit(shrink);
    }

    /// Rotation in degrees, or [`Alignment::VERTICAL_TEXT`].
    pub fn set_rotation(&mut self, rotation: i32) {
        self.touch();
        self.alignment.set_rotation(rotation);
    }

    /// Horizontal alignment token, empty for general
    pub fn horizontal_alignment_str(&self) -> &'static str {
        self.alignment.horizontal().as_str()
    }

    /// Vertical alignment token, empty for bottom
    pub fn vertical_alignment_str(&self) -> &'static str {
        self.alignment.vertical().as_str()
    }

    /// Whether an alignment block has to be written for this style
    pub fn alignment_changed(&self) -> bool {
        self.alignment.is_customized()
    }

    // === Fill ===

    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    pub fn set_fill(&mut self, fill: Fill) {
        self.touch();
        self.fill = fill;
    }

    pub fn set_fill_pattern(&mut self, pattern: PatternType) {
        self.touch();
        self.fill.pattern = pattern;
    }

    /// Pattern foreground color. Presence of the fill is decided at registration.
    pub fn set_foreground_color(&mut self, color: Color) {
        self.touch();
        self.fill.foreground = color;
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.touch();
        self.fill.background = color;
    }

    /// True once registration found a non-default fill
    pub fn has_fill(&self) -> bool {
        self.identity.has_fill
    }

    /// Row of the fill table, assigned when registered as a cell style
    pub fn fill_index(&self) -> Option<u32> {
        self.identity.fill
    }

    // === Border ===

    pub fn border(&self) -> &Border {
        &self.border
    }

    pub fn set_border(&mut self, border: Border) {
        self.touch();
        self.border = border;
    }

    pub fn set_border_edge(&mut self, side: BorderSide, edge: BorderEdge) {
        self.touch();
        *self.border.edge_mut(side) = edge;
    }

    pub fn set_diagonal_direction(&mut self, direction: DiagonalDirection) {
        self.touch();
        self.border.diagonal_direction = direction;
    }

    /// True once registration found a non-empty border
    pub fn has_border(&self) -> bool {
        self.identity.has_border
    }

    pub fn border_index(&self) -> Option<u32> {
        self.identity.border
    }

    // === Number format ===

    pub fn number_format(&self) -> &NumberFormat {
        &self.number_format
    }

    /// Set the format code; codes of built-in formats resolve to their id.
    pub fn set_number_format<S: AsRef<str> + Into<String>>(&mut self, code: S) {
        self.touch();
        self.number_format = NumberFormat::from_code(code);
    }

    /// Set a built-in format by reserved id (0..=163). Larger ids fail
    /// [`Style::validate`] and register as General.
    pub fn set_number_format_id(&mut self, id: u32) {
        self.touch();
        self.number_format = NumberFormat::from_id(id);
    }

    pub fn set_number_format_value(&mut self, format: NumberFormat) {
        self.touch();
        self.number_format = format;
    }

    /// `numFmtId` assigned at registration
    pub fn number_format_index(&self) -> Option<u32> {
        self.identity.num_fmt
    }

    // === Protection ===

    pub fn protection(&self) -> Protection {
        self.protection
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.touch();
        self.protection.locked = locked;
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.touch();
        self.protection.hidden = hidden;
    }

    // === Identity ===

    /// Whether this is a conditional formatting delta record
    pub fn is_differential(&self) -> bool {
        self.differential
    }

    /// Row in `cellXfs`, `None` until registered
    pub fn xf_index(&self) -> Option<u32> {
        self.identity.xf
    }

    /// Row in `dxfs`, `None` until registered
    pub fn dxf_index(&self) -> Option<u32> {
        self.identity.dxf
    }

    /// Check numeric fields against the limits spreadsheet applications enforce.
    pub fn validate(&self) -> Result<()> {
        let size = self.font.size;
        if !size.is_finite() || size <= 0.0 || size > Self::MAX_FONT_SIZE {
            return Err(Error::invalid_range("font size", size));
        }
        let rotation = self.alignment.rotation();
        if !(-90..=90).contains(&rotation) && rotation != Alignment::VERTICAL_TEXT {
            return Err(Error::invalid_range("rotation", rotation));
        }
        if self.alignment.indent() > Self::MAX_INDENT {
            return Err(Error::invalid_range("indent", self.alignment.indent()));
        }
        if let NumberFormat::BuiltIn(id) = self.number_format {
            if !NumberFormat::is_reserved_id(id) {
                return Err(Error::invalid_range("number format id", id));
            }
        }
        Ok(())
    }

    // === Builders ===

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.set_font_bold(bold);
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.set_font_italic(italic);
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.set_font_size(size);
        self
    }

    pub fn with_font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.set_font_name(name);
        self
    }

    pub fn with_font_color(mut self, color: Color) -> Self {
        self.set_font_color(color);
        self
    }

    /// Solid fill in `color`
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.set_fill(Fill::solid(color));
        self
    }

    pub fn with_number_format<S: AsRef<str> + Into<String>>(mut self, code: S) -> Self {
        self.set_number_format(code);
        self
    }

    pub fn with_horizontal(mut self, align: HorizontalAlignment) -> Self {
        self.set_horizontal_alignment(align);
        self
    }

    pub fn with_vertical(mut self, align: VerticalAlignment) -> Self {
        self.set_vertical_alignment(align);
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.set_text_wrap(wrap);
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.set_border(border);
        self
    }
}

impl PartialEq for Style {
    fn eq(&self, other: &Self) -> bool {
        self.font == other.font
            && self.alignment == other.alignment
            && self.fill == other.fill
            && self.border == other.border
            && self.number_format == other.number_format
            && self.protection == other.protection
            && self.differential == other.differential
    }
}

impl Eq for Style {}

impl std::hash::Hash for Style {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.font.hash(state);
        self.alignment.hash(state);
        self.fill.hash(state);
        self.border.hash(state);
        self.number_format.hash(state);
        self.protection.hash(state);
        self.differential.hash(state);
    }
}

/// Cell protection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Protection {
    /// Cell is locked (protected when sheet is protected)
    pub locked: bool,
    /// Formula is hidden when sheet is protected
    pub hidden: bool,
}

impl Default for Protection {
    fn default() -> Self {
        Self {
            locked: true,
            hidden: false,
        }
    }
}

impl Protection {
    /// Create unlocked protection
    pub fn unlocked() -> Self {
        Self {
            locked: false,
            hidden: false,
        }
    }
}

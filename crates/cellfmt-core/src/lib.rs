//! # cellfmt-core
//!
//! Cell style model and style registry for the cellfmt stylesheet library.
//!
//! This crate provides:
//! - [`Style`] - Formatting of a cell (font, alignment, fill, border, number
//!   format, protection), kept consistent on every mutation
//! - [`StyleRegistry`] - Deduplicated, indexed style tables for one document
//! - [`RegistrySettings`] - Registry configuration
//!
//! ## Example
//!
//! ```rust
//! use cellfmt_core::{HorizontalAlignment, Style, StyleRegistry};
//!
//! let mut registry = StyleRegistry::new();
//!
//! let mut header = Style::new().with_bold(true);
//! header.set_indent(2);
//! header.set_horizontal_alignment(HorizontalAlignment::Center);
//! assert_eq!(header.indent(), 0);
//!
//! let xf = registry.register_style(&mut header).unwrap();
//! assert_eq!(xf, 1);
//! assert_eq!(header.xf_index(), Some(1));
//! ```

pub mod error;
pub mod settings;
pub mod style;

pub use error::{Error, Result};
pub use settings::{RegistrySettings, Validation};

// Re-export all style types for convenience
pub use style::{
    Alignment, Border, BorderEdge, BorderLineStyle, BorderSide, CellXf, Color,
    DiagonalDirection, Fill, Font, FontScheme, FontScript, HorizontalAlignment, NumberFormat,
    PatternType, Protection, Style, StyleRegistry, StyleTable, Underline, VerticalAlignment,
};

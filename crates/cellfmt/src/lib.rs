//! # cellfmt
//!
//! Cell formatting for spreadsheet writers.
//!
//! cellfmt models the formatting of a cell as a [`Style`] whose alignment
//! rules hold after every mutation, collects styles in a [`StyleRegistry`]
//! that hands out one index per distinct value, and writes the registry as
//! an OOXML stylesheet (`xl/styles.xml`).
//!
//! ## Features
//!
//! - Fonts, fills, borders, alignment, number formats and protection
//! - Deduplicated `cellXfs` and `dxfs` (conditional formatting) tables
//! - Built-in number format resolution, custom formats from id 164
//! - Optional strict validation of sizes, rotations and indents
//! - Stylesheet reader for round trips
//!
//! ## Example
//!
//! ```rust
//! use cellfmt::prelude::*;
//!
//! let mut registry = StyleRegistry::new();
//!
//! let mut header = Style::new()
//!     .with_bold(true)
//!     .with_fill_color(Color::rgb(0xDD, 0xEB, 0xF7))
//!     .with_horizontal(HorizontalAlignment::Center);
//! let xf = registry.register_style(&mut header).unwrap();
//! assert_eq!(xf, 1);
//!
//! let xml = StylesheetWriter::to_xml(&registry);
//! assert!(xml.contains("<cellXfs count=\"2\">"));
//! ```

pub mod prelude;

// Re-export core types
pub use cellfmt_core::{
    // Style types
    Alignment,
    Border,
    BorderEdge,
    BorderLineStyle,
    BorderSide,
    CellXf,
    Color,
    DiagonalDirection,
    // Error types
    Error,
    Fill,
    Font,
    FontScheme,
    FontScript,
    HorizontalAlignment,
    NumberFormat,
    PatternType,
    Protection,
    // Registry
    RegistrySettings,
    Result,
    Style,
    StyleRegistry,
    StyleTable,
    Underline,
    Validation,
    VerticalAlignment,
};

// Re-export I/O types
pub use cellfmt_xlsx::{
    ParsedStylesheet, StylesheetReader, StylesheetWriter, XlsxError, XlsxResult,
};

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Extension trait for StyleRegistry to add file I/O
pub trait StyleRegistryExt: Sized {
    /// Load a `styles.xml` file and register every style it contains
    fn open<P: AsRef<Path>>(path: P, settings: RegistrySettings) -> XlsxResult<Self>;

    /// Save the registry as a `styles.xml` file
    fn save<P: AsRef<Path>>(&self, path: P) -> XlsxResult<()>;
}

impl StyleRegistryExt for StyleRegistry {
    fn open<P: AsRef<Path>>(path: P, settings: RegistrySettings) -> XlsxResult<Self> {
        let file = File::open(path)?;
        StylesheetReader::read(BufReader::new(file))?.into_registry(settings)
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> XlsxResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        StylesheetWriter::write(self, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

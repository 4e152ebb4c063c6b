//! Prelude module - common imports for cellfmt users
//!
//! ```rust
//! use cellfmt::prelude::*;
//! ```

pub use crate::{
    // Style types
    Alignment,
    Border,
    BorderEdge,
    BorderLineStyle,
    BorderSide,
    Color,
    DiagonalDirection,
    // Error types
    Error,
    Fill,
    Font,
    HorizontalAlignment,
    NumberFormat,
    PatternType,
    Protection,
    // Registry
    RegistrySettings,
    Result,
    Style,
    StyleRegistry,
    // Extension traits
    StyleRegistryExt,
    Underline,
    Validation,
    VerticalAlignment,
    // I/O types
    StylesheetReader,
    StylesheetWriter,
    XlsxError,
};

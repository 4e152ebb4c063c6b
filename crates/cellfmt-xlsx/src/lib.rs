//! # cellfmt-xlsx
//!
//! Writes a [`StyleRegistry`](cellfmt_core::StyleRegistry) as an OOXML
//! stylesheet (`xl/styles.xml`) and reads such a stylesheet back into styles.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{XlsxError, XlsxResult};
pub use reader::{ParsedStylesheet, StylesheetReader};
pub use writer::StylesheetWriter;

/// Namespace of the spreadsheetml main part
pub const SPREADSHEETML_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

//! Style registry for deduplication
//!
//! Spreadsheets share a handful of distinct formats across many cells. The
//! registry hands out one stable index per distinct value, for each of the
//! tables of a stylesheet: fonts, fills, borders, number formats, cell
//! formats (`cellXfs`) and differential formats (`dxfs`).

use std::hash::Hash;

use ahash::AHashMap;

use super::{Alignment, Border, Fill, Font, Identity, NumberFormat, Protection, Style};
use crate::error::{Error, Result};
use crate::settings::{RegistrySettings, Validation};

/// One row of the `cellXfs` table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellXf {
    pub font_id: u32,
    pub fill_id: u32,
    pub border_id: u32,
    pub num_fmt_id: u32,
    pub alignment: Alignment,
    pub protection: Protection,
}

impl Default for CellXf {
    fn default() -> Self {
        Self {
            font_id: 0,
            fill_id: 0,
            border_id: 0,
            num_fmt_id: NumberFormat::ID_GENERAL,
            alignment: Alignment::default(),
            protection: Protection::default(),
        }
    }
}

impl CellXf {
    pub fn apply_number_format(&self) -> bool {
        self.num_fmt_id != NumberFormat::ID_GENERAL
    }

    pub fn apply_font(&self) -> bool {
        self.font_id != 0
    }

    pub fn apply_fill(&self) -> bool {
        self.fill_id != 0
    }

    pub fn apply_border(&self) -> bool {
        self.border_id != 0
    }

    pub fn apply_alignment(&self) -> bool {
        self.alignment.is_customized()
    }

    pub fn apply_protection(&self) -> bool {
        self.protection != Protection::default()
    }
}

/// Ordered view of every table, in index order, ready to be written out
#[derive(Debug, Clone, Copy)]
pub struct StyleTable<'a> {
    /// Custom number formats only, as `(numFmtId, code)`
    pub number_formats: &'a [(u32, String)],
    pub fonts: &'a [Font],
    pub fills: &'a [Fill],
    pub borders: &'a [Border],
    pub cell_xfs: &'a [CellXf],
    pub dxfs: &'a [Style],
}

/// Value-keyed table: arena of entries plus a lookup from value to position
#[derive(Debug)]
struct Table<T> {
    name: &'static str,
    items: Vec<T>,
    ids: AHashMap<T, u32>,
}

impl<T: Clone + Eq + Hash> Table<T> {
    fn new(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            items: Vec::with_capacity(capacity),
            ids: AHashMap::with_capacity(capacity),
        }
    }

    /// Existing index of `value`, or append it
    fn intern(&mut self, value: &T) -> u32 {
        if let Some(&idx) = self.ids.get(value) {
            log::trace!("{} table hit: #{}", self.name, idx);
            return idx;
        }

        let idx = self.items.len() as u32;
        self.items.push(value.clone());
        self.ids.insert(value.clone(), idx);
        log::debug!("{} table: added #{}", self.name, idx);
        idx
    }
}

/// Deduplicating style tables for one document
///
/// Index 0 of the font, border and cell format tables holds the default
/// value, and the fill table starts with the `none` and `gray125` fills
/// spreadsheet applications expect, so defaults keep their index no matter
/// what is registered first. Everything else is numbered in first-seen order.
///
/// Registration takes `&mut self`; to author cells from several threads, put
/// the registry behind a `Mutex`.
#[derive(Debug)]
pub struct StyleRegistry {
    settings: RegistrySettings,
    fonts: Table<Font>,
    fills: Table<Fill>,
    borders: Table<Border>,
    /// Custom codes only; built-in formats keep their reserved id
    number_formats: Vec<(u32, String)>,
    number_format_ids: AHashMap<String, u32>,
    cell_xfs: Table<CellXf>,
    dxfs: Table<Style>,
}

impl StyleRegistry {
    /// Create a registry with default settings
    pub fn new() -> Self {
        Self::with_settings(RegistrySettings::default())
    }

    pub fn with_settings(settings: RegistrySettings) -> Self {
        let capacity = settings.initial_capacity;
        let mut registry = Self {
            fonts: Table::new("font", capacity),
            fills: Table::new("fill", capacity),
            borders: Table::new("border", capacity),
            number_formats: Vec::new(),
            number_format_ids: AHashMap::new(),
            cell_xfs: Table::new("cellXfs", capacity),
            dxfs: Table::new("dxfs", 0),
            settings,
        };

        registry.fonts.intern(&Font::default());
        registry.fills.intern(&Fill::default());
        registry.fills.intern(&Fill::gray125());
        registry.borders.intern(&Border::default());
        registry.cell_xfs.intern(&CellXf::default());

        registry
    }

    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    /// Index of `font` in the font table. The font's own `index` is ignored.
    pub fn register_font(&mut self, font: &Font) -> u32 {
        self.fonts.intern(font)
    }

    /// Index of the normalized `fill`; fills that paint nothing map to 0.
    pub fn register_fill(&mut self, fill: &Fill) -> u32 {
        let fill = fill.normalized();
        if fill == Fill::default() {
            return 0;
        }
        self.fills.intern(&fill)
    }

    /// Index of the normalized `border`; borders that draw nothing map to 0.
    pub fn register_border(&mut self, border: &Border) -> u32 {
        let border = border.normalized();
        if border.is_empty() {
            return 0;
        }
        self.borders.intern(&border)
    }

    /// `numFmtId` for `format`
    ///
    /// Built-in formats return their reserved id without creating an entry.
    /// Custom codes are numbered from [`NumberFormat::FIRST_CUSTOM_ID`]. A
    /// built-in id past the reserved range has no code to write and falls
    /// back to General.
    pub fn register_number_format(&mut self, format: &NumberFormat) -> u32 {
        let code = match format {
            NumberFormat::BuiltIn(id) if NumberFormat::is_reserved_id(*id) => return *id,
            NumberFormat::BuiltIn(id) => {
                log::warn!("numFmtId {} is not a built-in format, using General", id);
                return NumberFormat::ID_GENERAL;
            }
            NumberFormat::Custom(code) => code,
        };
        if let Some(id) = NumberFormat::builtin_id_for(code) {
            return id;
        }
        if let Some(&id) = self.number_format_ids.get(code) {
            return id;
        }

        let id = NumberFormat::FIRST_CUSTOM_ID + self.number_formats.len() as u32;
        self.number_formats.push((id, code.clone()));
        self.number_format_ids.insert(code.clone(), id);
        log::debug!("numFmt table: added #{} {:?}", id, code);
        id
    }

    /// `numFmtId` of an already known format, without registering it
    pub fn number_format_id(&self, format: &NumberFormat) -> Option<u32> {
        match format {
            NumberFormat::BuiltIn(_) => format.builtin_id(),
            NumberFormat::Custom(code) => NumberFormat::builtin_id_for(code)
                .or_else(|| self.number_format_ids.get(code).copied()),
        }
    }

    /// Register a cell style and return its `cellXfs` index.
    ///
    /// The sub-object indices and the cell format index are recorded on
    /// `style`. Fails for differential styles, and for out-of-range values
    /// when validation is strict.
    pub fn register_style(&mut self, style: &mut Style) -> Result<u32> {
        if style.is_differential() {
            return Err(Error::StyleKindMismatch {
                expected: "cell",
                actual: "differential",
            });
        }
        self.check(style)?;

        let font_id = self.register_font(&style.font);
        let fill_id = self.register_fill(&style.fill);
        let border_id = self.register_border(&style.border);
        let num_fmt_id = self.register_number_format(&style.number_format);

        let xf = CellXf {
            font_id,
            fill_id,
            border_id,
            num_fmt_id,
            alignment: style.alignment.clone(),
            protection: style.protection,
        };
        let xf_id = self.cell_xfs.intern(&xf);

        style.font.index = Some(font_id);
        style.identity = Identity {
            xf: Some(xf_id),
            dxf: None,
            fill: Some(fill_id),
            border: Some(border_id),
            num_fmt: Some(num_fmt_id),
            has_fill: fill_id != 0,
            has_border: border_id != 0,
        };
        Ok(xf_id)
    }

    /// Register a conditional formatting style and return its `dxfs` index.
    ///
    /// Differential styles live in their own table and never share entries
    /// or indices with cell styles.
    pub fn register_differential_style(&mut self, style: &mut Style) -> Result<u32> {
        if !style.is_differential() {
            return Err(Error::StyleKindMismatch {
                expected: "differential",
                actual: "cell",
            });
        }
        self.check(style)?;

        let num_fmt_id = self.register_number_format(&style.number_format);

        let mut canonical = style.clone();
        canonical.touch();
        canonical.border = canonical.border.normalized();
        let dxf_id = self.dxfs.intern(&canonical);

        style.identity = Identity {
            dxf: Some(dxf_id),
            num_fmt: Some(num_fmt_id),
            has_fill: style.fill.is_present(),
            has_border: !canonical.border.is_empty(),
            ..Identity::default()
        };
        Ok(dxf_id)
    }

    fn check(&self, style: &Style) -> Result<()> {
        match self.settings.validation {
            Validation::Permissive => Ok(()),
            Validation::Strict => style.validate(),
        }
    }

    /// Every table in index order
    pub fn emit(&self) -> StyleTable<'_> {
        StyleTable {
            number_formats: &self.number_formats,
            fonts: &self.fonts.items,
            fills: &self.fills.items,
            borders: &self.borders.items,
            cell_xfs: &self.cell_xfs.items,
            dxfs: &self.dxfs.items,
        }
    }

    pub fn fonts(&self) -> &[Font] {
        &self.fonts.items
    }

    pub fn fills(&self) -> &[Fill] {
        &self.fills.items
    }

    pub fn borders(&self) -> &[Border] {
        &self.borders.items
    }

    /// Custom number formats as `(numFmtId, code)`
    pub fn number_formats(&self) -> &[(u32, String)] {
        &self.number_formats
    }

    pub fn cell_xfs(&self) -> &[CellXf] {
        &self.cell_xfs.items
    }

    pub fn dxfs(&self) -> &[Style] {
        &self.dxfs.items
    }

    /// Cell format by `cellXfs` index
    pub fn cell_xf(&self, index: u32) -> Result<&CellXf> {
        self.cell_xfs
            .items
            .get(index as usize)
            .ok_or(Error::InvalidStyleIndex(index))
    }

    /// Differential style by `dxfs` index
    pub fn dxf(&self, index: u32) -> Result<&Style> {
        self.dxfs
            .items
            .get(index as usize)
            .ok_or(Error::InvalidStyleIndex(index))
    }

    /// Number of cell formats, including the default at index 0
    pub fn len(&self) -> usize {
        self.cell_xfs.items.len()
    }

    /// Check if nothing beyond the default cell format is registered
    pub fn is_empty(&self) -> bool {
        self.cell_xfs.items.len() <= 1
    }

    /// Drop everything except the default entries
    pub fn clear(&mut self) {
        let settings = self.settings.clone();
        *self = Self::with_settings(settings);
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! styles.xml reader

use std::collections::HashMap;
use std::io::{BufReader, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{XlsxError, XlsxResult};
use cellfmt_core::style::{
    Border, BorderEdge, BorderLineStyle, BorderSide, Color, DiagonalDirection, Fill, Font,
    FontScheme, FontScript, HorizontalAlignment, NumberFormat, PatternType, Protection, Style,
    StyleRegistry, Underline, VerticalAlignment,
};
use cellfmt_core::RegistrySettings;

/// Styles read from a stylesheet
#[derive(Debug, Clone, Default)]
pub struct ParsedStylesheet {
    /// One style per `cellXfs` entry, in file order
    pub cell_styles: Vec<Style>,
    /// One differential style per `dxfs` entry, in file order
    pub dxf_styles: Vec<Style>,
}

impl ParsedStylesheet {
    /// Register every style with a fresh registry.
    ///
    /// Duplicate entries collapse, so indices in the registry may differ
    /// from the positions in the file.
    pub fn into_registry(mut self, settings: RegistrySettings) -> XlsxResult<StyleRegistry> {
        let mut registry = StyleRegistry::with_settings(settings);
        for style in &mut self.cell_styles {
            registry.register_style(style)?;
        }
        for style in &mut self.dxf_styles {
            registry.register_differential_style(style)?;
        }
        Ok(registry)
    }
}

/// Stylesheet reader
pub struct StylesheetReader;

impl StylesheetReader {
    /// Read `styles.xml` content
    pub fn read<R: Read>(reader: R) -> XlsxResult<ParsedStylesheet> {
        let mut xml_reader = Reader::from_reader(BufReader::new(reader));
        xml_reader.trim_text(true);

        let mut parser = Parser::default();
        let mut buf = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => parser.open(&e)?,
                Ok(Event::Empty(e)) => {
                    parser.open(&e)?;
                    parser.close(e.name().as_ref())?;
                }
                Ok(Event::End(e)) => parser.close(e.name().as_ref())?,
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(parser.finish())
    }

    /// Read `styles.xml` from a string
    pub fn read_str(xml: &str) -> XlsxResult<ParsedStylesheet> {
        Self::read(xml.as_bytes())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Section {
    #[default]
    Other,
    NumFmts,
    Fonts,
    Fills,
    Borders,
    CellXfs,
    Dxfs,
}

/// Raw `<alignment>` attributes, applied to a style in one go
#[derive(Debug, Clone, Default)]
struct AlignmentAttrs {
    horizontal: Option<HorizontalAlignment>,
    vertical: Option<VerticalAlignment>,
    wrap_text: bool,
    shrink_to_fit: bool,
    indent: u32,
    rotation: i32,
}

impl AlignmentAttrs {
    fn parse(e: &BytesStart<'_>) -> XlsxResult<Self> {
        let mut attrs = AlignmentAttrs::default();
        if let Some(v) = attr_value(e, b"horizontal")? {
            attrs.horizontal = HorizontalAlignment::from_str_token(&v);
            if attrs.horizontal.is_none() {
                log::warn!("unknown horizontal alignment {:?}, using general", v);
            }
        }
        if let Some(v) = attr_value(e, b"vertical")? {
            attrs.vertical = VerticalAlignment::from_str_token(&v);
            if attrs.vertical.is_none() {
                log::warn!("unknown vertical alignment {:?}, using bottom", v);
            }
        }
        attrs.wrap_text = attr_flag(e, b"wrapText")?.unwrap_or(false);
        attrs.shrink_to_fit = attr_flag(e, b"shrinkToFit")?.unwrap_or(false);
        attrs.indent = attr_parse(e, b"indent")?.unwrap_or(0);
        attrs.rotation = decode_rotation(attr_parse(e, b"textRotation")?.unwrap_or(0));
        Ok(attrs)
    }

    /// Replay the attributes through the style setters.
    ///
    /// Horizontal alignment goes before the indent so justify keeps it;
    /// distributed goes after, since an indent would reset it to left.
    fn apply(&self, style: &mut Style) {
        if let Some(v) = self.vertical {
            style.set_vertical_alignment(v);
        }
        if self.rotation != 0 {
            style.set_rotation(self.rotation);
        }
        let horizontal = self.horizontal.unwrap_or_default();
        let distributed = horizontal == HorizontalAlignment::Distributed;
        if !distributed && horizontal != HorizontalAlignment::General {
            style.set_horizontal_alignment(horizontal);
        }
        if self.indent != 0 {
            style.set_indent(self.indent);
        }
        if distributed {
            style.set_horizontal_alignment(horizontal);
        }
        if self.wrap_text {
            style.set_text_wrap(true);
        }
        if self.shrink_to_fit {
            style.set_shrink_to_fit(true);
        }
    }
}

/// `textRotation` stores -1..=-90 as 91..=180.
pub(crate) fn decode_rotation(raw: i32) -> i32 {
    if (91..=180).contains(&raw) {
        90 - raw
    } else {
        raw
    }
}

#[derive(Debug, Clone, Default)]
struct XfRecord {
    num_fmt_id: u32,
    font_id: u32,
    fill_id: u32,
    border_id: u32,
    alignment: AlignmentAttrs,
    protection: Protection,
}

#[derive(Debug, Clone, Default)]
struct DxfRecord {
    font: Option<Font>,
    number_format: Option<NumberFormat>,
    fill: Option<Fill>,
    alignment: Option<AlignmentAttrs>,
    border: Option<Border>,
    protection: Option<Protection>,
}

impl DxfRecord {
    fn into_style(self) -> Style {
        let mut style = Style::differential();
        if let Some(font) = self.font {
            style.set_font(font);
        }
        if let Some(format) = self.number_format {
            style.set_number_format_value(format);
        }
        if let Some(fill) = self.fill {
            style.set_fill(fill);
        }
        if let Some(alignment) = self.alignment {
            alignment.apply(&mut style);
        }
        if let Some(border) = self.border {
            style.set_border(border);
        }
        if let Some(protection) = self.protection {
            style.set_locked(protection.locked);
            style.set_hidden(protection.hidden);
        }
        style
    }
}

#[derive(Debug, Clone, Default)]
struct FillRecord {
    pattern: Option<PatternType>,
    foreground: Color,
    background: Color,
}

#[derive(Debug, Default)]
struct Parser {
    section: Section,

    number_formats: HashMap<u32, String>,
    fonts: Vec<Font>,
    fills: Vec<Fill>,
    borders: Vec<Border>,
    cell_styles: Vec<Style>,
    dxf_styles: Vec<Style>,

    // Records under construction
    font: Option<Font>,
    fill: Option<FillRecord>,
    border: Option<Border>,
    edge: Option<BorderSide>,
    xf: Option<XfRecord>,
    dxf: Option<DxfRecord>,
}

impl Parser {
    fn open(&mut self, e: &BytesStart<'_>) -> XlsxResult<()> {
        match e.name().as_ref() {
            b"numFmts" => self.section = Section::NumFmts,
            b"fonts" => self.section = Section::Fonts,
            b"fills" => self.section = Section::Fills,
            b"borders" => self.section = Section::Borders,
            b"cellXfs" => self.section = Section::CellXfs,
            b"dxfs" => self.section = Section::Dxfs,
            b"cellStyleXfs" | b"cellStyles" | b"tableStyles" | b"colors" | b"extLst" => {
                self.section = Section::Other
            }

            b"numFmt" => self.open_num_fmt(e)?,

            b"dxf" if self.section == Section::Dxfs => self.dxf = Some(DxfRecord::default()),

            b"font" if self.section == Section::Fonts => self.font = Some(blank_font()),
            // Differential fonts only list what differs from the default font
            b"font" if self.dxf.is_some() => self.font = Some(Font::default()),
            b"b" | b"i" | b"strike" | b"outline" | b"shadow" | b"u" | b"vertAlign" | b"sz"
            | b"color" | b"name" | b"family" | b"charset" | b"scheme"
                if self.font.is_some() =>
            {
                self.open_font_child(e)?
            }

            b"fill" if self.section == Section::Fills || self.dxf.is_some() => {
                self.fill = Some(FillRecord::default())
            }
            b"patternFill" => {
                if let Some(fill) = self.fill.as_mut() {
                    if let Some(v) = attr_value(e, b"patternType")? {
                        fill.pattern = PatternType::from_str_token(&v);
                        if fill.pattern.is_none() {
                            log::warn!("unknown pattern type {:?}, using none", v);
                        }
                    }
                }
            }
            b"fgColor" => {
                if let Some(fill) = self.fill.as_mut() {
                    fill.foreground = parse_color(e)?;
                }
            }
            b"bgColor" => {
                if let Some(fill) = self.fill.as_mut() {
                    fill.background = parse_color(e)?;
                }
            }
            b"gradientFill" => log::warn!("gradient fills are not supported, using no fill"),

            b"border" if self.section == Section::Borders || self.dxf.is_some() => {
                let up = attr_flag(e, b"diagonalUp")?.unwrap_or(false);
                let down = attr_flag(e, b"diagonalDown")?.unwrap_or(false);
                self.border = Some(Border {
                    diagonal_direction: DiagonalDirection::from_flags(up, down),
                    ..Border::default()
                });
            }
            b"left" | b"right" | b"top" | b"bottom" | b"diagonal" | b"start" | b"end" => {
                self.open_edge(e)?
            }
            b"color" => {
                if let (Some(border), Some(side)) = (self.border.as_mut(), self.edge) {
                    border.edge_mut(side).color = parse_color(e)?;
                }
            }

            b"xf" if self.section == Section::CellXfs => {
                self.xf = Some(XfRecord {
                    num_fmt_id: attr_parse(e, b"numFmtId")?.unwrap_or(0),
                    font_id: attr_parse(e, b"fontId")?.unwrap_or(0),
                    fill_id: attr_parse(e, b"fillId")?.unwrap_or(0),
                    border_id: attr_parse(e, b"borderId")?.unwrap_or(0),
                    ..XfRecord::default()
                });
            }
            b"alignment" => {
                let attrs = AlignmentAttrs::parse(e)?;
                if let Some(xf) = self.xf.as_mut() {
                    xf.alignment = attrs;
                } else if let Some(dxf) = self.dxf.as_mut() {
                    dxf.alignment = Some(attrs);
                }
            }
            b"protection" => {
                let protection = parse_protection(e)?;
                if let Some(xf) = self.xf.as_mut() {
                    xf.protection = protection;
                } else if let Some(dxf) = self.dxf.as_mut() {
                    dxf.protection = Some(protection);
                }
            }

            _ => {}
        }
        Ok(())
    }

    fn close(&mut self, name: &[u8]) -> XlsxResult<()> {
        match name {
            b"numFmts" | b"fonts" | b"fills" | b"borders" | b"cellXfs" | b"dxfs" => {
                self.section = Section::Other
            }

            b"font" => {
                if let Some(font) = self.font.take() {
                    match self.dxf.as_mut() {
                        Some(dxf) => dxf.font = Some(font),
                        None => self.fonts.push(font),
                    }
                }
            }
            b"fill" => {
                if let Some(record) = self.fill.take() {
                    match self.dxf.as_mut() {
                        Some(dxf) => dxf.fill = Some(finish_dxf_fill(record)),
                        None => self.fills.push(finish_fill(record)),
                    }
                }
            }
            b"border" => {
                self.edge = None;
                if let Some(border) = self.border.take() {
                    match self.dxf.as_mut() {
                        Some(dxf) => dxf.border = Some(border),
                        None => self.borders.push(border),
                    }
                }
            }
            b"left" | b"right" | b"top" | b"bottom" | b"diagonal" | b"start" | b"end" => {
                self.edge = None
            }

            b"xf" => {
                if let Some(xf) = self.xf.take() {
                    let style = self.resolve_xf(xf)?;
                    self.cell_styles.push(style);
                }
            }
            b"dxf" => {
                if let Some(dxf) = self.dxf.take() {
                    self.dxf_styles.push(dxf.into_style());
                }
            }

            _ => {}
        }
        Ok(())
    }

    fn open_num_fmt(&mut self, e: &BytesStart<'_>) -> XlsxResult<()> {
        let id: Option<u32> = attr_parse(e, b"numFmtId")?;
        let code = attr_value(e, b"formatCode")?;
        match (id, code) {
            (Some(id), Some(code)) => {
                if let Some(dxf) = self.dxf.as_mut() {
                    dxf.number_format = Some(NumberFormat::from_code(code));
                } else if self.section == Section::NumFmts {
                    self.number_formats.insert(id, code);
                }
            }
            _ => log::warn!("numFmt without numFmtId or formatCode ignored"),
        }
        Ok(())
    }

    fn open_font_child(&mut self, e: &BytesStart<'_>) -> XlsxResult<()> {
        let Some(font) = self.font.as_mut() else {
            return Ok(());
        };
        match e.name().as_ref() {
            b"b" => font.bold = attr_flag(e, b"val")?.unwrap_or(true),
            b"i" => font.italic = attr_flag(e, b"val")?.unwrap_or(true),
            b"strike" => font.strikeout = attr_flag(e, b"val")?.unwrap_or(true),
            b"outline" => font.outline = attr_flag(e, b"val")?.unwrap_or(true),
            b"shadow" => font.shadow = attr_flag(e, b"val")?.unwrap_or(true),
            b"u" => {
                font.underline = match attr_value(e, b"val")? {
                    None => Underline::Single,
                    Some(v) => Underline::from_str_token(&v).unwrap_or_else(|| {
                        log::warn!("unknown underline {:?}, using single", v);
                        Underline::Single
                    }),
                }
            }
            b"vertAlign" => {
                if let Some(v) = attr_value(e, b"val")? {
                    font.script = FontScript::from_str_token(&v).unwrap_or_else(|| {
                        log::warn!("unknown vertAlign {:?}, using baseline", v);
                        FontScript::Normal
                    });
                }
            }
            b"sz" => {
                if let Some(size) = attr_parse(e, b"val")? {
                    font.size = size;
                }
            }
            b"color" => font.color = parse_color(e)?,
            b"name" => {
                if let Some(name) = attr_value(e, b"val")? {
                    font.name = name;
                }
            }
            b"family" => font.family = attr_parse(e, b"val")?,
            b"charset" => font.charset = attr_parse(e, b"val")?,
            b"scheme" => {
                if let Some(v) = attr_value(e, b"val")? {
                    font.scheme = FontScheme::from_str_token(&v).unwrap_or_else(|| {
                        log::warn!("unknown font scheme {:?}, using none", v);
                        FontScheme::None
                    });
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn open_edge(&mut self, e: &BytesStart<'_>) -> XlsxResult<()> {
        let Some(border) = self.border.as_mut() else {
            return Ok(());
        };
        let side = match e.name().as_ref() {
            b"left" | b"start" => BorderSide::Left,
            b"right" | b"end" => BorderSide::Right,
            b"top" => BorderSide::Top,
            b"bottom" => BorderSide::Bottom,
            _ => BorderSide::Diagonal,
        };
        let style = match attr_value(e, b"style")? {
            None => BorderLineStyle::None,
            Some(v) => BorderLineStyle::from_str_token(&v).unwrap_or_else(|| {
                log::warn!("unknown border style {:?}, using none", v);
                BorderLineStyle::None
            }),
        };
        *border.edge_mut(side) = BorderEdge::new(style, Color::Auto);
        self.edge = Some(side);
        Ok(())
    }

    fn resolve_xf(&self, xf: XfRecord) -> XlsxResult<Style> {
        let font = lookup(&self.fonts, xf.font_id, "font")?;
        let fill = lookup(&self.fills, xf.fill_id, "fill")?;
        let border = lookup(&self.borders, xf.border_id, "border")?;

        let mut style = Style::new();
        style.set_font(font.clone());
        style.set_fill(fill.clone());
        style.set_border(border.clone());
        style.set_number_format_value(match self.number_formats.get(&xf.num_fmt_id) {
            Some(code) => NumberFormat::from_code(code.as_str()),
            None => {
                if xf.num_fmt_id > NumberFormat::MAX_BUILTIN_ID {
                    log::warn!("numFmtId {} has no numFmt entry", xf.num_fmt_id);
                }
                NumberFormat::from_id(xf.num_fmt_id)
            }
        });
        xf.alignment.apply(&mut style);
        style.set_locked(xf.protection.locked);
        style.set_hidden(xf.protection.hidden);
        Ok(style)
    }

    fn finish(self) -> ParsedStylesheet {
        let cell_styles = if self.cell_styles.is_empty() {
            vec![Style::new()]
        } else {
            self.cell_styles
        };
        ParsedStylesheet {
            cell_styles,
            dxf_styles: self.dxf_styles,
        }
    }
}

/// Starting point for fonts of the font table, which spell out every attribute
fn blank_font() -> Font {
    Font {
        color: Color::Auto,
        family: None,
        charset: None,
        scheme: FontScheme::None,
        ..Font::default()
    }
}

fn finish_fill(record: FillRecord) -> Fill {
    Fill::pattern(
        record.pattern.unwrap_or_default(),
        record.foreground,
        record.background,
    )
}

/// A differential fill without `patternType` is solid in its `bgColor`.
fn finish_dxf_fill(record: FillRecord) -> Fill {
    match record.pattern {
        None | Some(PatternType::Solid)
            if record.foreground.is_auto() && !record.background.is_auto() =>
        {
            Fill::solid(record.background)
        }
        None if !record.foreground.is_auto() => Fill::solid(record.foreground),
        _ => finish_fill(record),
    }
}

fn lookup<'a, T>(table: &'a [T], id: u32, what: &str) -> XlsxResult<&'a T> {
    table.get(id as usize).ok_or_else(|| {
        XlsxError::Parse(format!(
            "{} id {} out of range ({} defined)",
            what,
            id,
            table.len()
        ))
    })
}

fn parse_color(e: &BytesStart<'_>) -> XlsxResult<Color> {
    if let Some(rgb) = attr_value(e, b"rgb")? {
        return Ok(Color::from_hex(&rgb).unwrap_or_else(|| {
            log::warn!("malformed rgb color {:?}, using automatic", rgb);
            Color::Auto
        }));
    }
    if let Some(index) = attr_parse::<u8>(e, b"theme")? {
        let tint: f64 = attr_parse(e, b"tint")?.unwrap_or(0.0);
        return Ok(Color::theme_tinted(index, (tint * 1000.0).round() as i16));
    }
    if let Some(index) = attr_parse(e, b"indexed")? {
        return Ok(Color::Indexed(index));
    }
    Ok(Color::Auto)
}

fn parse_protection(e: &BytesStart<'_>) -> XlsxResult<Protection> {
    let default = Protection::default();
    Ok(Protection {
        locked: attr_flag(e, b"locked")?.unwrap_or(default.locked),
        hidden: attr_flag(e, b"hidden")?.unwrap_or(default.hidden),
    })
}

fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> XlsxResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Numeric attribute; unparsable values are treated as absent.
fn attr_parse<T: std::str::FromStr>(e: &BytesStart<'_>, key: &[u8]) -> XlsxResult<Option<T>> {
    Ok(attr_value(e, key)?.and_then(|v| {
        let parsed = v.trim().parse().ok();
        if parsed.is_none() {
            log::warn!("ignoring malformed value {:?}", v);
        }
        parsed
    }))
}

/// Boolean attribute (`1`/`true` or `0`/`false`)
fn attr_flag(e: &BytesStart<'_>, key: &[u8]) -> XlsxResult<Option<bool>> {
    Ok(attr_value(e, key)?.map(|v| matches!(v.as_str(), "1" | "true")))
}

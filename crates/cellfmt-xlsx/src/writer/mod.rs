//! styles.xml writer

use std::io::Write;

use quick_xml::escape::escape;

use crate::error::XlsxResult;
use crate::SPREADSHEETML_NS;
use cellfmt_core::style::{
    Alignment, Border, BorderSide, CellXf, Color, Fill, Font, FontScheme, FontScript, PatternType,
    Protection, Style, StyleRegistry, Underline,
};

/// Stylesheet writer
///
/// Emits every table of a [`StyleRegistry`] in index order, so the indices
/// handed out at registration are the positions in the written file.
pub struct StylesheetWriter;

impl StylesheetWriter {
    /// Write the stylesheet of `registry` to a writer
    pub fn write<W: Write>(registry: &StyleRegistry, mut writer: W) -> XlsxResult<()> {
        writer.write_all(Self::to_xml(registry).as_bytes())?;
        Ok(())
    }

    /// Render the stylesheet of `registry`
    pub fn to_xml(registry: &StyleRegistry) -> String {
        let table = registry.emit();

        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(&format!("\n<styleSheet xmlns=\"{}\">", SPREADSHEETML_NS));

        if !table.number_formats.is_empty() {
            xml.push_str(&format!("\n  <numFmts count=\"{}\">", table.number_formats.len()));
            for (id, code) in table.number_formats {
                xml.push_str("\n    ");
                xml.push_str(&write_num_fmt(*id, code));
            }
            xml.push_str("\n  </numFmts>");
        }

        xml.push_str(&format!("\n  <fonts count=\"{}\">", table.fonts.len()));
        for font in table.fonts {
            xml.push_str("\n    ");
            xml.push_str(&write_font(font, false));
        }
        xml.push_str("\n  </fonts>");

        xml.push_str(&format!("\n  <fills count=\"{}\">", table.fills.len()));
        for fill in table.fills {
            xml.push_str("\n    ");
            xml.push_str(&write_fill(fill, false));
        }
        xml.push_str("\n  </fills>");

        xml.push_str(&format!("\n  <borders count=\"{}\">", table.borders.len()));
        for border in table.borders {
            xml.push_str("\n    ");
            xml.push_str(&write_border(border));
        }
        xml.push_str("\n  </borders>");

        xml.push_str(
            r#"
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
        );

        xml.push_str(&format!("\n  <cellXfs count=\"{}\">", table.cell_xfs.len()));
        for xf in table.cell_xfs {
            xml.push_str("\n    ");
            xml.push_str(&write_xf(xf));
        }
        xml.push_str("\n  </cellXfs>");

        xml.push_str(
            r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>"#,
        );

        if table.dxfs.is_empty() {
            xml.push_str("\n  <dxfs count=\"0\"/>");
        } else {
            xml.push_str(&format!("\n  <dxfs count=\"{}\">", table.dxfs.len()));
            for dxf in table.dxfs {
                xml.push_str("\n    ");
                xml.push_str(&write_dxf(dxf, registry));
            }
            xml.push_str("\n  </dxfs>");
        }

        xml.push_str(
            r#"
  <tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>"#,
        );
        xml.push_str("\n</styleSheet>");
        xml
    }
}

fn write_num_fmt(id: u32, code: &str) -> String {
    format!("<numFmt numFmtId=\"{}\" formatCode=\"{}\"/>", id, escape(code))
}

fn write_color(tag: &str, color: &Color) -> String {
    match color {
        Color::Auto => format!("<{tag} auto=\"1\"/>"),
        Color::Rgb { .. } | Color::Argb { .. } => {
            format!("<{tag} rgb=\"{}\"/>", color.to_argb_hex().unwrap_or_default())
        }
        Color::Indexed(i) => format!("<{tag} indexed=\"{}\"/>", i),
        Color::Theme { index, .. } => match color.tint() {
            Some(tint) => format!("<{tag} theme=\"{}\" tint=\"{}\"/>", index, tint),
            None => format!("<{tag} theme=\"{}\"/>", index),
        },
    }
}

/// `<font>`; differential fonts only carry what differs from the default font.
fn write_font(font: &Font, differential: bool) -> String {
    let default = Font::default();
    let mut s = String::from("<font>");
    if font.bold {
        s.push_str("<b/>");
    }
    if font.italic {
        s.push_str("<i/>");
    }
    if font.strikeout {
        s.push_str("<strike/>");
    }
    if font.outline {
        s.push_str("<outline/>");
    }
    if font.shadow {
        s.push_str("<shadow/>");
    }
    match font.underline {
        Underline::None => {}
        Underline::Single => s.push_str("<u/>"),
        other => s.push_str(&format!("<u val=\"{}\"/>", other.as_str())),
    }
    if font.script != FontScript::Normal {
        s.push_str(&format!("<vertAlign val=\"{}\"/>", font.script.as_str()));
    }
    if !differential || font.size.to_bits() != default.size.to_bits() {
        s.push_str(&format!("<sz val=\"{}\"/>", font.size));
    }
    if !differential || font.color != default.color {
        s.push_str(&write_color("color", &font.color));
    }
    if !differential || font.name != default.name {
        s.push_str(&format!("<name val=\"{}\"/>", escape(font.name.as_str())));
    }
    if !differential {
        if let Some(family) = font.family {
            s.push_str(&format!("<family val=\"{}\"/>", family));
        }
        if let Some(charset) = font.charset {
            s.push_str(&format!("<charset val=\"{}\"/>", charset));
        }
        if font.scheme != FontScheme::None {
            s.push_str(&format!("<scheme val=\"{}\"/>", font.scheme.as_str()));
        }
    }
    s.push_str("</font>");
    s
}

/// `<fill>`; a solid differential fill with one color keeps it in `bgColor`,
/// where spreadsheet applications look for it in conditional formats.
fn write_fill(fill: &Fill, differential: bool) -> String {
    let fill = fill.normalized();
    if differential && fill.pattern == PatternType::Solid && fill.background.is_auto() {
        return format!(
            "<fill><patternFill>{}</patternFill></fill>",
            write_color("bgColor", &fill.foreground)
        );
    }

    let mut colors = String::new();
    if !fill.foreground.is_auto() {
        colors.push_str(&write_color("fgColor", &fill.foreground));
    }
    if !fill.background.is_auto() {
        colors.push_str(&write_color("bgColor", &fill.background));
    }

    if colors.is_empty() {
        format!(
            "<fill><patternFill patternType=\"{}\"/></fill>",
            fill.pattern.as_str()
        )
    } else {
        format!(
            "<fill><patternFill patternType=\"{}\">{}</patternFill></fill>",
            fill.pattern.as_str(),
            colors
        )
    }
}

fn write_border(border: &Border) -> String {
    let mut s = String::from("<border");
    if border.diagonal_direction.is_up() {
        s.push_str(" diagonalUp=\"1\"");
    }
    if border.diagonal_direction.is_down() {
        s.push_str(" diagonalDown=\"1\"");
    }
    s.push('>');

    for side in BorderSide::ALL {
        let edge = border.edge(side);
        let tag = side.tag();
        if edge.is_none() {
            s.push_str(&format!("<{tag}/>"));
        } else {
            s.push_str(&format!("<{tag} style=\"{}\">", edge.style.as_str()));
            s.push_str(&write_color("color", &edge.color));
            s.push_str(&format!("</{tag}>"));
        }
    }
    s.push_str("</border>");
    s
}

/// Rotation as stored in `textRotation`: negative angles map to 91..=180.
pub(crate) fn encode_rotation(rotation: i32) -> i32 {
    if rotation < 0 {
        90 - rotation
    } else {
        rotation
    }
}

/// `<alignment>`, or an empty string when nothing differs from the default
fn write_alignment(al: &Alignment) -> String {
    if !al.is_customized() {
        return String::new();
    }

    let mut s = String::from("<alignment");
    let horizontal = al.horizontal().as_str();
    if !horizontal.is_empty() {
        s.push_str(&format!(" horizontal=\"{}\"", horizontal));
    }
    let vertical = al.vertical().as_str();
    if !vertical.is_empty() {
        s.push_str(&format!(" vertical=\"{}\"", vertical));
    }
    if al.rotation() != 0 {
        s.push_str(&format!(" textRotation=\"{}\"", encode_rotation(al.rotation())));
    }
    if al.wrap_text() {
        s.push_str(" wrapText=\"1\"");
    }
    if al.indent() != 0 {
        s.push_str(&format!(" indent=\"{}\"", al.indent()));
    }
    if al.shrink_to_fit() {
        s.push_str(" shrinkToFit=\"1\"");
    }
    s.push_str("/>");
    s
}

fn write_protection(p: &Protection) -> String {
    let default = Protection::default();
    if *p == default {
        return String::new();
    }
    let mut s = String::from("<protection");
    if p.locked != default.locked {
        s.push_str(&format!(" locked=\"{}\"", u8::from(p.locked)));
    }
    if p.hidden != default.hidden {
        s.push_str(&format!(" hidden=\"{}\"", u8::from(p.hidden)));
    }
    s.push_str("/>");
    s
}

fn write_xf(xf: &CellXf) -> String {
    let mut s = format!(
        "<xf numFmtId=\"{}\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\" xfId=\"0\"",
        xf.num_fmt_id, xf.font_id, xf.fill_id, xf.border_id
    );
    if xf.apply_number_format() {
        s.push_str(" applyNumberFormat=\"1\"");
    }
    if xf.apply_font() {
        s.push_str(" applyFont=\"1\"");
    }
    if xf.apply_fill() {
        s.push_str(" applyFill=\"1\"");
    }
    if xf.apply_border() {
        s.push_str(" applyBorder=\"1\"");
    }
    if xf.apply_alignment() {
        s.push_str(" applyAlignment=\"1\"");
    }
    if xf.apply_protection() {
        s.push_str(" applyProtection=\"1\"");
    }

    let children = write_alignment(&xf.alignment) + &write_protection(&xf.protection);
    if children.is_empty() {
        s.push_str("/>");
    } else {
        s.push('>');
        s.push_str(&children);
        s.push_str("</xf>");
    }
    s
}

/// `<dxf>` with only the parts that differ from an unformatted cell
fn write_dxf(style: &Style, registry: &StyleRegistry) -> String {
    let mut s = String::from("<dxf>");

    if !style.font().is_default() {
        s.push_str(&write_font(style.font(), true));
    }

    let format = style.number_format();
    if !format.is_general() {
        match (registry.number_format_id(format), format.code()) {
            (Some(id), Some(code)) => s.push_str(&write_num_fmt(id, code)),
            _ => log::warn!("dxf number format {:?} has no code; omitted", format),
        }
    }

    if style.fill().is_present() {
        s.push_str(&write_fill(style.fill(), true));
    }

    s.push_str(&write_alignment(style.alignment()));

    if !style.border().is_empty() {
        s.push_str(&write_border(style.border()));
    }

    s.push_str(&write_protection(&style.protection()));
    s.push_str("</dxf>");
    s
}

//! End-to-end tests for stylesheet roundtrip (register -> write -> read -> verify styles)

use cellfmt::prelude::*;
use cellfmt::{FontScript, ParsedStylesheet};
use pretty_assertions::assert_eq;

fn roundtrip(registry: &StyleRegistry) -> ParsedStylesheet {
    let xml = StylesheetWriter::to_xml(registry);
    StylesheetReader::read_str(&xml).unwrap()
}

/// Register `styles`, write them out, read them back and compare each one.
fn assert_cell_styles_survive(mut styles: Vec<Style>) {
    let mut registry = StyleRegistry::new();
    let ids: Vec<u32> = styles
        .iter_mut()
        .map(|style| registry.register_style(style).unwrap())
        .collect();

    let parsed = roundtrip(&registry);
    assert_eq!(parsed.cell_styles.len(), registry.cell_xfs().len());
    for (style, id) in styles.iter().zip(ids) {
        assert_eq!(&parsed.cell_styles[id as usize], style);
    }
}

/// Test basic font styling roundtrip
#[test]
fn test_roundtrip_font_styles() {
    let mut superscript = Style::new().with_font_name("Times New Roman");
    superscript.set_font_script(FontScript::Superscript);
    superscript.set_font_underline(Underline::DoubleAccounting);

    let mut decorated = Style::new().with_font_size(9.5);
    decorated.set_font_strikeout(true);
    decorated.set_font_outline(true);
    decorated.set_font_shadow(true);

    assert_cell_styles_survive(vec![
        Style::new().with_bold(true).with_font_color(Color::RED),
        Style::new().with_italic(true).with_font_size(14.0).with_font_name("Arial"),
        Style::new().with_font_color(Color::theme_tinted(4, 400)),
        Style::new().with_font_color(Color::Indexed(10)),
        Style::new().with_font_color(Color::argb(0x80, 0x12, 0x34, 0x56)),
        Style::new().with_font_name("R&D <draft>"),
        superscript,
        decorated,
    ]);
}

/// Test border styling roundtrip
#[test]
fn test_roundtrip_border_styles() {
    let mut mixed = Border::outline(BorderLineStyle::Thin, Color::BLACK);
    mixed.right = BorderEdge::new(BorderLineStyle::MediumDashDot, Color::RED);
    mixed.diagonal = BorderEdge::new(BorderLineStyle::Hair, Color::theme(5));
    mixed.diagonal_direction = DiagonalDirection::Up;

    assert_cell_styles_survive(vec![
        Style::new().with_border(Border::outline(BorderLineStyle::Thin, Color::BLACK)),
        Style::new().with_border(mixed),
        Style::new().with_border(Border::new().with_edge(
            BorderSide::Bottom,
            BorderLineStyle::Double,
            Color::Auto,
        )),
    ]);
}

/// Test fill roundtrip, including pattern fills with both colors
#[test]
fn test_roundtrip_fill_styles() {
    assert_cell_styles_survive(vec![
        Style::new().with_fill_color(Color::YELLOW),
        Style::new().with_fill_color(Color::theme_tinted(3, -500)),
        Style::new().with_border(Border::new()).with_fill_color(Color::Indexed(22)),
        {
            let mut style = Style::new();
            style.set_fill(Fill::pattern(
                PatternType::DarkTrellis,
                Color::BLUE,
                Color::WHITE,
            ));
            style
        },
    ]);
}

#[test]
fn test_roundtrip_alignment() {
    let mut rotated = Style::new().with_vertical(VerticalAlignment::Center);
    rotated.set_rotation(-45);

    let mut vertical_text = Style::new();
    vertical_text.set_rotation(Alignment::VERTICAL_TEXT);

    let mut justified = Style::new().with_horizontal(HorizontalAlignment::Justify);
    justified.set_indent(3);

    let mut distributed = Style::new();
    distributed.set_indent(2);
    distributed.set_horizontal_alignment(HorizontalAlignment::Distributed);

    let mut shrunk = Style::new().with_horizontal(HorizontalAlignment::Right);
    shrunk.set_shrink_to_fit(true);

    let mut indented = Style::new();
    indented.set_indent(4);

    assert_cell_styles_survive(vec![
        rotated,
        vertical_text,
        justified,
        distributed,
        shrunk,
        indented,
        Style::new()
            .with_horizontal(HorizontalAlignment::CenterContinuous)
            .with_wrap(true),
        Style::new().with_vertical(VerticalAlignment::Distributed),
    ]);
}

#[test]
fn test_negative_rotation_on_the_wire() {
    let mut registry = StyleRegistry::new();
    let mut style = Style::new();
    style.set_rotation(-45);
    let xf = registry.register_style(&mut style).unwrap();

    let xml = StylesheetWriter::to_xml(&registry);
    assert!(xml.contains("textRotation=\"135\""));

    let parsed = StylesheetReader::read_str(&xml).unwrap();
    assert_eq!(parsed.cell_styles[xf as usize].rotation(), -45);
}

#[test]
fn test_default_alignment_not_written() {
    let mut registry = StyleRegistry::new();
    let mut style = Style::new().with_bold(true).with_number_format("0.00");
    registry.register_style(&mut style).unwrap();

    let xml = StylesheetWriter::to_xml(&registry);
    assert!(!xml.contains("<alignment"));
    assert!(!xml.contains("applyAlignment"));
}

#[test]
fn test_roundtrip_number_formats() {
    let mut registry = StyleRegistry::new();
    let mut percent = Style::new().with_number_format("0.00%");
    let mut money = Style::new().with_number_format("\"$\"#,##0.00");
    let mut date = Style::new().with_number_format("yyyy-mm-dd");
    registry.register_style(&mut percent).unwrap();
    registry.register_style(&mut money).unwrap();
    registry.register_style(&mut date).unwrap();

    assert_eq!(percent.number_format_index(), Some(NumberFormat::ID_PERCENT_DEC2));
    assert_eq!(money.number_format_index(), Some(164));
    assert_eq!(date.number_format_index(), Some(165));

    let xml = StylesheetWriter::to_xml(&registry);
    assert!(xml.contains("<numFmts count=\"2\">"));
    assert!(xml.contains("formatCode=\"&quot;$&quot;#,##0.00\""));
    assert!(!xml.contains("formatCode=\"0.00%\""));

    let parsed = StylesheetReader::read_str(&xml).unwrap();
    assert_eq!(
        parsed.cell_styles[1].number_format(),
        &NumberFormat::BuiltIn(NumberFormat::ID_PERCENT_DEC2)
    );
    assert_eq!(parsed.cell_styles[2], money);
    assert_eq!(parsed.cell_styles[3], date);
}

#[test]
fn test_number_format_ids_and_custom_codes() {
    let mut registry = StyleRegistry::new();
    let mut custom = Style::new().with_number_format("0.000");
    let mut next_id = Style::new();
    next_id.set_number_format_id(NumberFormat::FIRST_CUSTOM_ID);
    let mut unknown = Style::new().with_bold(true);
    unknown.set_number_format_id(200);
    let mut text = Style::new();
    text.set_number_format_id(NumberFormat::ID_TEXT);

    let custom_xf = registry.register_style(&mut custom).unwrap();
    let next_id_xf = registry.register_style(&mut next_id).unwrap();
    registry.register_style(&mut unknown).unwrap();
    let text_xf = registry.register_style(&mut text).unwrap();
    assert_ne!(custom_xf, next_id_xf);

    let xml = StylesheetWriter::to_xml(&registry);
    assert!(xml.contains("<numFmts count=\"1\">"));
    assert!(!xml.contains("numFmtId=\"200\""));
    assert_eq!(xml.matches("numFmtId=\"164\"").count(), 2);

    let parsed = StylesheetReader::read_str(&xml).unwrap();
    assert_eq!(
        parsed.cell_styles[custom_xf as usize].number_format(),
        &NumberFormat::Custom("0.000".to_string())
    );
    assert!(parsed.cell_styles[next_id_xf as usize].number_format().is_general());
    assert_eq!(
        parsed.cell_styles[text_xf as usize].number_format(),
        &NumberFormat::BuiltIn(NumberFormat::ID_TEXT)
    );
}

#[test]
fn test_roundtrip_protection() {
    let mut hidden = Style::new();
    hidden.set_hidden(true);
    let mut unlocked = Style::new();
    unlocked.set_locked(false);

    assert_cell_styles_survive(vec![hidden, unlocked]);
}

#[test]
fn test_roundtrip_differential_styles() {
    let mut registry = StyleRegistry::new();

    let mut cell = Style::new().with_fill_color(Color::rgb(0xFF, 0xC7, 0xCE));
    let mut bad = Style::differential()
        .with_font_color(Color::rgb(0x9C, 0x00, 0x06))
        .with_fill_color(Color::rgb(0xFF, 0xC7, 0xCE));
    let mut good = Style::differential()
        .with_bold(true)
        .with_number_format("0.0%")
        .with_border(Border::outline(BorderLineStyle::Thin, Color::GREEN));
    good.set_font_underline(Underline::Single);

    let xf = registry.register_style(&mut cell).unwrap();
    let bad_id = registry.register_differential_style(&mut bad).unwrap();
    let good_id = registry.register_differential_style(&mut good).unwrap();
    assert_eq!((xf, bad_id, good_id), (1, 0, 1));

    let parsed = roundtrip(&registry);
    assert_eq!(parsed.cell_styles.len(), 2);
    assert_eq!(parsed.dxf_styles.len(), 2);
    assert_eq!(parsed.dxf_styles[0], bad);
    assert_eq!(parsed.dxf_styles[1], good);
    assert_eq!(parsed.cell_styles[1], cell);
}

#[test]
fn test_roundtrip_differential_two_color_fill() {
    let mut registry = StyleRegistry::new();
    let mut dxf = Style::differential();
    dxf.set_fill(Fill::pattern(PatternType::Solid, Color::RED, Color::BLUE));
    let mut single = Style::differential().with_fill_color(Color::GREEN);
    registry.register_differential_style(&mut dxf).unwrap();
    registry.register_differential_style(&mut single).unwrap();

    let parsed = roundtrip(&registry);
    assert_eq!(parsed.dxf_styles[0].fill().background, Color::BLUE);
    assert_eq!(parsed.dxf_styles[0], dxf);
    assert_eq!(parsed.dxf_styles[1], single);
}

#[test]
fn test_colored_edges_without_line_write_no_border() {
    let mut registry = StyleRegistry::new();
    let mut style = Style::new().with_italic(true);
    style.set_border_edge(
        BorderSide::Bottom,
        BorderEdge::new(BorderLineStyle::None, Color::RED),
    );
    registry.register_style(&mut style).unwrap();

    let xml = StylesheetWriter::to_xml(&registry);
    assert!(xml.contains("<borders count=\"1\">"));
    assert!(!xml.contains("applyBorder"));

    let parsed = StylesheetReader::read_str(&xml).unwrap();
    assert_eq!(parsed.cell_styles[1].border(), &Border::new());
}

#[test]
fn test_reread_registry_writes_identical_stylesheet() {
    let mut registry = StyleRegistry::new();
    let mut styles = vec![
        Style::new().with_bold(true),
        Style::new().with_number_format("0.000").with_wrap(true),
        Style::new().with_fill_color(Color::GREEN).with_bold(true),
        Style::new().with_border(Border::outline(BorderLineStyle::Medium, Color::BLUE)),
        Style::new().with_bold(true),
    ];
    for style in &mut styles {
        registry.register_style(style).unwrap();
    }
    let mut dxf = Style::differential().with_italic(true);
    registry.register_differential_style(&mut dxf).unwrap();

    let xml = StylesheetWriter::to_xml(&registry);
    let reread = StylesheetReader::read_str(&xml)
        .unwrap()
        .into_registry(RegistrySettings::default())
        .unwrap();

    assert_eq!(reread.cell_xfs().len(), registry.cell_xfs().len());
    assert_eq!(StylesheetWriter::to_xml(&reread), xml);
}

#[test]
fn test_strict_registry_rejects_stylesheet_values() {
    let mut registry = StyleRegistry::new();
    let mut style = Style::new().with_font_size(500.0);
    registry.register_style(&mut style).unwrap();

    let parsed = roundtrip(&registry);
    let err = parsed.into_registry(RegistrySettings::strict()).unwrap_err();
    assert!(matches!(
        err,
        XlsxError::Core(Error::InvalidRange {
            field: "font size",
            ..
        })
    ));
}

#[test]
fn test_save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("styles.xml");

    let mut registry = StyleRegistry::new();
    let mut style = Style::new()
        .with_bold(true)
        .with_horizontal(HorizontalAlignment::Center);
    registry.register_style(&mut style).unwrap();
    registry.save(&path).unwrap();

    let opened = StyleRegistry::open(&path, RegistrySettings::default()).unwrap();
    assert_eq!(opened.cell_xfs(), registry.cell_xfs());
    assert_eq!(opened.fonts(), registry.fonts());
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = StyleRegistry::open(dir.path().join("missing.xml"), RegistrySettings::default());
    assert!(matches!(result, Err(XlsxError::Io(_))));
}

//! Example: Build a small style set and write it as styles.xml

use cellfmt::prelude::*;

fn main() -> std::result::Result<(), XlsxError> {
    let mut registry = StyleRegistry::with_settings(RegistrySettings::strict());

    // Header row: bold, centered, light blue fill, thin outline
    let mut header = Style::new()
        .with_bold(true)
        .with_fill_color(Color::rgb(0xDD, 0xEB, 0xF7))
        .with_horizontal(HorizontalAlignment::Center)
        .with_border(Border::outline(BorderLineStyle::Thin, Color::BLACK));

    // Amounts: two decimals with thousands separator, indented
    let mut amount = Style::new().with_number_format("#,##0.00");
    amount.set_indent(1);

    // Account codes stay text
    let mut code = Style::new();
    code.set_number_format_id(NumberFormat::ID_TEXT);

    // Rotated labels
    let mut label = Style::new().with_italic(true);
    label.set_rotation(-45);

    // Conditional format for negative amounts
    let mut negative = Style::differential()
        .with_font_color(Color::rgb(0x9C, 0x00, 0x06))
        .with_fill_color(Color::rgb(0xFF, 0xC7, 0xCE));

    for style in [&mut header, &mut amount, &mut code, &mut label] {
        let xf = registry.register_style(style)?;
        println!("cellXfs[{}]", xf);
    }
    let dxf = registry.register_differential_style(&mut negative)?;
    println!("dxfs[{}]", dxf);

    let path = std::env::temp_dir().join("cellfmt-styles.xml");
    registry.save(&path)?;
    println!("Wrote {}", path.display());

    let reread = StyleRegistry::open(&path, RegistrySettings::default())?;
    println!(
        "Read back {} cell formats, {} fonts, {} fills",
        reread.cell_xfs().len(),
        reread.fonts().len(),
        reread.fills().len()
    );

    Ok(())
}

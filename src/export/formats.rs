//! Text format emitters, one function per target.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::color::Color;

use super::contrasting_text_color;

/// The JSON export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteDocument {
    /// Palette display name.
    pub name: String,
    /// Ordered color sequence.
    pub colors: Vec<Color>,
    /// Export metadata.
    pub metadata: DocumentMetadata,
}

/// Metadata block of a [`PaletteDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// RFC 3339 generation timestamp.
    pub generated: String,
    /// Color encoding; always `"hex"`.
    pub format: String,
}

fn generation_date() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}

/// Kebab-case a palette name for use as a variable prefix.
fn kebab(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// CSS custom-property block.
#[must_use]
pub fn to_css(colors: &[Color], name: Option<&str>) -> String {
    let prefix = name.map_or_else(|| "color".to_owned(), kebab);
    let title = name.unwrap_or("Color Palette");

    let mut css = format!("/* {title} */\n/* Generated on {} */\n\n", generation_date());
    for (index, color) in colors.iter().enumerate() {
        css.push_str(&format!("--{prefix}-{}: {color};\n", index + 1));
    }
    css.push_str("\n/* Usage example: */\n");
    css.push_str(&format!("/* background-color: var(--{prefix}-1); */\n"));
    css
}

/// SCSS variable block.
#[must_use]
pub fn to_scss(colors: &[Color], name: Option<&str>) -> String {
    let prefix = name.map_or_else(|| "color".to_owned(), kebab);
    let title = name.unwrap_or("Color Palette");

    let mut scss = format!("// {title}\n// Generated on {}\n\n", generation_date());
    for (index, color) in colors.iter().enumerate() {
        scss.push_str(&format!("${prefix}-{}: {color};\n", index + 1));
    }
    scss.push_str("\n// Usage example:\n");
    scss.push_str(&format!("// background-color: ${prefix}-1;\n"));
    scss
}

/// Tailwind `module.exports` theme-extension snippet.
#[must_use]
pub fn to_tailwind(colors: &[Color], name: Option<&str>) -> String {
    let prefix = name.map_or_else(|| "palette".to_owned(), kebab);
    let title = name.unwrap_or("Color Palette");

    let mut config = format!(
        "// tailwind.config.js\n// {title}\n// Generated on {}\n\n",
        generation_date()
    );
    config.push_str("module.exports = {\n");
    config.push_str("  theme: {\n");
    config.push_str("    extend: {\n");
    config.push_str("      colors: {\n");
    config.push_str(&format!("        '{prefix}': {{\n"));
    for (index, color) in colors.iter().enumerate() {
        config.push_str(&format!("          '{}': '{color}',\n", index + 1));
    }
    config.push_str("        },\n");
    config.push_str("      },\n");
    config.push_str("    },\n");
    config.push_str("  },\n");
    config.push_str("}\n");
    config
}

/// Structured JSON document; parsing it back reproduces the color sequence
/// exactly.
pub fn to_json(colors: &[Color], name: Option<&str>) -> serde_json::Result<String> {
    let document = PaletteDocument {
        name: name.unwrap_or("Untitled Palette").to_owned(),
        colors: colors.to_vec(),
        metadata: DocumentMetadata {
            generated: generation_date(),
            format: "hex".into(),
        },
    };
    serde_json::to_string_pretty(&document)
}

/// SVG swatch strip: one 100x100 rect per color with a centered hex label.
#[must_use]
pub fn to_svg(colors: &[Color], name: Option<&str>) -> String {
    const SWATCH: usize = 100;
    let width = colors.len() * SWATCH;
    let title = name.unwrap_or("Color Palette");

    let mut svg = format!(
        "<svg width=\"{width}\" height=\"{SWATCH}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    );
    svg.push_str(&format!("<title>{title}</title>\n"));
    svg.push_str(&format!(
        "<desc>Color palette generated on {}</desc>\n",
        generation_date()
    ));
    for (index, color) in colors.iter().enumerate() {
        let x = index * SWATCH;
        svg.push_str(&format!(
            "<rect x=\"{x}\" y=\"0\" width=\"{SWATCH}\" height=\"{SWATCH}\" fill=\"{color}\" />\n"
        ));
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"50\" text-anchor=\"middle\" fill=\"white\" font-family=\"Arial\" font-size=\"12\">{color}</text>\n",
            x + SWATCH / 2
        ));
    }
    svg.push_str("</svg>");
    svg
}

/// CSS class block with one `.color-N` rule per swatch, choosing a readable
/// text color for each background.
#[must_use]
pub fn css_classes(colors: &[Color]) -> String {
    let mut css = String::from(
        ".color-palette {\n  display: flex;\n  flex-wrap: wrap;\n  gap: 10px;\n}\n\n",
    );
    for (index, color) in colors.iter().enumerate() {
        css.push_str(&format!(".color-{} {{\n", index + 1));
        css.push_str(&format!("  background-color: {color};\n"));
        css.push_str(&format!("  color: {};\n", contrasting_text_color(*color)));
        css.push_str("}\n\n");
    }
    css
}

//! Palette exporters: text formats, shareable links, and file output.
//!
//! Every emitter is a pure string builder; the only non-determinism is the
//! embedded generation timestamp.

/// Text format emitters.
pub mod formats;
/// Writing exports to disk.
pub mod io;
/// Shareable-link payload encoding.
pub mod share;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::color::Color;

/// Error raised when an export format id is not recognized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown export format {0:?}")]
pub struct UnknownFormat(pub String);

/// Supported export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// CSS custom-property block.
    Css,
    /// SCSS variable block.
    Scss,
    /// Tailwind theme-extension snippet.
    Tailwind,
    /// Structured JSON document.
    Json,
    /// SVG swatch strip.
    Svg,
}

impl ExportFormat {
    /// Every format, in catalog order.
    pub const ALL: [Self; 5] = [Self::Css, Self::Scss, Self::Tailwind, Self::Json, Self::Svg];

    /// Stable machine-readable id.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
            Self::Svg => "svg",
        }
    }

    /// Display name for catalogs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS Variables",
            Self::Scss => "SCSS Variables",
            Self::Tailwind => "Tailwind Config",
            Self::Json => "JSON",
            Self::Svg => "SVG Palette",
        }
    }

    /// File extension for downloads, dot included.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => ".css",
            Self::Scss => ".scss",
            Self::Tailwind => ".js",
            Self::Json => ".json",
            Self::Svg => ".svg",
        }
    }

    /// Render a palette in this format.
    ///
    /// Only the JSON arm can fail (serialization); every other arm is
    /// infallible string building.
    pub fn render(self, colors: &[Color], name: Option<&str>) -> serde_json::Result<String> {
        match self {
            Self::Css => Ok(formats::to_css(colors, name)),
            Self::Scss => Ok(formats::to_scss(colors, name)),
            Self::Tailwind => Ok(formats::to_tailwind(colors, name)),
            Self::Json => formats::to_json(colors, name),
            Self::Svg => Ok(formats::to_svg(colors, name)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.id() == s)
            .ok_or_else(|| UnknownFormat(s.to_owned()))
    }
}

/// Pick black or white text for a swatch background.
///
/// Uses the quick luma heuristic `0.299 R + 0.587 G + 0.114 B` (normalized,
/// split at 0.5), not the WCAG relative luminance used for compliance
/// scoring in [`crate::accessibility`].
#[must_use]
pub fn contrasting_text_color(color: Color) -> Color {
    let (r, g, b) = color.rgb();
    let luma = (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
    if luma > 0.5 { Color::BLACK } else { Color::WHITE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_ids_parse_back() {
        for format in ExportFormat::ALL {
            assert_eq!(format.id().parse::<ExportFormat>(), Ok(format));
        }
        assert!("yaml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn text_color_flips_at_the_luma_threshold() {
        assert_eq!(contrasting_text_color(Color::WHITE), Color::BLACK);
        assert_eq!(contrasting_text_color(Color::BLACK), Color::WHITE);
        // Pure green reads as light, pure blue as dark.
        assert_eq!(
            contrasting_text_color("#00FF00".parse().unwrap()),
            Color::BLACK
        );
        assert_eq!(
            contrasting_text_color("#0000FF".parse().unwrap()),
            Color::WHITE
        );
    }
}

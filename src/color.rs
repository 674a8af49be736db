//! Color value type and colorspace conversions.
//!
//! A [`Color`] is a 24-bit sRGB value, canonically written as a `#RRGGBB` hex
//! string. HSL and RGB views are derived on demand rather than stored, so the
//! representations can never diverge.

use std::fmt;
use std::str::FromStr;

use palette::{Clamp, FromColor, Hsl as HslModel, Srgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error raised when a hex color string cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid color format {input:?}: expected 6 hex digits, optionally #-prefixed")]
pub struct ColorParseError {
    /// The rejected input, verbatim.
    pub input: String,
}

/// A 24-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

/// HSL view of a [`Color`]: hue in degrees `[0, 360)`, saturation and
/// lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, `[0, 360)`.
    pub h: f32,
    /// Saturation in percent, `[0, 100]`.
    pub s: f32,
    /// Lightness in percent, `[0, 100]`.
    pub l: f32,
}

impl Color {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    /// Pure white, `#FFFFFF`.
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Build a color from its three 8-bit channels.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The `(r, g, b)` channel triple.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Derive the HSL view of this color.
    #[must_use]
    pub fn hsl(self) -> Hsl {
        let srgb: Srgb = Srgb::new(self.r, self.g, self.b).into_format();
        let model = HslModel::from_color(srgb);
        Hsl {
            h: model.hue.into_positive_degrees() % 360.0,
            s: model.saturation * 100.0,
            l: model.lightness * 100.0,
        }
    }

    /// Build a color from an HSL triple, clamping back into the sRGB gamut.
    ///
    /// The hue wraps into `[0, 360)`; saturation and lightness are clamped to
    /// `[0, 100]` before conversion.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let model = HslModel::new_srgb(
            hsl.h.rem_euclid(360.0),
            hsl.s.clamp(0.0, 100.0) / 100.0,
            hsl.l.clamp(0.0, 100.0) / 100.0,
        );
        let srgb = Srgb::from_color(model).clamp().into_format::<u8>();
        Self::from_rgb(srgb.red, srgb.green, srgb.blue)
    }

    /// Rotate the hue by `degrees` (may be negative), keeping saturation and
    /// lightness. The result wraps into `[0, 360)`.
    #[must_use]
    pub fn rotate_hue(self, degrees: f32) -> Self {
        let hsl = self.hsl();
        Self::from_hsl(Hsl {
            h: (hsl.h + degrees).rem_euclid(360.0),
            ..hsl
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError {
                input: s.to_owned(),
            });
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| ColorParseError {
            input: s.to_owned(),
        })?;
        Ok(Self::from_rgb(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

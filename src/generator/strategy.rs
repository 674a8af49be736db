//! Palette generation strategy catalog.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error raised when a strategy id is not recognized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown palette strategy {0:?}")]
pub struct UnknownStrategy(pub String);

/// How a palette derives its colors from the base color.
///
/// All hue-offset strategies keep the base saturation and lightness and vary
/// only the hue; monochromatic keeps the hue and varies lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Neighbouring hues, 30 degrees apart.
    Analogous,
    /// Same hue, stepped lightness.
    Monochromatic,
    /// Three hues 120 degrees apart.
    Triadic,
    /// The base and its opposite hue.
    Complementary,
    /// The base plus the two hues flanking its opposite.
    SplitComplementary,
    /// Two complementary pairs.
    Tetradic,
    /// Four hues 90 degrees apart.
    Square,
}

impl Strategy {
    /// Every strategy, in catalog order.
    pub const ALL: [Self; 7] = [
        Self::Analogous,
        Self::Monochromatic,
        Self::Triadic,
        Self::Complementary,
        Self::SplitComplementary,
        Self::Tetradic,
        Self::Square,
    ];

    /// Stable machine-readable id.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Monochromatic => "monochromatic",
            Self::Triadic => "triadic",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Tetradic => "tetradic",
            Self::Square => "square",
        }
    }

    /// Display name for catalogs and previews.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Analogous => "Analogous",
            Self::Monochromatic => "Monochromatic",
            Self::Triadic => "Triadic",
            Self::Complementary => "Complementary",
            Self::SplitComplementary => "Split complementary",
            Self::Tetradic => "Tetradic",
            Self::Square => "Square",
        }
    }

    /// One-line description of the strategy.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Analogous => "Colors adjacent on the color wheel",
            Self::Monochromatic => "Shades of a single color",
            Self::Triadic => "Three evenly spaced colors",
            Self::Complementary => "Opposite colors",
            Self::SplitComplementary => "The base color and two neighbours of its opposite",
            Self::Tetradic => "Two complementary color pairs",
            Self::Square => "Four evenly spaced colors",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.id() == s)
            .ok_or_else(|| UnknownStrategy(s.to_owned()))
    }
}

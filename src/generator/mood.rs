//! Mood transforms: named saturation/lightness remaps applied uniformly
//! across a palette.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::color::Hsl;

/// Error raised when a mood id is not recognized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown mood {0:?}")]
pub struct UnknownMood(pub String);

/// A deterministic saturation/lightness remap. Hue is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    /// Soft, muted tones.
    Calm,
    /// Bright, highly saturated colors.
    Energetic,
    /// Subdued, business-like colors.
    Professional,
    /// Maximum saturation at mid lightness.
    Vibrant,
    /// Light, delicate tones.
    Pastel,
    /// Deep, dark shades.
    Dark,
}

impl Mood {
    /// Every mood, in catalog order.
    pub const ALL: [Self; 6] = [
        Self::Calm,
        Self::Energetic,
        Self::Professional,
        Self::Vibrant,
        Self::Pastel,
        Self::Dark,
    ];

    /// Stable machine-readable id.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Energetic => "energetic",
            Self::Professional => "professional",
            Self::Vibrant => "vibrant",
            Self::Pastel => "pastel",
            Self::Dark => "dark",
        }
    }

    /// Display name for catalogs and previews.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calm => "Calm",
            Self::Energetic => "Energetic",
            Self::Professional => "Professional",
            Self::Vibrant => "Vibrant",
            Self::Pastel => "Pastel",
            Self::Dark => "Dark",
        }
    }

    /// One-line description of the mood.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Calm => "Soft, pastel tones",
            Self::Energetic => "Bright, saturated colors",
            Self::Professional => "Muted, business-like colors",
            Self::Vibrant => "Contrasting, lively colors",
            Self::Pastel => "Light, delicate tones",
            Self::Dark => "Deep, dark shades",
        }
    }

    /// Apply the remap to one HSL triple.
    #[must_use]
    pub fn remap(self, hsl: Hsl) -> Hsl {
        let Hsl { h, s, l } = hsl;
        match self {
            Self::Calm => Hsl {
                h,
                s: (s - 30.0).max(30.0),
                l: (l + 10.0).min(80.0),
            },
            Self::Energetic => Hsl {
                h,
                s: (s + 30.0).min(100.0),
                l,
            },
            Self::Professional => Hsl {
                h,
                s: (s - 20.0).max(20.0),
                l: l.clamp(30.0, 60.0),
            },
            Self::Vibrant => Hsl { h, s: 100.0, l: 50.0 },
            Self::Pastel => Hsl {
                h,
                s: (s - 40.0).max(20.0),
                l: (l + 20.0).min(85.0),
            },
            Self::Dark => Hsl {
                h,
                s,
                l: (l - 30.0).max(20.0),
            },
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mood| mood.id() == s)
            .ok_or_else(|| UnknownMood(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_parses_back() {
        for mood in Mood::ALL {
            assert_eq!(mood.id().parse::<Mood>(), Ok(mood));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert!("moody".parse::<Mood>().is_err());
    }

    #[test]
    fn vibrant_forces_full_saturation_mid_lightness() {
        let out = Mood::Vibrant.remap(Hsl { h: 42.0, s: 13.0, l: 87.0 });
        assert_eq!((out.s, out.l), (100.0, 50.0));
        assert_eq!(out.h, 42.0);
    }

    #[test]
    fn pastel_respects_floor_and_cap() {
        let out = Mood::Pastel.remap(Hsl { h: 0.0, s: 50.0, l: 80.0 });
        assert_eq!(out.s, 20.0); // floor at 20, not 10
        assert_eq!(out.l, 85.0); // capped at 85, not 100
    }

    #[test]
    fn professional_clamps_lightness_band() {
        let dark = Mood::Professional.remap(Hsl { h: 0.0, s: 90.0, l: 10.0 });
        assert_eq!(dark.l, 30.0);
        let light = Mood::Professional.remap(Hsl { h: 0.0, s: 90.0, l: 95.0 });
        assert_eq!(light.l, 60.0);
    }

    #[test]
    fn dark_never_drops_below_twenty() {
        let out = Mood::Dark.remap(Hsl { h: 200.0, s: 40.0, l: 25.0 });
        assert_eq!(out.l, 20.0);
    }
}

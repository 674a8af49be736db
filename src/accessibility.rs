//! WCAG contrast scoring for palettes.
//!
//! Relative luminance and contrast ratio follow WCAG 2.1 exactly: sRGB
//! channels are linearized with the standard piecewise gamma curve, then
//! weighted 0.2126 / 0.7152 / 0.0722. Levels are inclusive lower bounds on
//! the ratio: 7.0 for AAA, 4.5 for AA, 3.0 for A.

use crate::color::Color;

/// Below this normalized channel value the sRGB curve is linear.
const LINEAR_THRESHOLD: f64 = 0.03928;

/// Relative luminance of a color per WCAG 2.1, in `[0.0, 1.0]`.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.rgb();
    let linearize = |channel: u8| {
        let c = f64::from(channel) / 255.0;
        if c <= LINEAR_THRESHOLD {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// WCAG contrast ratio between two colors, in `[1.0, 21.0]`.
///
/// Symmetric in its arguments; a color against itself is exactly 1.0.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG accessibility level for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Ratio >= 7.0.
    Aaa,
    /// Ratio >= 4.5.
    Aa,
    /// Ratio >= 3.0.
    A,
    /// Ratio below 3.0.
    Fail,
}

impl Level {
    /// Classify a contrast ratio. Thresholds are inclusive lower bounds.
    #[must_use]
    pub fn classify(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::A
        } else {
            Self::Fail
        }
    }

    /// The standard short label, e.g. `"AAA"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::A => "A",
            Self::Fail => "FAIL",
        }
    }

    /// Human-readable summary of the level.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Aaa => "Excellent accessibility",
            Self::Aa => "Good accessibility",
            Self::A => "Minimal accessibility",
            Self::Fail => "Insufficient accessibility",
        }
    }

    /// Suggested color for rendering the level badge in a UI.
    #[must_use]
    pub const fn display_color(self) -> Color {
        match self {
            Self::Aaa => Color::from_rgb(0, 128, 0),
            Self::Aa => Color::from_rgb(0, 0, 255),
            Self::A => Color::from_rgb(255, 165, 0),
            Self::Fail => Color::from_rgb(255, 0, 0),
        }
    }

    /// Whether the level satisfies AA or better.
    #[must_use]
    pub const fn passes(self) -> bool {
        matches!(self, Self::Aaa | Self::Aa)
    }
}

/// Contrast score for one unordered pair of palette colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    /// First color of the pair (lower palette index).
    pub color_a: Color,
    /// Second color of the pair (higher palette index).
    pub color_b: Color,
    /// Raw contrast ratio, unrounded.
    pub contrast: f64,
    /// Level classified from the raw ratio.
    pub level: Level,
}

impl PairScore {
    /// Contrast ratio rounded to two decimal places, for display.
    #[must_use]
    pub fn rounded(&self) -> f64 {
        (self.contrast * 100.0).round() / 100.0
    }
}

/// Score every unordered pair `(i < j)` of the palette, in index order.
#[must_use]
pub fn score_pairs(colors: &[Color]) -> Vec<PairScore> {
    let mut scores = Vec::new();
    for (i, &color_a) in colors.iter().enumerate() {
        for &color_b in &colors[i + 1..] {
            let contrast = contrast_ratio(color_a, color_b);
            scores.push(PairScore {
                color_a,
                color_b,
                contrast,
                level: Level::classify(contrast),
            });
        }
    }
    scores
}

/// Kind of an accessibility recommendation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationKind {
    /// At least one pair has insufficient contrast.
    Warning,
    /// Concrete fix for one failing pair.
    Suggestion,
    /// Every pair meets AA or better.
    Success,
}

/// One entry of the accessibility report for a palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// Entry kind.
    pub kind: RecommendationKind,
    /// Human-readable message.
    pub message: String,
}

/// Build the accessibility report for a palette.
///
/// Emits one warning naming the number of FAIL/A pairs if any exist, followed
/// by one suggestion per such pair. A single success entry is emitted only
/// when every pair passes AA — partial compliance never yields a success
/// entry alongside warnings.
#[must_use]
pub fn recommendations(colors: &[Color]) -> Vec<Recommendation> {
    let scores = score_pairs(colors);
    let failing: Vec<&PairScore> = scores.iter().filter(|s| !s.level.passes()).collect();

    let mut report = Vec::new();
    if failing.is_empty() {
        report.push(Recommendation {
            kind: RecommendationKind::Success,
            message: "Palette fully meets WCAG accessibility standards".into(),
        });
        return report;
    }

    report.push(Recommendation {
        kind: RecommendationKind::Warning,
        message: format!(
            "Found {} color pair(s) with insufficient contrast",
            failing.len()
        ),
    });
    for pair in failing {
        report.push(Recommendation {
            kind: RecommendationKind::Suggestion,
            message: format!(
                "Increase the contrast between {} and {}",
                pair.color_a, pair.color_b
            ),
        });
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(hex: &str) -> Color {
        hex.parse().unwrap()
    }

    #[test]
    fn luminance_of_black_and_white() {
        assert!(relative_luminance(Color::BLACK).abs() < 1e-9);
        assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn contrast_is_symmetric() {
        let pairs = [
            (color("#FF0000"), color("#00FF00")),
            (color("#123456"), color("#FEDCBA")),
            (Color::BLACK, Color::WHITE),
        ];
        for (a, b) in pairs {
            assert_eq!(contrast_ratio(a, b).to_bits(), contrast_ratio(b, a).to_bits());
        }
    }

    #[test]
    fn contrast_with_self_is_one() {
        for hex in ["#000000", "#FFFFFF", "#3366CC"] {
            assert!((contrast_ratio(color(hex), color(hex)) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn black_on_white_is_twenty_one() {
        assert!((contrast_ratio(Color::BLACK, Color::WHITE) - 21.0).abs() < 0.01);
    }

    #[test]
    fn classify_boundaries_are_inclusive() {
        assert_eq!(Level::classify(7.0), Level::Aaa);
        assert_eq!(Level::classify(6.99), Level::Aa);
        assert_eq!(Level::classify(4.5), Level::Aa);
        assert_eq!(Level::classify(4.49), Level::A);
        assert_eq!(Level::classify(3.0), Level::A);
        assert_eq!(Level::classify(2.99), Level::Fail);
    }

    #[test]
    fn score_pairs_covers_every_unordered_pair() {
        let colors = [color("#000000"), color("#FFFFFF"), color("#FF0000")];
        let scores = score_pairs(&colors);
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0].color_a, colors[0]);
        assert_eq!(scores[0].color_b, colors[1]);
        assert_eq!(scores[1].color_a, colors[0]);
        assert_eq!(scores[1].color_b, colors[2]);
        assert_eq!(scores[2].color_a, colors[1]);
        assert_eq!(scores[2].color_b, colors[2]);
    }

    #[test]
    fn rounded_keeps_two_decimals() {
        let score = PairScore {
            color_a: Color::BLACK,
            color_b: Color::WHITE,
            contrast: 4.556,
            level: Level::Aa,
        };
        assert!((score.rounded() - 4.56).abs() < 1e-9);
    }

    #[test]
    fn compliant_palette_gets_single_success() {
        let report = recommendations(&[Color::BLACK, Color::WHITE]);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].kind, RecommendationKind::Success);
    }

    #[test]
    fn failing_pairs_get_warning_and_suggestions() {
        // Red and orange are close in luminance; both pairs with white pass.
        let colors = [color("#FF0000"), color("#FF4500")];
        let report = recommendations(&colors);
        assert_eq!(report[0].kind, RecommendationKind::Warning);
        assert_eq!(report[1].kind, RecommendationKind::Suggestion);
        assert!(report.iter().all(|r| r.kind != RecommendationKind::Success));
    }

    #[test]
    fn partial_compliance_never_mixes_success_with_warnings() {
        let colors = [color("#000000"), color("#FFFFFF"), color("#EEEEEE")];
        let report = recommendations(&colors);
        let has_warning = report
            .iter()
            .any(|r| r.kind == RecommendationKind::Warning);
        let has_success = report
            .iter()
            .any(|r| r.kind == RecommendationKind::Success);
        assert!(has_warning);
        assert!(!has_success);
    }
}

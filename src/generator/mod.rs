//! Palette generation from a base color.
//!
//! [`generate`] produces an ordered sequence of colors whose first element is
//! always the base. Hue-offset strategies work in HSL space, preserving the
//! base saturation and lightness; hue arithmetic always wraps into
//! `[0, 360)`.

/// Mood transforms (saturation/lightness remaps).
pub mod mood;
/// Strategy catalog.
pub mod strategy;

pub use mood::{Mood, UnknownMood};
pub use strategy::{Strategy, UnknownStrategy};

use rand::Rng;

use crate::color::{Color, Hsl};

/// Generate a palette of exactly `count` colors (`count >= 1`).
///
/// Element 0 is the base color; when a mood is supplied the whole palette,
/// base included, is remapped through it.
#[must_use]
pub fn generate(base: Color, strategy: Strategy, count: usize, mood: Option<Mood>) -> Vec<Color> {
    let count = count.max(1);
    let base_hsl = base.hsl();
    let mut colors = Vec::with_capacity(count);
    colors.push(base);

    match strategy {
        Strategy::Analogous => fill_hue_steps(&mut colors, base_hsl, 30.0, 1, count),
        Strategy::Triadic => fill_hue_steps(&mut colors, base_hsl, 120.0, 1, count),
        Strategy::Square => fill_hue_steps(&mut colors, base_hsl, 90.0, 1, count),
        Strategy::Monochromatic => {
            let mid = (count / 2) as f32;
            for i in 1..count {
                let lightness = (base_hsl.l + (i as f32 * 15.0 - mid * 15.0)).clamp(10.0, 90.0);
                colors.push(Color::from_hsl(Hsl {
                    l: lightness,
                    ..base_hsl
                }));
            }
        }
        Strategy::Complementary => {
            if count > 1 {
                colors.push(hue_offset(base_hsl, 180.0));
            }
            fill_hue_steps(&mut colors, base_hsl, 60.0, 2, count);
        }
        Strategy::SplitComplementary => {
            if count > 1 {
                colors.push(hue_offset(base_hsl, 150.0));
            }
            if count > 2 {
                colors.push(hue_offset(base_hsl, 210.0));
            }
            fill_hue_steps(&mut colors, base_hsl, 72.0, 3, count);
        }
        Strategy::Tetradic => {
            for anchor in [60.0, 180.0, 240.0] {
                if colors.len() < count {
                    colors.push(hue_offset(base_hsl, anchor));
                }
            }
            fill_hue_steps(&mut colors, base_hsl, 30.0, 4, count);
        }
    }

    match mood {
        Some(mood) => apply_mood(&colors, mood),
        None => colors,
    }
}

/// Remap every color of a palette through a mood.
#[must_use]
pub fn apply_mood(colors: &[Color], mood: Mood) -> Vec<Color> {
    colors
        .iter()
        .map(|&color| Color::from_hsl(mood.remap(color.hsl())))
        .collect()
}

/// A random vivid color: hue uniform in `[0, 360)`, saturation in
/// `[70, 100)`, lightness in `[40, 70)`.
#[must_use]
pub fn random_color() -> Color {
    let mut rng = rand::rng();
    Color::from_hsl(Hsl {
        h: rng.random_range(0..360) as f32,
        s: rng.random_range(70..100) as f32,
        l: rng.random_range(40..70) as f32,
    })
}

/// Name the hue band a color falls into.
///
/// Band boundaries sit at 15, 45, 75, 165, 195, 255, 285 and 315 degrees;
/// hues at or above 315 wrap back to red.
#[must_use]
pub fn color_name(color: Color) -> &'static str {
    let hue = color.hsl().h;
    if hue < 15.0 {
        "Red"
    } else if hue < 45.0 {
        "Orange"
    } else if hue < 75.0 {
        "Yellow"
    } else if hue < 165.0 {
        "Green"
    } else if hue < 195.0 {
        "Cyan"
    } else if hue < 255.0 {
        "Blue"
    } else if hue < 285.0 {
        "Purple"
    } else if hue < 315.0 {
        "Pink"
    } else {
        "Red"
    }
}

/// Up to five accent colors for a base: its complement, the two adjacent
/// hues, and the two triadic hues, in that order.
#[must_use]
pub fn accent_colors(base: Color, count: usize) -> Vec<Color> {
    const OFFSETS: [f32; 5] = [180.0, 30.0, -30.0, 120.0, 240.0];
    let base_hsl = base.hsl();
    OFFSETS
        .iter()
        .take(count)
        .map(|&offset| hue_offset(base_hsl, offset))
        .collect()
}

/// Push colors at `index * step` degrees from the base hue for every index in
/// `from..count`.
fn fill_hue_steps(colors: &mut Vec<Color>, base: Hsl, step: f32, from: usize, count: usize) {
    for i in from..count {
        colors.push(hue_offset(base, i as f32 * step));
    }
}

fn hue_offset(base: Hsl, degrees: f32) -> Color {
    Color::from_hsl(Hsl {
        h: (base.h + degrees).rem_euclid(360.0),
        ..base
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(hex: &str) -> Color {
        hex.parse().unwrap()
    }

    fn hues(colors: &[Color]) -> Vec<f32> {
        colors.iter().map(|c| c.hsl().h).collect()
    }

    #[test]
    fn first_element_is_always_the_base() {
        let base = color("#3366CC");
        for strategy in Strategy::ALL {
            let palette = generate(base, strategy, 5, None);
            assert_eq!(palette[0], base, "{strategy}");
        }
    }

    #[test]
    fn every_strategy_returns_exactly_count() {
        let base = color("#FF0000");
        for strategy in Strategy::ALL {
            for count in 1..=8 {
                assert_eq!(
                    generate(base, strategy, count, None).len(),
                    count,
                    "{strategy} with count {count}"
                );
            }
        }
    }

    #[test]
    fn analogous_steps_thirty_degrees() {
        let palette = generate(color("#FF0000"), Strategy::Analogous, 5, None);
        let hues = hues(&palette);
        for (i, expected) in [0.0, 30.0, 60.0, 90.0, 120.0].into_iter().enumerate() {
            assert!(
                (hues[i] - expected).abs() < 1.0,
                "index {i}: hue {} != {expected}",
                hues[i]
            );
        }
        for swatch in &palette {
            let hsl = swatch.hsl();
            assert!((hsl.s - 100.0).abs() < 1.0);
            assert!((hsl.l - 50.0).abs() < 1.0);
        }
    }

    #[test]
    fn analogous_red_produces_expected_hexes() {
        let palette = generate(color("#FF0000"), Strategy::Analogous, 3, None);
        assert_eq!(palette[1].to_string(), "#FF8000");
        assert_eq!(palette[2].to_string(), "#FFFF00");
    }

    #[test]
    fn triadic_wraps_past_a_full_turn() {
        let palette = generate(color("#FF0000"), Strategy::Triadic, 4, None);
        let hues = hues(&palette);
        assert!((hues[1] - 120.0).abs() < 1.0);
        assert!((hues[2] - 240.0).abs() < 1.0);
        // 360 wraps to 0
        assert!(hues[3] < 1.0 || hues[3] > 359.0);
    }

    #[test]
    fn complementary_anchors_then_fills() {
        let palette = generate(color("#FF0000"), Strategy::Complementary, 4, None);
        let hues = hues(&palette);
        assert!((hues[1] - 180.0).abs() < 1.0);
        assert!((hues[2] - 120.0).abs() < 1.0); // 2 * 60
        assert!((hues[3] - 180.0).abs() < 1.0); // 3 * 60
    }

    #[test]
    fn split_complementary_anchors_then_fills() {
        let palette = generate(color("#FF0000"), Strategy::SplitComplementary, 5, None);
        let hues = hues(&palette);
        assert!((hues[1] - 150.0).abs() < 1.0);
        assert!((hues[2] - 210.0).abs() < 1.0);
        assert!((hues[3] - 216.0).abs() < 1.0); // 3 * 72
        assert!((hues[4] - 288.0).abs() < 1.0); // 4 * 72
    }

    #[test]
    fn tetradic_uses_two_complementary_pairs() {
        let palette = generate(color("#FF0000"), Strategy::Tetradic, 4, None);
        let hues = hues(&palette);
        assert!((hues[1] - 60.0).abs() < 1.0);
        assert!((hues[2] - 180.0).abs() < 1.0);
        assert!((hues[3] - 240.0).abs() < 1.0);
    }

    #[test]
    fn square_steps_ninety_degrees() {
        let palette = generate(color("#FF0000"), Strategy::Square, 4, None);
        let hues = hues(&palette);
        assert!((hues[1] - 90.0).abs() < 1.0);
        assert!((hues[2] - 180.0).abs() < 1.0);
        assert!((hues[3] - 270.0).abs() < 1.0);
    }

    #[test]
    fn monochromatic_keeps_hue_and_clamps_lightness() {
        let palette = generate(color("#FF0000"), Strategy::Monochromatic, 7, None);
        for swatch in &palette {
            let hsl = swatch.hsl();
            let is_grey = hsl.l < 10.5 || hsl.l > 89.5; // clamp endpoints may desaturate
            assert!(hsl.h < 1.0 || hsl.h > 359.0 || is_grey);
            assert!((9.5..=90.5).contains(&hsl.l));
        }
    }

    #[test]
    fn mood_is_applied_to_the_whole_palette() {
        let palette = generate(color("#336699"), Strategy::Analogous, 4, Some(Mood::Vibrant));
        for swatch in &palette {
            let hsl = swatch.hsl();
            assert!((hsl.s - 100.0).abs() < 1.0);
            assert!((hsl.l - 50.0).abs() < 1.0);
        }
    }

    #[test]
    fn random_color_stays_in_the_vivid_band() {
        for _ in 0..50 {
            let hsl = random_color().hsl();
            assert!((68.0..=100.0).contains(&hsl.s), "saturation {}", hsl.s);
            assert!((38.0..=72.0).contains(&hsl.l), "lightness {}", hsl.l);
        }
    }

    #[test]
    fn color_names_cover_the_wheel() {
        assert_eq!(color_name(color("#FF0000")), "Red"); // 0
        assert_eq!(color_name(color("#FF8000")), "Orange"); // 30
        assert_eq!(color_name(color("#FFFF00")), "Yellow"); // 60
        assert_eq!(color_name(color("#00FF00")), "Green"); // 120
        assert_eq!(color_name(color("#00FFFF")), "Cyan"); // 180
        assert_eq!(color_name(color("#0000FF")), "Blue"); // 240
        assert_eq!(color_name(color("#8000FF")), "Purple"); // 270
        assert_eq!(color_name(color("#FF00FF")), "Pink"); // 300
        assert_eq!(color_name(color("#FF0040")), "Red"); // 345 wraps
    }

    #[test]
    fn accent_colors_follow_the_offset_table() {
        let accents = accent_colors(color("#FF0000"), 5);
        let hues: Vec<f32> = accents.iter().map(|c| c.hsl().h).collect();
        for (i, expected) in [180.0, 30.0, 330.0, 120.0, 240.0].into_iter().enumerate() {
            assert!((hues[i] - expected).abs() < 1.0, "index {i}");
        }
        assert_eq!(accent_colors(color("#FF0000"), 3).len(), 3);
        assert_eq!(accent_colors(color("#FF0000"), 9).len(), 5);
    }
}

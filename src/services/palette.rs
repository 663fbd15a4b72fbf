//! Palette generation.
//!
//! Turns a hue and saturation into a ten-step lightness ramp, and derives a
//! full seven-role palette from a single random hue.

use rand::Rng;
use tracing::debug;

use crate::models::{ColorPalette, ColorShade, Hsl, ShadeStep};

/// Lightness per step, in [`ShadeStep::ALL`] order.
const LIGHTNESS: [u8; 10] = [95, 90, 80, 70, 60, 50, 40, 30, 20, 10];

/// Saturation used when a single role is re-rolled.
pub const SHUFFLE_SATURATION: u8 = 70;

/// Saturation for `step`, derived from the base saturation.
///
/// Light steps are desaturated with a per-step floor, dark steps are
/// saturated with a ceiling of 100. Lightness is never clamped.
#[must_use]
pub fn step_saturation(step: ShadeStep, saturation: u8) -> u8 {
    let s = i16::from(saturation.min(100));
    let adjusted = match step {
        ShadeStep::S50 => (s - 40).max(10),
        ShadeStep::S100 => (s - 30).max(15),
        ShadeStep::S200 => (s - 20).max(20),
        ShadeStep::S300 => (s - 10).max(25),
        ShadeStep::S400 | ShadeStep::S500 | ShadeStep::S600 => s,
        ShadeStep::S700 => (s + 10).min(100),
        ShadeStep::S800 => (s + 20).min(100),
        ShadeStep::S900 => (s + 30).min(100),
    };
    // Always within 0..=100 after the clamps above
    u8::try_from(adjusted).unwrap_or(100)
}

/// Lightness percentage for `step`.
#[must_use]
pub const fn step_lightness(step: ShadeStep) -> u8 {
    LIGHTNESS[step.index()]
}

/// Generates the ten-step ramp for a hue (0-359) and saturation (0-100).
///
/// # Examples
///
/// ```
/// use tokenforge::models::{Hsl, ShadeStep};
/// use tokenforge::services::palette::generate_color_shade;
///
/// let shade = generate_color_shade(210, 70);
/// assert_eq!(shade.get(ShadeStep::S500), Hsl::new(210, 70, 50));
/// assert_eq!(shade.get(ShadeStep::S50), Hsl::new(210, 30, 95));
/// ```
#[must_use]
pub fn generate_color_shade(hue: u16, saturation: u8) -> ColorShade {
    ColorShade::new(ShadeStep::ALL.map(|step| {
        Hsl::new(hue, step_saturation(step, saturation), step_lightness(step))
    }))
}

/// Generates a complete palette from one random hue.
///
/// Secondary sits opposite the primary hue and accent a third of the wheel
/// away. Neutral and the status roles use fixed hues, so only the brand
/// roles change between draws.
pub fn generate_random_palette<R: Rng + ?Sized>(rng: &mut R) -> ColorPalette {
    let hue: u16 = rng.gen_range(0..360);
    let palette = palette_from_hue(hue);
    debug!("Generated palette from primary hue {}", hue);
    palette
}

/// Builds the palette [`generate_random_palette`] would produce for `hue`.
#[must_use]
pub fn palette_from_hue(hue: u16) -> ColorPalette {
    let hue = hue % 360;
    ColorPalette::new([
        generate_color_shade(hue, 70),
        generate_color_shade((hue + 180) % 360, 60),
        generate_color_shade((hue + 120) % 360, 80),
        generate_color_shade(0, 5),
        generate_color_shade(120, 60),
        generate_color_shade(45, 80),
        generate_color_shade(0, 70),
    ])
}

/// Generates a ramp for a fresh random hue at [`SHUFFLE_SATURATION`].
pub fn generate_random_shade<R: Rng + ?Sized>(rng: &mut R) -> ColorShade {
    let hue: u16 = rng.gen_range(0..360);
    generate_color_shade(hue, SHUFFLE_SATURATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorRole;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn expected_saturation(step: ShadeStep, s: i16) -> i16 {
        match step.value() {
            50 => (s - 40).max(10),
            100 => (s - 30).max(15),
            200 => (s - 20).max(20),
            300 => (s - 10).max(25),
            700 => (s + 10).min(100),
            800 => (s + 20).min(100),
            900 => (s + 30).min(100),
            _ => s,
        }
    }

    #[test]
    fn test_shade_lightness_and_saturation_for_all_inputs() {
        for hue in (0..360).step_by(7) {
            for saturation in 0..=100u8 {
                let shade = generate_color_shade(hue, saturation);
                let lightness: Vec<u8> = shade.iter().map(|(_, c)| c.lightness).collect();
                assert_eq!(lightness, vec![95, 90, 80, 70, 60, 50, 40, 30, 20, 10]);

                for (step, color) in shade.iter() {
                    assert_eq!(color.hue, hue);
                    assert_eq!(
                        i16::from(color.saturation),
                        expected_saturation(step, i16::from(saturation)),
                        "hue {hue} sat {saturation} step {step}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_low_saturation_floors() {
        let shade = generate_color_shade(200, 0);
        assert_eq!(shade.get(ShadeStep::S50).saturation, 10);
        assert_eq!(shade.get(ShadeStep::S100).saturation, 15);
        assert_eq!(shade.get(ShadeStep::S200).saturation, 20);
        assert_eq!(shade.get(ShadeStep::S300).saturation, 25);
        assert_eq!(shade.get(ShadeStep::S400).saturation, 0);
        assert_eq!(shade.get(ShadeStep::S900).saturation, 30);
    }

    #[test]
    fn test_high_saturation_ceilings() {
        let shade = generate_color_shade(10, 95);
        assert_eq!(shade.get(ShadeStep::S700).saturation, 100);
        assert_eq!(shade.get(ShadeStep::S800).saturation, 100);
        assert_eq!(shade.get(ShadeStep::S900).saturation, 100);
        assert_eq!(shade.get(ShadeStep::S50).saturation, 55);
    }

    #[test]
    fn test_palette_hue_relations_for_every_hue() {
        for hue in 0..360u16 {
            let palette = palette_from_hue(hue);
            let primary = palette.get(ColorRole::Primary).get(ShadeStep::S500);
            let secondary = palette.get(ColorRole::Secondary).get(ShadeStep::S500);
            let accent = palette.get(ColorRole::Accent).get(ShadeStep::S500);

            assert_eq!(primary, Hsl::new(hue, 70, 50));
            assert_eq!(secondary.hue, (hue + 180) % 360);
            assert_eq!(secondary.saturation, 60);
            assert_eq!(accent.hue, (hue + 120) % 360);
            assert_eq!(accent.saturation, 80);
        }
    }

    #[test]
    fn test_palette_fixed_roles() {
        let palette = palette_from_hue(42);
        assert_eq!(palette.get(ColorRole::Neutral), &generate_color_shade(0, 5));
        assert_eq!(palette.get(ColorRole::Success), &generate_color_shade(120, 60));
        assert_eq!(palette.get(ColorRole::Warning), &generate_color_shade(45, 80));
        assert_eq!(palette.get(ColorRole::Error), &generate_color_shade(0, 70));
    }

    #[test]
    fn test_random_palette_has_all_roles() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let palette = generate_random_palette(&mut rng);
            assert_eq!(palette.iter().count(), 7);
            let primary = palette.get(ColorRole::Primary).get(ShadeStep::S500);
            let secondary = palette.get(ColorRole::Secondary).get(ShadeStep::S500);
            assert!(primary.hue < 360);
            assert_eq!(secondary.hue, (primary.hue + 180) % 360);
        }
    }

    #[test]
    fn test_seeded_palette_is_reproducible() {
        let a = generate_random_palette(&mut StdRng::seed_from_u64(99));
        let b = generate_random_palette(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}

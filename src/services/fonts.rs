//! Fixed list of selectable font families.

use rand::seq::SliceRandom;
use rand::Rng;

/// Font family stacks offered for a design system.
pub const FONT_FAMILIES: [&str; 10] = [
    "Inter, sans-serif",
    "Roboto, sans-serif",
    "Open Sans, sans-serif",
    "Poppins, sans-serif",
    "Montserrat, sans-serif",
    "Lato, sans-serif",
    "Source Sans Pro, sans-serif",
    "Nunito, sans-serif",
    "Playfair Display, serif",
    "JetBrains Mono, monospace",
];

/// Picks a random font family from [`FONT_FAMILIES`].
pub fn random_font<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FONT_FAMILIES.choose(rng).copied().unwrap_or(FONT_FAMILIES[0])
}

/// Resolves user input to one of the known font stacks.
///
/// Accepts the full stack ("Inter, sans-serif") or just the family name
/// ("inter"), case-insensitively.
#[must_use]
pub fn find_font(name: &str) -> Option<&'static str> {
    let wanted = name.trim().to_lowercase();
    FONT_FAMILIES.iter().copied().find(|font| {
        let lower = font.to_lowercase();
        lower == wanted || lower.split(',').next().is_some_and(|family| family.trim() == wanted)
    })
}

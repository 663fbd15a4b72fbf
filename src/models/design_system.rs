//! The design system record and its mutation operations.

use anyhow::Result;
use rand::Rng;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::debug;

use super::{ColorPalette, ColorRole, TypographyScale};
use crate::services::{fonts, palette};

/// Default spacing scale.
pub const DEFAULT_SPACING: [&str; 10] = [
    "4px", "8px", "12px", "16px", "20px", "24px", "32px", "40px", "48px", "64px",
];

/// Default border radius scale.
pub const DEFAULT_BORDER_RADIUS: [&str; 6] = ["0px", "4px", "8px", "12px", "16px", "24px"];

/// A complete set of design tokens.
///
/// Every field is always populated: the palette has all seven roles, the
/// typography scale all nine sizes, and the spacing and radius scales are
/// never empty. The mutation methods below preserve that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystem {
    /// Display name
    pub name: String,
    /// Seven-role color palette
    pub colors: ColorPalette,
    /// Nine-step typography scale
    pub typography: TypographyScale,
    /// Spacing scale, smallest first (exported 1-indexed)
    spacing: Vec<String>,
    /// Border radius scale, smallest first (exported 0-indexed)
    border_radius: Vec<String>,
    /// CSS font family stack
    pub font_family: String,
}

impl DesignSystem {
    /// Creates a design system with the default scales.
    #[must_use]
    pub fn new(name: &str, colors: ColorPalette, font_family: &str) -> Self {
        Self {
            name: name.to_string(),
            colors,
            typography: TypographyScale::default(),
            spacing: DEFAULT_SPACING.iter().map(ToString::to_string).collect(),
            border_radius: DEFAULT_BORDER_RADIUS.iter().map(ToString::to_string).collect(),
            font_family: font_family.to_string(),
        }
    }

    /// Generates a fresh design system: random name suffix, random font from
    /// the fixed list, random palette, default scales.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let suffix: u32 = rng.gen_range(0..1000);
        let font = fonts::random_font(rng);
        let colors = palette::generate_random_palette(rng);
        let system = Self::new(&format!("Design System {suffix}"), colors, font);
        debug!("Generated design system '{}' with font {}", system.name, font);
        system
    }

    /// Spacing scale values.
    #[must_use]
    pub fn spacing(&self) -> &[String] {
        &self.spacing
    }

    /// Border radius scale values.
    #[must_use]
    pub fn border_radius(&self) -> &[String] {
        &self.border_radius
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Sets the font family stack.
    pub fn set_font_family(&mut self, font_family: &str) {
        self.font_family = font_family.to_string();
    }

    /// Replaces the spacing scale.
    ///
    /// Every value must be a CSS length; on error the scale is unchanged.
    pub fn set_spacing<S: AsRef<str>>(&mut self, values: &[S]) -> Result<()> {
        self.spacing = parse_scale("spacing", values)?;
        Ok(())
    }

    /// Replaces the border radius scale.
    ///
    /// Every value must be a CSS length; on error the scale is unchanged.
    pub fn set_border_radius<S: AsRef<str>>(&mut self, values: &[S]) -> Result<()> {
        self.border_radius = parse_scale("border radius", values)?;
        Ok(())
    }

    /// Re-rolls one role with a new random hue at saturation 70.
    pub fn shuffle_role<R: Rng + ?Sized>(&mut self, role: ColorRole, rng: &mut R) {
        self.colors.set(role, palette::generate_random_shade(rng));
        debug!("Shuffled {} role", role);
    }

    /// Replaces the whole palette, leaving every other field untouched.
    pub fn shuffle_palette<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.colors = palette::generate_random_palette(rng);
    }
}

fn css_length_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(0|\d+(\.\d+)?(px|rem|em|%))$").expect("length pattern is valid")
    })
}

/// Returns true if `value` is a CSS length accepted in scales.
#[must_use]
pub fn is_css_length(value: &str) -> bool {
    css_length_pattern().is_match(value)
}

fn parse_scale<S: AsRef<str>>(label: &str, values: &[S]) -> Result<Vec<String>> {
    if values.is_empty() {
        anyhow::bail!("The {label} scale must have at least one value");
    }

    values
        .iter()
        .map(|value| {
            let value = value.as_ref().trim();
            if is_css_length(value) {
                Ok(value.to_string())
            } else {
                anyhow::bail!(
                    "Invalid {label} value '{value}'. Expected a CSS length such as 8px, 0.5rem or 0"
                )
            }
        })
        .collect()
}

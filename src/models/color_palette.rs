//! Color palette data structures.
//!
//! A palette binds seven semantic roles to a ten-step shade ramp each. Both
//! key sets are closed, so they are modelled as enums and the ramps as
//! enum-indexed arrays: every lookup is total and iteration order is fixed.

use anyhow::Result;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::Hsl;

/// One of the ten standardized lightness levels of a color role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShadeStep {
    /// Step 50 (lightest)
    S50,
    /// Step 100
    S100,
    /// Step 200
    S200,
    /// Step 300
    S300,
    /// Step 400
    S400,
    /// Step 500
    S500,
    /// Step 600
    S600,
    /// Step 700
    S700,
    /// Step 800
    S800,
    /// Step 900 (darkest)
    S900,
}

impl ShadeStep {
    /// All steps in ascending order.
    pub const ALL: [Self; 10] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
    ];

    /// Numeric step key (50, 100, ..., 900).
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
        }
    }

    /// Position of the step in [`ShadeStep::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a step by its numeric key.
    pub fn from_value(value: u16) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|step| step.value() == value)
            .ok_or_else(|| anyhow::anyhow!("Invalid shade step {value}. Expected 50 or 100-900"))
    }
}

impl fmt::Display for ShadeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A full ten-step ramp for one color role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorShade {
    shades: [Hsl; 10],
}

impl ColorShade {
    /// Creates a ramp from ten colors in ascending step order.
    #[must_use]
    pub const fn new(shades: [Hsl; 10]) -> Self {
        Self { shades }
    }

    /// Creates a ramp with the same color at every step.
    #[must_use]
    pub const fn uniform(color: Hsl) -> Self {
        Self { shades: [color; 10] }
    }

    /// Gets the color for a step.
    #[must_use]
    pub const fn get(&self, step: ShadeStep) -> Hsl {
        self.shades[step.index()]
    }

    /// Iterates `(step, color)` pairs in ascending step order.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeStep, Hsl)> + '_ {
        ShadeStep::ALL.into_iter().map(|step| (step, self.get(step)))
    }
}

impl Serialize for ColorShade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.shades.len()))?;
        for (step, color) in self.iter() {
            map.serialize_entry(&step.value().to_string(), &color)?;
        }
        map.end()
    }
}

/// Semantic color role, independent of its concrete hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorRole {
    /// Main brand color
    Primary,
    /// Complementary brand color
    Secondary,
    /// Highlight color
    Accent,
    /// Near-grayscale surfaces and text
    Neutral,
    /// Positive status
    Success,
    /// Cautionary status
    Warning,
    /// Error status
    Error,
}

impl ColorRole {
    /// All roles in export order.
    pub const ALL: [Self; 7] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Neutral,
        Self::Success,
        Self::Warning,
        Self::Error,
    ];

    /// Lowercase role name used in token keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.name() == wanted)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown color role '{s}'. Expected one of: {}",
                    Self::ALL.map(Self::name).join(", ")
                )
            })
    }
}

/// The seven-role color palette of a design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    roles: [ColorShade; 7],
}

impl ColorPalette {
    /// Creates a palette from ramps in [`ColorRole::ALL`] order.
    #[must_use]
    pub const fn new(roles: [ColorShade; 7]) -> Self {
        Self { roles }
    }

    /// Creates a palette where every role has the same ramp.
    #[must_use]
    pub const fn uniform(shade: ColorShade) -> Self {
        Self { roles: [shade; 7] }
    }

    /// Gets the ramp for a role.
    #[must_use]
    pub const fn get(&self, role: ColorRole) -> &ColorShade {
        &self.roles[role.index()]
    }

    /// Replaces the ramp for a role.
    pub fn set(&mut self, role: ColorRole, shade: ColorShade) {
        self.roles[role.index()] = shade;
    }

    /// Iterates `(role, ramp)` pairs in export order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &ColorShade)> + '_ {
        ColorRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

impl Serialize for ColorPalette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.roles.len()))?;
        for (role, shade) in self.iter() {
            map.serialize_entry(role.name(), shade)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_values_ascending() {
        let values: Vec<u16> = ShadeStep::ALL.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900]);
    }

    #[test]
    fn test_step_from_value() {
        assert_eq!(ShadeStep::from_value(500).unwrap(), ShadeStep::S500);
        assert!(ShadeStep::from_value(550).is_err());
        assert!(ShadeStep::from_value(0).is_err());
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("primary".parse::<ColorRole>().unwrap(), ColorRole::Primary);
        assert_eq!(" Error ".parse::<ColorRole>().unwrap(), ColorRole::Error);
        assert!("info".parse::<ColorRole>().is_err());
    }

    #[test]
    fn test_palette_set_only_touches_one_role() {
        let gray = ColorShade::uniform(Hsl::new(0, 0, 50));
        let red = ColorShade::uniform(Hsl::new(0, 70, 50));
        let mut palette = ColorPalette::uniform(gray);

        palette.set(ColorRole::Accent, red);

        assert_eq!(palette.get(ColorRole::Accent), &red);
        for role in ColorRole::ALL.into_iter().filter(|r| *r != ColorRole::Accent) {
            assert_eq!(palette.get(role), &gray);
        }
    }

    #[test]
    fn test_palette_serializes_in_role_and_step_order() {
        let palette = ColorPalette::uniform(ColorShade::uniform(Hsl::new(10, 20, 30)));
        let json = serde_json::to_value(palette).unwrap();
        let roles: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(
            roles,
            vec!["primary", "secondary", "accent", "neutral", "success", "warning", "error"]
        );

        let steps: Vec<&String> = json["primary"].as_object().unwrap().keys().collect();
        assert_eq!(steps.first().map(|s| s.as_str()), Some("50"));
        assert_eq!(steps.last().map(|s| s.as_str()), Some("900"));
        assert_eq!(json["error"]["900"], "hsl(10, 20%, 30%)");
    }
}

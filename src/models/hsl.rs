//! HSL color values with `hsl(H, S%, L%)` parsing and serialization.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::RgbColor;

/// A color expressed as hue, saturation and lightness.
///
/// Hue is in degrees (0-359), saturation and lightness are percentages
/// (0-100). The textual form is `hsl(H, S%, L%)`, which is also the form
/// every exporter writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue in degrees (0-359)
    pub hue: u16,
    /// Saturation percentage (0-100)
    pub saturation: u8,
    /// Lightness percentage (0-100)
    pub lightness: u8,
}

impl Hsl {
    /// Creates a new `Hsl`, wrapping the hue into 0-359 and clamping the
    /// percentages to 0-100.
    #[must_use]
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: hue % 360,
            saturation: if saturation > 100 { 100 } else { saturation },
            lightness: if lightness > 100 { 100 } else { lightness },
        }
    }

    /// Converts the color to RGB for terminal rendering.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokenforge::models::{Hsl, RgbColor};
    ///
    /// assert_eq!(Hsl::new(0, 100, 50).to_rgb(), RgbColor::new(255, 0, 0));
    /// assert_eq!(Hsl::new(0, 0, 100).to_rgb(), RgbColor::new(255, 255, 255));
    /// ```
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        RgbColor::from_hsl(
            f32::from(self.hue),
            f32::from(self.saturation) / 100.0,
            f32::from(self.lightness) / 100.0,
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl FromStr for Hsl {
    type Err = anyhow::Error;

    /// Parses `hsl(H, S%, L%)`. Whitespace around the components is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .strip_prefix("hsl(")
            .and_then(|rest| rest.strip_suffix(')'))
            .with_context(|| format!("Invalid HSL color '{s}'. Expected hsl(H, S%, L%)"))?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            anyhow::bail!("Invalid HSL color '{s}'. Expected three components");
        }

        let hue: u16 = parts[0]
            .parse()
            .context(format!("Invalid hue in HSL color '{s}'"))?;
        let saturation = parse_percent(parts[1]).context(format!("Invalid saturation in '{s}'"))?;
        let lightness = parse_percent(parts[2]).context(format!("Invalid lightness in '{s}'"))?;

        if hue >= 360 {
            anyhow::bail!("Hue {hue} out of range in '{s}'. Expected 0-359");
        }

        Ok(Self::new(hue, saturation, lightness))
    }
}

fn parse_percent(part: &str) -> Result<u8> {
    let digits = part
        .strip_suffix('%')
        .context("Missing '%' suffix")?;
    let value: u8 = digits.parse()?;
    if value > 100 {
        anyhow::bail!("Percentage {value} out of range (0-100)");
    }
    Ok(value)
}

impl Serialize for Hsl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hsl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Hsl::new(210, 70, 50).to_string(), "hsl(210, 70%, 50%)");
        assert_eq!(Hsl::new(0, 5, 95).to_string(), "hsl(0, 5%, 95%)");
    }

    #[test]
    fn test_new_wraps_and_clamps() {
        let color = Hsl::new(370, 120, 200);
        assert_eq!(color.hue, 10);
        assert_eq!(color.saturation, 100);
        assert_eq!(color.lightness, 100);
    }

    #[test]
    fn test_parse_valid() {
        let color: Hsl = "hsl(210, 70%, 50%)".parse().unwrap();
        assert_eq!(color, Hsl::new(210, 70, 50));

        let color: Hsl = "  hsl(0,5%,95%) ".parse().unwrap();
        assert_eq!(color, Hsl::new(0, 5, 95));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("rgb(1, 2, 3)".parse::<Hsl>().is_err());
        assert!("hsl(210, 70, 50)".parse::<Hsl>().is_err());
        assert!("hsl(360, 70%, 50%)".parse::<Hsl>().is_err());
        assert!("hsl(10, 170%, 50%)".parse::<Hsl>().is_err());
        assert!("hsl(10, 70%)".parse::<Hsl>().is_err());
        assert!("".parse::<Hsl>().is_err());
    }

    #[test]
    fn test_text_roundtrip() {
        let original = Hsl::new(123, 45, 67);
        let parsed: Hsl = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Hsl::new(45, 80, 60)).unwrap();
        assert_eq!(json, "\"hsl(45, 80%, 60%)\"");

        let back: Hsl = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Hsl::new(45, 80, 60));
    }

    #[test]
    fn test_to_rgb_primaries() {
        assert_eq!(Hsl::new(120, 100, 50).to_rgb(), RgbColor::new(0, 255, 0));
        assert_eq!(Hsl::new(240, 100, 50).to_rgb(), RgbColor::new(0, 0, 255));
        assert_eq!(Hsl::new(0, 0, 0).to_rgb(), RgbColor::new(0, 0, 0));
    }
}

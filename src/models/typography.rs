//! Typography scale data structures.

use anyhow::Result;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the nine fixed typography size keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeSize {
    /// Extra small
    Xs,
    /// Small
    Sm,
    /// Body text
    Base,
    /// Large
    Lg,
    /// Extra large
    Xl,
    /// 2x large
    Xl2,
    /// 3x large
    Xl3,
    /// 4x large
    Xl4,
    /// 5x large
    Xl5,
}

impl TypeSize {
    /// All sizes from smallest to largest.
    pub const ALL: [Self; 9] = [
        Self::Xs,
        Self::Sm,
        Self::Base,
        Self::Lg,
        Self::Xl,
        Self::Xl2,
        Self::Xl3,
        Self::Xl4,
        Self::Xl5,
    ];

    /// Key used in token names (e.g. "2xl").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xl2 => "2xl",
            Self::Xl3 => "3xl",
            Self::Xl4 => "4xl",
            Self::Xl5 => "5xl",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TypeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeSize {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|size| size.name() == wanted)
            .ok_or_else(|| anyhow::anyhow!("Unknown typography size '{s}'"))
    }
}

/// Font size, line height and weight for one typography step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyEntry {
    /// CSS length (e.g. "1rem")
    pub size: String,
    /// CSS length or unitless multiplier (e.g. "1.5rem", "1")
    pub line_height: String,
    /// Numeric font weight as text (e.g. "400")
    pub weight: String,
}

impl TypographyEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(size: &str, line_height: &str, weight: &str) -> Self {
        Self {
            size: size.to_string(),
            line_height: line_height.to_string(),
            weight: weight.to_string(),
        }
    }
}

/// Default scale as (size, line height, weight) per [`TypeSize::ALL`] entry.
const DEFAULT_SCALE: [(&str, &str, &str); 9] = [
    ("0.75rem", "1rem", "400"),
    ("0.875rem", "1.25rem", "400"),
    ("1rem", "1.5rem", "400"),
    ("1.125rem", "1.75rem", "500"),
    ("1.25rem", "1.75rem", "500"),
    ("1.5rem", "2rem", "600"),
    ("1.875rem", "2.25rem", "700"),
    ("2.25rem", "2.5rem", "700"),
    ("3rem", "1", "800"),
];

/// Complete typography scale; all nine sizes are always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypographyScale {
    entries: [TypographyEntry; 9],
}

impl TypographyScale {
    /// Gets the entry for a size.
    #[must_use]
    pub const fn get(&self, size: TypeSize) -> &TypographyEntry {
        &self.entries[size.index()]
    }

    /// Replaces the entry for a size.
    pub fn set(&mut self, size: TypeSize, entry: TypographyEntry) {
        self.entries[size.index()] = entry;
    }

    /// Iterates `(size, entry)` pairs from smallest to largest.
    pub fn iter(&self) -> impl Iterator<Item = (TypeSize, &TypographyEntry)> + '_ {
        TypeSize::ALL.into_iter().map(|size| (size, self.get(size)))
    }
}

impl Default for TypographyScale {
    fn default() -> Self {
        Self {
            entries: DEFAULT_SCALE.map(|(size, line_height, weight)| {
                TypographyEntry::new(size, line_height, weight)
            }),
        }
    }
}

impl Serialize for TypographyScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (size, entry) in self.iter() {
            map.serialize_entry(size.name(), entry)?;
        }
        map.end()
    }
}

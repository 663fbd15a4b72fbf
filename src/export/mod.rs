//! Export functionality for design systems.
//!
//! Each submodule is a pure formatter from a [`DesignSystem`] snapshot to one
//! text format. None of them mutates the system or draws randomness, so
//! exporting the same system twice yields identical text.

pub mod css;
pub mod figma;
pub mod scss;
pub mod tailwind;
pub mod tokens;

pub use css::export_css;
pub use figma::export_figma;
pub use scss::export_scss;
pub use tailwind::export_tailwind;
pub use tokens::export_tokens;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::models::DesignSystem;

/// MIME type used for every exported file.
pub const EXPORT_MIME_TYPE: &str = "text/plain";

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Flat variable map for design tools
    Figma,
    /// CSS custom properties
    Css,
    /// Tailwind config module
    Tailwind,
    /// SCSS variables
    Scss,
    /// Design token file
    Tokens,
}

impl ExportFormat {
    /// All formats in menu order.
    pub const ALL: [Self; 5] = [
        Self::Figma,
        Self::Css,
        Self::Tailwind,
        Self::Scss,
        Self::Tokens,
    ];

    /// Fixed download file name for the format.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Figma => "figma-variables.json",
            Self::Css => "design-system.css",
            Self::Tailwind => "tailwind.config.js",
            Self::Scss => "variables.scss",
            Self::Tokens => "tokens.json",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Figma => "Figma Variables",
            Self::Css => "CSS Variables",
            Self::Tailwind => "Tailwind Config",
            Self::Scss => "SCSS Variables",
            Self::Tokens => "Design Tokens",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Generates the text for `format`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use tokenforge::export::{export, ExportFormat};
/// use tokenforge::models::DesignSystem;
///
/// let system = DesignSystem::random(&mut rand::rngs::StdRng::seed_from_u64(3));
/// let css = export(ExportFormat::Css, &system);
/// assert!(css.starts_with(":root {"));
/// ```
#[must_use]
pub fn export(format: ExportFormat, system: &DesignSystem) -> String {
    match format {
        ExportFormat::Figma => export_figma(system),
        ExportFormat::Css => export_css(system),
        ExportFormat::Tailwind => export_tailwind(system),
        ExportFormat::Scss => export_scss(system),
        ExportFormat::Tokens => export_tokens(system),
    }
}

/// Two-space indented JSON with a trailing newline.
pub(crate) fn to_pretty_json(value: &Value) -> String {
    format!("{value:#}\n")
}

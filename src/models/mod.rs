//! Data models for design systems and component configurations.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are designed to be independent of output formats and the command line.

pub mod color_palette;
pub mod component;
pub mod design_system;
pub mod hsl;
pub mod rgb;
pub mod typography;

// Re-export all model types
pub use color_palette::{ColorPalette, ColorRole, ColorShade, ShadeStep};
pub use component::{ComponentConfig, ComponentKind};
pub use design_system::DesignSystem;
pub use hsl::Hsl;
pub use rgb::RgbColor;
pub use typography::{TypeSize, TypographyEntry, TypographyScale};

//! CLI command handlers for TokenForge.
//!
//! Each command builds what it needs for one run, prints to stdout, and
//! reports failures as a [`CliError`] that maps to a process exit code.

pub mod common;
pub mod component;
pub mod config;
pub mod export;
pub mod fonts;
pub mod generate;
pub mod palette;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use component::ComponentArgs;
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use fonts::FontsArgs;
pub use generate::{GenerateArgs, SystemArgs};
pub use palette::PaletteArgs;

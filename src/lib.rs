//! TokenForge Library
//!
//! This library generates design systems (color palettes, typography,
//! spacing and radius scales), exports them to Figma variables, CSS, Tailwind,
//! SCSS and design token files, and generates UI component snippets.

// Module declarations
pub mod cli;
pub mod components;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;

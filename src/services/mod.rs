//! Service layer for business logic.
//!
//! This module contains the generators that fill a design system with
//! values and the service that delivers generated text to files or the
//! clipboard.

pub mod fonts;
pub mod output;
pub mod palette;

// Re-export commonly used types and functions
pub use output::OutputService;
pub use palette::{generate_color_shade, generate_random_palette};

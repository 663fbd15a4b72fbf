//! UI component templates, code generation and previews.
//!
//! This module turns a [`ComponentConfig`](crate::models::ComponentConfig) into
//! a source snippet and a styled preview. It does not interact with design
//! systems or exports.

pub mod code;
pub mod preview;
pub mod templates;
pub mod workbench;

pub use code::{generate_component_code, generate_component_code_for_name};
pub use preview::{render_preview, Preview, PreviewPart};
pub use templates::{template, ComponentTemplate, TEMPLATES};
pub use workbench::{ComponentWorkbench, GeneratedComponent};

//! Flat variable export for design tools (`figma-variables.json`).

use serde_json::{Map, Value};

use super::to_pretty_json;
use crate::models::DesignSystem;

/// Builds the flat `path → value` variable map.
///
/// Paths are slash-delimited: `color/<role>/<step>`,
/// `typography/<size>/size|lineHeight|weight`, `spacing/<n>` (1-based),
/// `radius/<n>` (0-based) and `font/family`.
#[must_use]
pub fn figma_variables(system: &DesignSystem) -> Map<String, Value> {
    let mut variables = Map::new();

    for (role, shade) in system.colors.iter() {
        for (step, color) in shade.iter() {
            variables.insert(format!("color/{role}/{step}"), Value::String(color.to_string()));
        }
    }

    for (size, entry) in system.typography.iter() {
        variables.insert(format!("typography/{size}/size"), entry.size.clone().into());
        variables.insert(
            format!("typography/{size}/lineHeight"),
            entry.line_height.clone().into(),
        );
        variables.insert(format!("typography/{size}/weight"), entry.weight.clone().into());
    }

    for (index, value) in system.spacing().iter().enumerate() {
        variables.insert(format!("spacing/{}", index + 1), value.clone().into());
    }

    for (index, value) in system.border_radius().iter().enumerate() {
        variables.insert(format!("radius/{index}"), value.clone().into());
    }

    variables.insert("font/family".to_string(), system.font_family.clone().into());

    variables
}

/// Generates the flat variable map as indented JSON.
pub fn export_figma(system: &DesignSystem) -> String {
    to_pretty_json(&Value::Object(figma_variables(system)))
}

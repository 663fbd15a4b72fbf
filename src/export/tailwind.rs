//! Tailwind configuration export (`tailwind.config.js`).

use serde_json::{json, Map, Value};

use super::to_pretty_json;
use crate::models::DesignSystem;

/// Builds the `theme.extend` configuration object.
#[must_use]
pub fn tailwind_config(system: &DesignSystem) -> Value {
    let mut colors = Map::new();
    for (role, shade) in system.colors.iter() {
        let steps: Map<String, Value> = shade
            .iter()
            .map(|(step, color)| (step.to_string(), Value::String(color.to_string())))
            .collect();
        colors.insert(role.to_string(), Value::Object(steps));
    }

    let font_size: Map<String, Value> = system
        .typography
        .iter()
        .map(|(size, entry)| {
            (
                size.to_string(),
                json!([entry.size, { "lineHeight": entry.line_height, "fontWeight": entry.weight }]),
            )
        })
        .collect();

    let spacing: Map<String, Value> = system
        .spacing()
        .iter()
        .enumerate()
        .map(|(index, value)| ((index + 1).to_string(), Value::String(value.clone())))
        .collect();

    let border_radius: Map<String, Value> = system
        .border_radius()
        .iter()
        .enumerate()
        .map(|(index, value)| (index.to_string(), Value::String(value.clone())))
        .collect();

    json!({
        "theme": {
            "extend": {
                "colors": colors,
                "fontFamily": {
                    "sans": [system.font_family]
                },
                "fontSize": font_size,
                "spacing": spacing,
                "borderRadius": border_radius
            }
        }
    })
}

/// Generates a CommonJS Tailwind config module.
pub fn export_tailwind(system: &DesignSystem) -> String {
    let body = to_pretty_json(&tailwind_config(system));
    format!(
        "/** @type {{import('tailwindcss').Config}} */\nmodule.exports = {};\n",
        body.trim_end()
    )
}

//! Design token file export (`tokens.json`).
//!
//! Every leaf is a `{ "value", "type" }` pair under a single `global` set,
//! which is the layout token-sync plugins for design tools read.

use serde::Serialize;
use serde_json::{json, Map, Value};

use super::to_pretty_json;
use crate::models::DesignSystem;

/// Category written into each token's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenType {
    /// Color value
    Color,
    /// Composite typography value
    Typography,
    /// Spacing length
    Spacing,
    /// Border radius length
    BorderRadius,
}

fn token(value: Value, kind: TokenType) -> Value {
    json!({ "value": value, "type": kind })
}

/// Builds the nested token document.
#[must_use]
pub fn design_tokens(system: &DesignSystem) -> Value {
    let mut colors = Map::new();
    for (role, shade) in system.colors.iter() {
        let steps: Map<String, Value> = shade
            .iter()
            .map(|(step, color)| (step.to_string(), token(color.to_string().into(), TokenType::Color)))
            .collect();
        colors.insert(role.to_string(), Value::Object(steps));
    }

    let typography: Map<String, Value> = system
        .typography
        .iter()
        .map(|(size, entry)| {
            let value = json!({
                "fontFamily": system.font_family,
                "fontSize": entry.size,
                "lineHeight": entry.line_height,
                "fontWeight": entry.weight
            });
            (size.to_string(), token(value, TokenType::Typography))
        })
        .collect();

    let spacing: Map<String, Value> = system
        .spacing()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            (
                format!("spacing-{}", index + 1),
                token(value.clone().into(), TokenType::Spacing),
            )
        })
        .collect();

    let border_radius: Map<String, Value> = system
        .border_radius()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            (
                format!("radius-{index}"),
                token(value.clone().into(), TokenType::BorderRadius),
            )
        })
        .collect();

    json!({
        "global": {
            "colors": colors,
            "typography": typography,
            "spacing": spacing,
            "borderRadius": border_radius
        }
    })
}

/// Generates the token document as indented JSON.
pub fn export_tokens(system: &DesignSystem) -> String {
    to_pretty_json(&design_tokens(system))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorRole;
    use crate::services::palette::palette_from_hue;

    fn system() -> DesignSystem {
        DesignSystem::new("Test", palette_from_hue(30), "Nunito, sans-serif")
    }

    #[test]
    fn test_leaf_types() {
        let tokens = design_tokens(&system());
        let global = &tokens["global"];

        assert_eq!(global["colors"]["success"]["500"]["type"], "color");
        assert_eq!(global["colors"]["success"]["500"]["value"], "hsl(120, 60%, 50%)");
        assert_eq!(global["typography"]["lg"]["type"], "typography");
        assert_eq!(global["spacing"]["spacing-1"]["type"], "spacing");
        assert_eq!(global["borderRadius"]["radius-0"]["type"], "borderRadius");
    }

    #[test]
    fn test_colors_nest_role_then_step() {
        let tokens = design_tokens(&system());
        let colors = tokens["global"]["colors"].as_object().unwrap();

        let roles: Vec<&String> = colors.keys().collect();
        let expected: Vec<String> = ColorRole::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(roles, expected.iter().collect::<Vec<_>>());
        assert!(colors.get("primary-50").is_none());

        let steps: Vec<&String> = colors["primary"].as_object().unwrap().keys().collect();
        assert_eq!(
            steps,
            vec!["50", "100", "200", "300", "400", "500", "600", "700", "800", "900"]
        );
    }

    #[test]
    fn test_typography_embeds_font() {
        let tokens = design_tokens(&system());
        assert_eq!(
            tokens["global"]["typography"]["xs"]["value"],
            json!({
                "fontFamily": "Nunito, sans-serif",
                "fontSize": "0.75rem",
                "lineHeight": "1rem",
                "fontWeight": "400"
            })
        );
    }

    #[test]
    fn test_namespace_order() {
        let tokens = design_tokens(&system());
        let keys: Vec<&String> = tokens["global"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["colors", "typography", "spacing", "borderRadius"]);
    }
}

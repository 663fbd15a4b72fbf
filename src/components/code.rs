//! Component source snippet generation.

use crate::models::{ComponentConfig, ComponentKind};

/// Generates a JSX-like snippet for a component configuration.
///
/// Variant, size and text are interpolated into a per-kind template, and
/// the names of props set to true are appended to the opening tag in props
/// order.
///
/// # Examples
///
/// ```
/// use tokenforge::components::generate_component_code;
/// use tokenforge::models::{ComponentConfig, ComponentKind};
///
/// let mut config = ComponentConfig::new(ComponentKind::Badge);
/// config.set_variant("success").unwrap();
/// assert_eq!(
///     generate_component_code(&config),
///     r#"<Badge variant="success" size="sm">Badge</Badge>"#
/// );
/// ```
#[must_use]
pub fn generate_component_code(config: &ComponentConfig) -> String {
    let variant = config.variant();
    let size = config.size();
    let text = config.text();
    let props = props_suffix(config);

    match config.kind() {
        ComponentKind::Button => format!(
            "<Button variant=\"{variant}\" size=\"{size}\"{props}>\n  {text}\n</Button>"
        ),
        ComponentKind::Card => format!(
            "<Card variant=\"{variant}\" size=\"{size}\"{props}>\n  <CardContent>\n    {text}\n  </CardContent>\n</Card>"
        ),
        ComponentKind::Input => format!(
            "<Input variant=\"{variant}\" size=\"{size}\" placeholder=\"{text}\"{props} />"
        ),
        ComponentKind::Badge => {
            format!("<Badge variant=\"{variant}\" size=\"{size}\"{props}>{text}</Badge>")
        }
        ComponentKind::Alert => format!(
            "<Alert variant=\"{variant}\" size=\"{size}\"{props}>\n  <AlertDescription>{text}</AlertDescription>\n</Alert>"
        ),
    }
}

/// Generates code for a configuration addressed by kind name.
///
/// Unknown kind names produce an empty string rather than an error.
#[must_use]
pub fn generate_component_code_for_name(kind: &str, config: &ComponentConfig) -> String {
    match kind.parse::<ComponentKind>() {
        Ok(kind) if kind == config.kind() => generate_component_code(config),
        _ => String::new(),
    }
}

fn props_suffix(config: &ComponentConfig) -> String {
    let enabled: Vec<&str> = config.enabled_props().collect();
    if enabled.is_empty() {
        String::new()
    } else {
        format!(" {}", enabled.join(" "))
    }
}

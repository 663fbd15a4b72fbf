//! Stylesheet custom property export (`design-system.css`).

use crate::models::DesignSystem;
use std::fmt::Write as _;

/// Generates a `:root` block of CSS custom properties.
///
/// Order: colors (role, then step), typography (size, then text/leading/
/// weight), spacing, radius, font family. Spacing names are 1-based and
/// radius names 0-based.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use tokenforge::export::css::export_css;
/// use tokenforge::models::DesignSystem;
///
/// let system = DesignSystem::random(&mut rand::rngs::StdRng::seed_from_u64(1));
/// let css = export_css(&system);
/// assert!(css.contains("--spacing-1: 4px;"));
/// assert!(css.contains("--radius-0: 0px;"));
/// ```
pub fn export_css(system: &DesignSystem) -> String {
    let mut output = String::from(":root {\n");

    for (role, shade) in system.colors.iter() {
        for (step, color) in shade.iter() {
            let _ = writeln!(output, "  --{role}-{step}: {color};");
        }
    }

    for (size, entry) in system.typography.iter() {
        let _ = writeln!(output, "  --text-{size}: {};", entry.size);
        let _ = writeln!(output, "  --leading-{size}: {};", entry.line_height);
        let _ = writeln!(output, "  --weight-{size}: {};", entry.weight);
    }

    for (index, value) in system.spacing().iter().enumerate() {
        let _ = writeln!(output, "  --spacing-{}: {value};", index + 1);
    }

    for (index, value) in system.border_radius().iter().enumerate() {
        let _ = writeln!(output, "  --radius-{index}: {value};");
    }

    let _ = writeln!(output, "  --font-family: {};", system.font_family);
    output.push_str("}\n");

    output
}

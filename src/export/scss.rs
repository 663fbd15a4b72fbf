//! SCSS variable export (`variables.scss`).

use crate::models::DesignSystem;
use std::fmt::Write as _;

/// Generates SCSS variables grouped under comment headers.
///
/// Groups appear as Colors, Typography, Spacing, Border Radius, separated by
/// a blank line.
pub fn export_scss(system: &DesignSystem) -> String {
    let mut output = String::from("// Colors\n");
    for (role, shade) in system.colors.iter() {
        for (step, color) in shade.iter() {
            let _ = writeln!(output, "${role}-{step}: {color};");
        }
    }

    output.push_str("\n// Typography\n");
    let _ = writeln!(output, "$font-family-base: {};", system.font_family);
    for (size, entry) in system.typography.iter() {
        let _ = writeln!(output, "$font-size-{size}: {};", entry.size);
        let _ = writeln!(output, "$line-height-{size}: {};", entry.line_height);
        let _ = writeln!(output, "$font-weight-{size}: {};", entry.weight);
    }

    output.push_str("\n// Spacing\n");
    for (index, value) in system.spacing().iter().enumerate() {
        let _ = writeln!(output, "$spacing-{}: {value};", index + 1);
    }

    output.push_str("\n// Border Radius\n");
    for (index, value) in system.border_radius().iter().enumerate() {
        let _ = writeln!(output, "$border-radius-{index}: {value};");
    }

    output
}

//! Golden snapshot tests for every export format.

mod fixtures;

use fixtures::*;
use golden_helper::*;
use tokenforge::export::{self, ExportFormat};
use tokenforge::models::{ColorRole, ShadeStep};

#[test]
fn test_golden_figma() {
    let output = export::export_figma(&fixture_system());
    assert_golden(&output, "tests/golden/figma-variables.json");
}

#[test]
fn test_golden_css() {
    let output = export::export_css(&fixture_system());
    assert_golden(&output, "tests/golden/design-system.css");
}

#[test]
fn test_golden_tailwind() {
    let output = export::export_tailwind(&fixture_system());
    assert_golden(&output, "tests/golden/tailwind.config.js");
}

#[test]
fn test_golden_scss() {
    let output = export::export_scss(&fixture_system());
    assert_golden(&output, "tests/golden/variables.scss");
}

#[test]
fn test_golden_tokens() {
    let output = export::export_tokens(&fixture_system());
    assert_golden(&output, "tests/golden/tokens.json");
}

#[test]
fn test_golden_files_match_format_file_names() {
    let system = fixture_system();
    for format in ExportFormat::ALL {
        assert_golden(
            &export::export(format, &system),
            &format!("tests/golden/{}", format.file_name()),
        );
    }
}

#[test]
fn test_exports_are_valid_json() {
    let system = fixture_system();

    let figma: serde_json::Value = serde_json::from_str(&export::export_figma(&system)).unwrap();
    assert_eq!(figma.as_object().unwrap().len(), 7 * 10 + 9 * 3 + 10 + 6 + 1);
    assert_eq!(figma["color/primary/500"], "hsl(210, 70%, 50%)");
    assert_eq!(figma["color/secondary/500"], "hsl(30, 60%, 50%)");
    assert_eq!(figma["color/accent/500"], "hsl(330, 80%, 50%)");

    let tokens: serde_json::Value = serde_json::from_str(&export::export_tokens(&system)).unwrap();
    assert_eq!(
        tokens["global"]["typography"]["5xl"]["value"]["lineHeight"],
        "1"
    );

    let tailwind = export::export_tailwind(&system);
    let body = tailwind
        .strip_prefix("/** @type {import('tailwindcss').Config} */\nmodule.exports = ")
        .and_then(|rest| rest.strip_suffix(";\n"))
        .expect("Tailwind export should wrap a JSON object");
    let config: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(config["theme"]["extend"]["fontFamily"]["sans"][0], "Inter, sans-serif");
}

#[test]
fn test_spacing_one_based_radius_zero_based() {
    let system = fixture_system();
    let css = export::export_css(&system);
    assert!(css.contains("--spacing-1: 4px;"));
    assert!(css.contains("--spacing-10: 64px;"));
    assert!(!css.contains("--spacing-0:"));
    assert!(css.contains("--radius-0: 0px;"));
    assert!(css.contains("--radius-5: 24px;"));
    assert!(!css.contains("--radius-6:"));

    let scss = export::export_scss(&system);
    assert!(scss.contains("$spacing-1: 4px;"));
    assert!(scss.contains("$border-radius-0: 0px;"));
}

#[test]
fn test_patched_system_flows_into_exports() {
    let mut system = fixture_system();
    system.set_spacing(&["2px", "6px"]).unwrap();
    system.set_border_radius(&["9999px"]).unwrap();
    system.set_font_family("JetBrains Mono, monospace");

    let css = export::export_css(&system);
    assert!(css.contains("--spacing-2: 6px;"));
    assert!(!css.contains("--spacing-3:"));
    assert!(css.contains("--radius-0: 9999px;"));
    assert!(css.contains("--font-family: JetBrains Mono, monospace;"));
    assert_eq!(
        system.colors.get(ColorRole::Neutral).get(ShadeStep::S900).to_string(),
        "hsl(0, 35%, 10%)"
    );
}

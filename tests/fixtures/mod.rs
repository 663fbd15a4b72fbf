//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use tokenforge::models::DesignSystem;
use tokenforge::services::palette::palette_from_hue;

/// Primary hue of the golden fixture system.
pub const FIXTURE_HUE: u16 = 210;

/// Creates the fixed design system the golden files were generated from.
///
/// Name "Test", palette derived from hue 210, default scales, Inter.
pub fn fixture_system() -> DesignSystem {
    DesignSystem::new("Test", palette_from_hue(FIXTURE_HUE), "Inter, sans-serif")
}

/// Path to the tokenforge binary
pub fn tokenforge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tokenforge")
}

/// Creates an empty config directory for one test.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share configuration
/// between them within one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(tokenforge_bin());
    cmd.env("TOKENFORGE_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with a fresh config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = temp_config_dir();
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Asserts the process exited with `code`, showing stderr otherwise.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "Unexpected exit code. stderr: {}",
        stderr(output)
    );
}

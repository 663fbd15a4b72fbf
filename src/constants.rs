//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "TokenForge";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "tokenforge";

/// Directory name for application data under the platform config directory.
pub const APP_DATA_DIR: &str = "TokenForge";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "TOKENFORGE_CONFIG_DIR";

/// How long a copy keeps serving the clipboard on Linux before the process
/// exits, giving a clipboard manager time to take the contents over.
pub const CLIPBOARD_HOLD: std::time::Duration = std::time::Duration::from_secs(2);

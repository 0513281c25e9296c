// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution for the persisted locale preference.
//!
//! # Path Resolution Order
//!
//! 1. **Environment variable** (`CANVAS_TOOLBAR_CONFIG_DIR`)
//! 2. **Platform default** - via `dirs` crate
//!
//! Callers that already know the file location skip this entirely with
//! [`SettingsFile::at`](crate::config::SettingsFile::at).

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "CanvasToolbar";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CANVAS_TOOLBAR_CONFIG_DIR";

/// Returns the application config directory path.
///
/// This directory holds `settings.toml`, the durable home of the
/// `userLocale` preference.
///
/// # Resolution Order
///
/// 1. `CANVAS_TOOLBAR_CONFIG_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific config directory:
///    - Linux: `~/.config/CanvasToolbar/`
///    - macOS: `~/Library/Application Support/CanvasToolbar/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\CanvasToolbar\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    // Priority 1: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 2: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

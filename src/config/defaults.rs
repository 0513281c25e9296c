// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the durable preference store.

// ==========================================================================
// Preference Defaults
// ==========================================================================

/// File name of the preference store inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Preference slot holding the user's chosen locale code.
pub const USER_LOCALE_KEY: &str = "userLocale";

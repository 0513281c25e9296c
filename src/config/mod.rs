// SPDX-License-Identifier: MPL-2.0
//! This module handles the durable preference store, a flat `settings.toml`
//! table of string slots. The only slot the localization core uses is
//! `userLocale`.
//!
//! # Path Resolution
//!
//! The file location can be customized for testing or portable deployments:
//! 1. Use [`SettingsFile::at`] or `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set `CANVAS_TOOLBAR_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use canvas_toolbar::config::{PreferenceStore, SettingsFile, USER_LOCALE_KEY};
//!
//! let store = SettingsFile::new();
//! store.write(USER_LOCALE_KEY, "en-US").expect("Failed to save preference");
//! assert_eq!(store.read(USER_LOCALE_KEY).as_deref(), Some("en-US"));
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of `settings.toml`.
///
/// The file may hold slots written by other parts of the host application,
/// of any TOML type. They are carried through a load/save cycle untouched;
/// only string slots are visible through [`Config::get`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Config {
    values: toml::Table,
}

impl Config {
    /// The slot `key` if it holds a string.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(toml::Value::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), toml::Value::String(value.into()));
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the preference table from `path`.
///
/// A file that is not valid TOML loads as an empty table, same as a
/// missing preference. I/O failures are returned.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Writes the preference table to `path`, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// A durable key-value slot store.
///
/// Reads never fail: anything unreadable is reported as absent. Writes
/// return an error so callers can log it, but the localization core treats
/// a failed write like "nothing saved".
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;

    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Preference store backed by `settings.toml` in the config directory.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: Option<PathBuf>,
}

impl SettingsFile {
    /// Uses the standard path resolution (see [`paths::get_app_config_dir`]).
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: get_default_config_path(),
        }
    }

    /// Uses an explicit file path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn load(&self) -> Config {
        let Some(path) = self.path.as_deref() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match load_from_path(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "preference file unreadable");
                Config::default()
            }
        }
    }
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for SettingsFile {
    fn read(&self, key: &str) -> Option<String> {
        self.load().get(key).map(str::to_owned)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| Error::Config("config directory cannot be determined".into()))?;
        let mut config = self.load();
        config.set(key, value);
        save_to_path(&config, path)
    }
}

/// Process-local preference store.
///
/// Counts writes so callers can verify that an operation did not touch
/// the store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one slot pre-populated (not counted as a write).
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.into(), value.into());
        store
    }

    /// Number of successful `write` calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

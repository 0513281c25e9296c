// SPDX-License-Identifier: MPL-2.0
//! The locale catalog: every supported locale and its dictionary.
//!
//! The catalog is immutable once built. The first locale in declared order
//! is the default, used when nothing else resolves and as the derivation
//! fallback of the locale state.
//!
//! The built-in catalog is embedded at compile time from `assets/i18n/`:
//! `locales.toml` lists the locales in order, and `<code>.toml` holds each
//! dictionary.

use super::dictionary::Dictionary;
use crate::domain::locale::{LocaleCode, LocaleInfo};
use crate::error::{CatalogError, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, OnceLock};
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const MANIFEST_FILE: &str = "locales.toml";

#[derive(Debug, Deserialize)]
struct Manifest {
    locale: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    code: String,
    name: String,
}

static BUILTIN: OnceLock<Arc<LocaleCatalog>> = OnceLock::new();

#[derive(Debug)]
pub struct LocaleCatalog {
    locales: Vec<LocaleInfo>,
    dictionaries: HashMap<String, Arc<Dictionary>>,
}

impl LocaleCatalog {
    /// Builds a catalog from `(locale, dictionary)` pairs in declared order.
    ///
    /// Rejects an empty list, codes that are not well-formed language
    /// identifiers, and duplicate codes. Structural divergence between
    /// dictionaries is logged but accepted; see [`LocaleCatalog::coverage`].
    pub fn new(entries: impl IntoIterator<Item = (LocaleInfo, Dictionary)>) -> Result<Self> {
        let mut locales = Vec::new();
        let mut dictionaries = HashMap::new();

        for (info, dictionary) in entries {
            if info.code.parse::<LanguageIdentifier>().is_err() {
                return Err(CatalogError::InvalidLocale(info.code).into());
            }
            if dictionaries.contains_key(&info.code) {
                return Err(CatalogError::DuplicateLocale(info.code).into());
            }
            dictionaries.insert(info.code.clone(), Arc::new(dictionary));
            locales.push(info);
        }

        if locales.is_empty() {
            return Err(CatalogError::Empty.into());
        }

        let catalog = Self {
            locales,
            dictionaries,
        };
        catalog.warn_on_divergence();
        Ok(catalog)
    }

    /// Loads the catalog embedded from `assets/i18n/`.
    pub fn from_embedded() -> Result<Self> {
        let manifest = read_asset(MANIFEST_FILE).ok_or_else(|| {
            CatalogError::MissingBundle(MANIFEST_FILE.to_owned())
        })?;
        let manifest: Manifest = toml::from_str(&manifest).map_err(|err| CatalogError::Parse {
            locale: MANIFEST_FILE.to_owned(),
            message: err.to_string(),
        })?;

        let mut entries = Vec::with_capacity(manifest.locale.len());
        for entry in manifest.locale {
            let file = format!("{}.toml", entry.code);
            let source = read_asset(&file)
                .ok_or_else(|| CatalogError::MissingBundle(entry.code.clone()))?;
            let dictionary =
                Dictionary::from_toml_str(&source).map_err(|err| CatalogError::Parse {
                    locale: entry.code.clone(),
                    message: err.to_string(),
                })?;
            entries.push((LocaleInfo::new(entry.code, entry.name), dictionary));
        }

        Self::new(entries)
    }

    /// The process-wide built-in catalog, created on first use.
    ///
    /// # Panics
    ///
    /// Panics if the embedded bundles are malformed. They are fixed at
    /// compile time and covered by tests.
    pub fn builtin() -> Arc<LocaleCatalog> {
        Arc::clone(BUILTIN.get_or_init(|| {
            Arc::new(Self::from_embedded().expect("embedded locale bundles are valid"))
        }))
    }

    /// Supported locales in declared order.
    #[must_use]
    pub fn supported_locales(&self) -> &[LocaleInfo] {
        &self.locales
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.dictionaries.contains_key(code)
    }

    /// Returns `code` as a [`LocaleCode`] if it is a catalog key (exact match).
    #[must_use]
    pub fn validate(&self, code: &str) -> Option<LocaleCode> {
        self.contains(code).then(|| LocaleCode::new(code))
    }

    /// The first declared locale.
    #[must_use]
    pub fn default_locale(&self) -> LocaleCode {
        LocaleCode::new(self.locales[0].code.as_str())
    }

    /// Dictionary for `code`, or the default locale's if `code` is unknown.
    #[must_use]
    pub fn dictionary(&self, code: &LocaleCode) -> Arc<Dictionary> {
        let dictionary = self
            .dictionaries
            .get(code.as_str())
            .or_else(|| self.dictionaries.get(&self.locales[0].code));
        match dictionary {
            Some(dictionary) => Arc::clone(dictionary),
            None => Arc::new(Dictionary::default()),
        }
    }

    #[must_use]
    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.locales
            .iter()
            .find(|info| info.code == code)
            .map(|info| info.display_name.as_str())
    }

    /// Compares every locale's leaf paths against the default locale's.
    #[must_use]
    pub fn coverage(&self) -> CoverageReport {
        let paths_of = |code: &str| {
            self.dictionaries
                .get(code)
                .map(|d| d.leaf_paths())
                .unwrap_or_default()
        };
        let baseline = paths_of(&self.locales[0].code);

        let locales = self
            .locales
            .iter()
            .map(|info| {
                let paths = paths_of(&info.code);
                LocaleCoverage {
                    locale: info.code.clone(),
                    present: paths.len(),
                    missing: baseline.difference(&paths).cloned().collect(),
                    extra: paths.difference(&baseline).cloned().collect(),
                }
            })
            .collect();

        CoverageReport {
            total_keys: baseline.len(),
            locales,
        }
    }

    fn warn_on_divergence(&self) {
        for locale in self.coverage().locales {
            for key_path in &locale.missing {
                tracing::warn!(
                    locale = %locale.locale,
                    key_path = %key_path,
                    "locale dictionary is missing a key of the default locale"
                );
            }
            for key_path in &locale.extra {
                tracing::warn!(
                    locale = %locale.locale,
                    key_path = %key_path,
                    "locale dictionary has a key the default locale lacks"
                );
            }
        }
    }
}

fn read_asset(name: &str) -> Option<String> {
    Asset::get(name).map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned())
}

/// Key coverage of a catalog, measured against its default locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Number of leaf key paths in the default locale.
    pub total_keys: usize,
    /// Per-locale coverage, in declared locale order.
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    /// True when every locale has exactly the default locale's key paths.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.locales
            .iter()
            .all(|l| l.missing.is_empty() && l.extra.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCoverage {
    pub locale: String,
    /// Leaf key paths this locale provides.
    pub present: usize,
    /// Default-locale key paths this locale lacks, sorted.
    pub missing: Vec<String>,
    /// Key paths this locale has and the default locale lacks, sorted.
    pub extra: Vec<String>,
}

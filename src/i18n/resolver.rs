// SPDX-License-Identifier: MPL-2.0
//! Startup locale resolution.
//!
//! First match wins:
//! 1. the persisted `userLocale` preference, if it is a catalog key
//! 2. the system-reported language tag, if it is a catalog key
//! 3. the catalog's default (first declared) locale
//!
//! Matching is exact: `"en"` does not match `"en-US"`. Resolution never
//! fails and never writes anything.

use super::catalog::LocaleCatalog;
use crate::config::{PreferenceStore, USER_LOCALE_KEY};
use crate::domain::locale::LocaleCode;

/// Where the initial locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    Preference,
    System,
    Default,
}

/// Resolves the initial locale; see the module docs for the order.
#[must_use]
pub fn resolve_initial_locale(
    catalog: &LocaleCatalog,
    store: &dyn PreferenceStore,
    system_locale: Option<&str>,
) -> LocaleCode {
    resolve_with_source(catalog, store, system_locale).0
}

/// Like [`resolve_initial_locale`], also reporting which step matched.
#[must_use]
pub fn resolve_with_source(
    catalog: &LocaleCatalog,
    store: &dyn PreferenceStore,
    system_locale: Option<&str>,
) -> (LocaleCode, LocaleSource) {
    let saved = store.read(USER_LOCALE_KEY);
    let (code, source) = if let Some(code) = saved.as_deref().and_then(|c| catalog.validate(c)) {
        (code, LocaleSource::Preference)
    } else if let Some(code) = system_locale.and_then(|c| catalog.validate(c)) {
        (code, LocaleSource::System)
    } else {
        (catalog.default_locale(), LocaleSource::Default)
    };
    tracing::debug!(
        locale = %code,
        ?source,
        saved = ?saved,
        system = ?system_locale,
        "resolved initial locale"
    );
    (code, source)
}

/// The language tag reported by the operating system, if any.
#[must_use]
pub fn system_locale() -> Option<String> {
    sys_locale::get_locale()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;
    use crate::i18n::test_utils::sample_catalog;
    use proptest::prelude::*;

    #[test]
    fn system_language_used_without_preference() {
        let catalog = sample_catalog();
        let store = MemoryStore::new();
        assert_eq!(
            resolve_with_source(&catalog, &store, Some("en-US")),
            (LocaleCode::new("en-US"), LocaleSource::System)
        );
    }

    #[test]
    fn unsupported_system_language_falls_back_to_default() {
        let catalog = sample_catalog();
        let store = MemoryStore::new();
        assert_eq!(
            resolve_with_source(&catalog, &store, Some("fr-FR")),
            (LocaleCode::new("zh-CN"), LocaleSource::Default)
        );
    }

    #[test]
    fn no_prefix_or_region_matching() {
        let catalog = sample_catalog();
        let store = MemoryStore::new();
        assert_eq!(resolve_initial_locale(&catalog, &store, Some("en")), "zh-CN");
        assert_eq!(resolve_initial_locale(&catalog, &store, Some("en-GB")), "zh-CN");
        assert_eq!(resolve_initial_locale(&catalog, &store, Some("en_US")), "zh-CN");
    }

    #[test]
    fn preference_beats_system_language() {
        let catalog = sample_catalog();
        let store = MemoryStore::with_value(USER_LOCALE_KEY, "zh-CN");
        assert_eq!(
            resolve_with_source(&catalog, &store, Some("en-US")),
            (LocaleCode::new("zh-CN"), LocaleSource::Preference)
        );
    }

    #[test]
    fn corrupt_preference_falls_through() {
        let catalog = sample_catalog();
        let store = MemoryStore::with_value(USER_LOCALE_KEY, "klingon");
        assert_eq!(
            resolve_with_source(&catalog, &store, Some("en-US")),
            (LocaleCode::new("en-US"), LocaleSource::System)
        );
    }

    #[test]
    fn resolution_does_not_write() {
        let catalog = sample_catalog();
        let store = MemoryStore::new();
        let _ = resolve_initial_locale(&catalog, &store, None);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn every_catalog_code_wins_as_preference() {
        let catalog = sample_catalog();
        for info in catalog.supported_locales() {
            let store = MemoryStore::with_value(USER_LOCALE_KEY, info.code.as_str());
            assert_eq!(resolve_initial_locale(&catalog, &store, Some("fr-FR")), info.code.as_str());
        }
    }

    proptest! {
        #[test]
        fn never_returns_unknown_code(saved in ".*", system in proptest::option::of(".*")) {
            let catalog = sample_catalog();
            let store = MemoryStore::with_value(USER_LOCALE_KEY, saved.clone());
            let resolved = resolve_initial_locale(&catalog, &store, system.as_deref());
            prop_assert!(catalog.contains(resolved.as_str()));
            if !catalog.contains(&saved) {
                prop_assert_ne!(resolved.as_str(), saved.as_str());
            }
        }
    }
}

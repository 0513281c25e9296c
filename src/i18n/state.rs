// SPDX-License-Identifier: MPL-2.0
//! The reactive locale state: sole owner of the active locale.
//!
//! The active locale lives in an [`Observable`]; the active dictionary is a
//! [`Computed`] derived from it. Outside this module both are reachable only
//! through read-only handles, and the locale changes only via
//! [`LocaleState::set_locale`], which validates against the catalog and
//! persists the choice.

use std::rc::Rc;
use std::sync::Arc;

use super::catalog::LocaleCatalog;
use super::dictionary::Dictionary;
use super::lookup;
use super::resolver;
use crate::config::{PreferenceStore, USER_LOCALE_KEY};
use crate::diagnostics::DiagnosticsHandle;
use crate::domain::locale::{LocaleCode, LocaleInfo};
use crate::reactive::{Computed, Observable, ReadOnly};

struct StateInner {
    catalog: Arc<LocaleCatalog>,
    locale: Observable<LocaleCode>,
    dictionary: Computed<Arc<Dictionary>>,
    store: Rc<dyn PreferenceStore>,
    diagnostics: DiagnosticsHandle,
}

/// Shared handle onto the active locale and its dictionary.
///
/// Clones share one state; hand them to as many components as needed.
#[derive(Clone)]
pub struct LocaleState {
    inner: Rc<StateInner>,
}

impl std::fmt::Debug for LocaleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleState")
            .field("locale", &self.inner.locale.get())
            .field("version", &self.inner.locale.version())
            .finish_non_exhaustive()
    }
}

impl LocaleState {
    /// Resolves the initial locale from `store` and the OS language.
    pub fn initialize(
        catalog: Arc<LocaleCatalog>,
        store: Rc<dyn PreferenceStore>,
        diagnostics: DiagnosticsHandle,
    ) -> Self {
        let system = resolver::system_locale();
        Self::with_system_locale(catalog, store, system.as_deref(), diagnostics)
    }

    /// Resolves the initial locale from `store` and an explicit system
    /// language tag.
    pub fn with_system_locale(
        catalog: Arc<LocaleCatalog>,
        store: Rc<dyn PreferenceStore>,
        system_locale: Option<&str>,
        diagnostics: DiagnosticsHandle,
    ) -> Self {
        let initial = resolver::resolve_initial_locale(&catalog, &*store, system_locale);
        let locale = Observable::new(initial);
        let derive_from = Arc::clone(&catalog);
        let dictionary = Computed::new(&locale, move |code: &LocaleCode| {
            derive_from.dictionary(code)
        });
        Self {
            inner: Rc::new(StateInner {
                catalog,
                locale,
                dictionary,
                store,
                diagnostics,
            }),
        }
    }

    /// Switches to `code` and persists it.
    ///
    /// Unknown codes are ignored: no state change, no write, no diagnostic.
    /// Switching to the active locale re-writes the same value.
    pub fn set_locale(&self, code: &str) {
        let Some(code) = self.inner.catalog.validate(code) else {
            return;
        };

        let previous = self.inner.locale.get();
        if previous != code {
            tracing::info!(from = %previous, to = %code, "switching locale");
            self.inner
                .diagnostics
                .log_locale_changed(previous.as_str(), code.as_str());
        }
        self.inner.locale.set(code.clone());

        if let Err(err) = self.inner.store.write(USER_LOCALE_KEY, code.as_str()) {
            tracing::warn!(%err, locale = %code, "failed to persist locale preference");
            self.inner
                .diagnostics
                .log_preference_write_failed(err.to_string());
        }
    }

    /// Looks `key_path` up in the active dictionary.
    pub fn t(&self, key_path: &str) -> String {
        self.inner
            .dictionary
            .with(|dictionary| lookup::lookup(dictionary, key_path, &self.inner.diagnostics))
    }

    #[must_use]
    pub fn current_locale(&self) -> LocaleCode {
        self.inner.locale.get()
    }

    /// Observable active locale. Read-only; switch with [`Self::set_locale`].
    #[must_use]
    pub fn locale(&self) -> ReadOnly<LocaleCode> {
        self.inner.locale.read_only()
    }

    /// Observable active dictionary, derived from the active locale.
    #[must_use]
    pub fn dictionary(&self) -> ReadOnly<Arc<Dictionary>> {
        self.inner.dictionary.read_only()
    }

    #[must_use]
    pub fn supported_locales(&self) -> &[LocaleInfo] {
        self.inner.catalog.supported_locales()
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<LocaleCatalog> {
        &self.inner.catalog
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsHandle {
        &self.inner.diagnostics
    }
}

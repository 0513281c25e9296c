// SPDX-License-Identifier: MPL-2.0
//! Publishing the locale state to a host component tree.
//!
//! Hosts expose their dependency-injection mechanism by implementing
//! [`Provider`]. [`install`] registers two things on it:
//!
//! - an [`I18nContext`] under [`I18N_CONTEXT_KEY`], for descendants that
//!   need the locale list, the observable locale/dictionary or the switch;
//! - a bound [`Translator`] as the global [`TRANSLATE_GLOBAL`], for
//!   components that only display strings.
//!
//! [`ContextMap`] is a ready-made provider for hosts without one.

use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use super::dictionary::Dictionary;
use super::state::LocaleState;
use crate::domain::locale::{LocaleCode, LocaleInfo};
use crate::reactive::ReadOnly;

/// Key under which the [`I18nContext`] is provided.
pub const I18N_CONTEXT_KEY: &str = "i18n";

/// Name of the global translation function.
pub const TRANSLATE_GLOBAL: &str = "$t";

/// Key path in, display string out, bound to the active dictionary.
pub type Translator = Rc<dyn Fn(&str) -> String>;

/// A host's dependency-injection surface.
pub trait Provider {
    /// Makes `value` available to every descendant under `key`.
    fn provide(&mut self, key: &'static str, value: Rc<dyn Any>);

    /// Registers `value` as an application-wide global called `name`.
    fn register_global(&mut self, name: &'static str, value: Rc<dyn Any>);
}

/// What descendants receive: read access plus the validated switch.
#[derive(Clone, Debug)]
pub struct I18nContext {
    state: LocaleState,
}

impl I18nContext {
    #[must_use]
    pub fn new(state: LocaleState) -> Self {
        Self { state }
    }

    /// Supported locales with display names, in declared order.
    #[must_use]
    pub fn supported_locales(&self) -> &[LocaleInfo] {
        self.state.supported_locales()
    }

    #[must_use]
    pub fn locale(&self) -> ReadOnly<LocaleCode> {
        self.state.locale()
    }

    #[must_use]
    pub fn dictionary(&self) -> ReadOnly<Arc<Dictionary>> {
        self.state.dictionary()
    }

    pub fn t(&self, key_path: &str) -> String {
        self.state.t(key_path)
    }

    pub fn set_locale(&self, code: &str) {
        self.state.set_locale(code);
    }

    /// A standalone translation function that always reads the current
    /// dictionary, including after later switches.
    #[must_use]
    pub fn translator(&self) -> Translator {
        let state = self.state.clone();
        Rc::new(move |key_path: &str| state.t(key_path))
    }
}

/// Registers the locale state on `host`. Returns the provided context.
pub fn install(host: &mut impl Provider, state: LocaleState) -> I18nContext {
    let context = I18nContext::new(state);
    host.register_global(TRANSLATE_GLOBAL, Rc::new(context.translator()));
    host.provide(I18N_CONTEXT_KEY, Rc::new(context.clone()));
    tracing::debug!(
        locale = %context.locale().get(),
        locales = context.supported_locales().len(),
        "i18n installed"
    );
    context
}

/// String-keyed, type-erased provider with typed retrieval.
#[derive(Default)]
pub struct ContextMap {
    provided: HashMap<&'static str, Rc<dyn Any>>,
    globals: HashMap<&'static str, Rc<dyn Any>>,
}

impl std::fmt::Debug for ContextMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextMap")
            .field("provided", &self.provided.keys().collect::<Vec<_>>())
            .field("globals", &self.globals.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ContextMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value provided under `key`, if present and of type `T`.
    #[must_use]
    pub fn inject<T: 'static>(&self, key: &str) -> Option<Rc<T>> {
        self.provided.get(key)?.clone().downcast::<T>().ok()
    }

    /// The global named `name`, if present and of type `T`.
    #[must_use]
    pub fn global<T: 'static>(&self, name: &str) -> Option<Rc<T>> {
        self.globals.get(name)?.clone().downcast::<T>().ok()
    }
}

impl Provider for ContextMap {
    fn provide(&mut self, key: &'static str, value: Rc<dyn Any>) {
        self.provided.insert(key, value);
    }

    fn register_global(&mut self, name: &'static str, value: Rc<dyn Any>) {
        self.globals.insert(name, value);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the toolbar components.
//!
//! # Components
//!
//! - [`catalog`]: Supported locales and their dictionaries, embedded at compile time
//! - [`resolver`]: Initial locale from saved preference, then system language, then default
//! - [`lookup`]: Dotted key path to string, falling back to the key on a miss
//! - [`state`]: The observable active locale and its derived dictionary
//! - [`provider`]: Registration on a host component tree
//!
//! # Examples
//!
//! ```
//! use std::rc::Rc;
//! use canvas_toolbar::config::MemoryStore;
//! use canvas_toolbar::diagnostics::DiagnosticsHandle;
//! use canvas_toolbar::i18n::{install, ContextMap, LocaleCatalog, LocaleState};
//!
//! let state = LocaleState::with_system_locale(
//!     LocaleCatalog::builtin(),
//!     Rc::new(MemoryStore::new()),
//!     Some("en-US"),
//!     DiagnosticsHandle::default(),
//! );
//! let mut host = ContextMap::new();
//! let i18n = install(&mut host, state);
//!
//! assert_eq!(i18n.t("toolbar.undo"), "Undo");
//! i18n.set_locale("zh-CN");
//! assert_eq!(i18n.t("toolbar.undo"), "撤销");
//! assert_eq!(i18n.t("toolbar.missing"), "toolbar.missing");
//! ```

pub mod catalog;
pub mod dictionary;
pub mod lookup;
pub mod provider;
pub mod resolver;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;

pub use catalog::{CoverageReport, LocaleCatalog, LocaleCoverage};
pub use dictionary::{Dictionary, TranslationNode};
pub use lookup::{lookup, resolve};
pub use provider::{
    install, ContextMap, I18nContext, Provider, Translator, I18N_CONTEXT_KEY, TRANSLATE_GLOBAL,
};
pub use resolver::{resolve_initial_locale, resolve_with_source, system_locale, LocaleSource};
pub use state::LocaleState;

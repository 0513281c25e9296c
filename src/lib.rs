// SPDX-License-Identifier: MPL-2.0
//! `canvas_toolbar` is the localization core of a canvas editor toolbar.
//!
//! It ships Chinese and English dictionaries for every toolbar label, picks
//! the startup locale from the saved preference or the system language, and
//! keeps the active locale in an observable cell so components re-render
//! when the user switches language.
//!
//! # Quick start
//!
//! ```no_run
//! use std::rc::Rc;
//! use canvas_toolbar::config::SettingsFile;
//! use canvas_toolbar::diagnostics::DiagnosticsHandle;
//! use canvas_toolbar::i18n::{install, ContextMap, LocaleCatalog, LocaleState};
//!
//! let state = LocaleState::initialize(
//!     LocaleCatalog::builtin(),
//!     Rc::new(SettingsFile::new()),
//!     DiagnosticsHandle::default(),
//! );
//! let mut host = ContextMap::new();
//! let i18n = install(&mut host, state);
//! println!("{}", i18n.t("toolbar.save"));
//! ```

#![doc(html_root_url = "https://docs.rs/canvas_toolbar/0.3.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod paths;
pub mod reactive;

pub use error::{Error, Result};
pub use i18n::{install, I18nContext, LocaleCatalog, LocaleState};

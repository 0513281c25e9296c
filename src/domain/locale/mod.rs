// SPDX-License-Identifier: MPL-2.0
//! Locale domain types.
//!
//! - [`LocaleCode`]: A locale code known to be a catalog key
//! - [`LocaleInfo`]: A supported locale and its display name

mod newtypes;

pub use newtypes::{LocaleCode, LocaleInfo};

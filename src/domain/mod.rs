// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`locale`]: Locale types ([`LocaleCode`](locale::LocaleCode),
//!   [`LocaleInfo`](locale::LocaleInfo))

pub mod diagnostics;
pub mod locale;

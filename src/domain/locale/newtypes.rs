// SPDX-License-Identifier: MPL-2.0
//! Locale newtypes.

use std::fmt;

// =============================================================================
// LocaleCode
// =============================================================================

/// A locale code (e.g. `"zh-CN"`) that has been validated against a catalog.
///
/// Values are only minted by the catalog, so any `LocaleCode` held by the
/// locale state names a locale the catalog can serve. Comparison with plain
/// strings is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleCode(String);

impl LocaleCode {
    pub(crate) fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LocaleCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LocaleCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// LocaleInfo
// =============================================================================

/// A supported locale as shown in a language menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
    /// Locale code, e.g. `"en-US"`.
    pub code: String,
    /// Name of the language in that language, e.g. `"中文"`.
    pub display_name: String,
}

impl LocaleInfo {
    #[must_use]
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }
}

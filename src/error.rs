// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
}

/// Reasons a locale catalog can be rejected at construction time.
///
/// These are the only hard failures in the localization stack. Lookups,
/// locale switches and preference reads never surface an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog was built with no locales at all.
    Empty,

    /// A locale code is not a well-formed language identifier.
    InvalidLocale(String),

    /// The same locale code was registered twice.
    DuplicateLocale(String),

    /// The manifest lists a locale with no embedded dictionary file.
    MissingBundle(String),

    /// A dictionary or manifest file could not be parsed.
    Parse { locale: String, message: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog contains no locales"),
            CatalogError::InvalidLocale(code) => write!(f, "invalid locale code: {}", code),
            CatalogError::DuplicateLocale(code) => write!(f, "duplicate locale code: {}", code),
            CatalogError::MissingBundle(code) => {
                write!(f, "no dictionary bundle for locale: {}", code)
            }
            CatalogError::Parse { locale, message } => {
                write!(f, "failed to parse bundle '{}': {}", locale, message)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

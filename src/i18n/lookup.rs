// SPDX-License-Identifier: MPL-2.0
//! Translation lookup: dotted key path to display string.
//!
//! A lookup never fails. When the path does not end on a string leaf
//! (unknown segment, walk stopped at a leaf early, or path ends on a
//! branch) the key path itself is returned, a warning is logged and one
//! `MissingTranslation` event is recorded.

use super::dictionary::{Dictionary, TranslationNode};
use crate::diagnostics::DiagnosticsHandle;

/// Walks `key_path` through `dictionary` and returns the leaf string, if any.
///
/// This is the side-effect-free half of [`lookup`].
#[must_use]
pub fn resolve<'a>(dictionary: &'a Dictionary, key_path: &str) -> Option<&'a str> {
    if key_path.is_empty() {
        return None;
    }
    let mut segments = key_path.split('.');
    let first = segments.next()?;
    let mut node = dictionary.root().get(first)?;
    for segment in segments {
        node = match node {
            TranslationNode::Branch(children) => children.get(segment)?,
            TranslationNode::Leaf(_) => return None,
        };
    }
    match node {
        TranslationNode::Leaf(text) => Some(text),
        TranslationNode::Branch(_) => None,
    }
}

/// Resolves `key_path`, falling back to the key path itself on a miss.
pub fn lookup(dictionary: &Dictionary, key_path: &str, diagnostics: &DiagnosticsHandle) -> String {
    match resolve(dictionary, key_path) {
        Some(text) => text.to_owned(),
        None => {
            tracing::warn!(key_path, "translation key not found");
            diagnostics.log_missing_translation(key_path);
            key_path.to_owned()
        }
    }
}

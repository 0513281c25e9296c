// SPDX-License-Identifier: MPL-2.0
//! Translation dictionaries: one nested string tree per locale.
//!
//! A dictionary is a table whose values are either strings (leaves) or
//! further tables (branches). Dictionaries are written as TOML, so
//!
//! ```toml
//! [dialog.hyperlink]
//! title = "Insert Hyperlink"
//! ```
//!
//! holds one leaf at key path `dialog.hyperlink.title`.

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// One node of a translation tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    Leaf(String),
    Branch(BTreeMap<String, TranslationNode>),
}

/// The full translation tree of one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    root: BTreeMap<String, TranslationNode>,
}

impl Dictionary {
    #[must_use]
    pub fn new(root: BTreeMap<String, TranslationNode>) -> Self {
        Self { root }
    }

    /// Parses a TOML document. Any non-string, non-table value is rejected.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    #[must_use]
    pub fn root(&self) -> &BTreeMap<String, TranslationNode> {
        &self.root
    }

    /// Inserts `value` at `key_path`, creating branches along the way.
    ///
    /// A leaf sitting where a branch is needed is replaced by the branch.
    pub fn insert(&mut self, key_path: &str, value: impl Into<String>) {
        let mut segments: Vec<&str> = key_path.split('.').collect();
        let Some(last) = segments.pop() else {
            return;
        };
        let mut table = &mut self.root;
        for segment in segments {
            let node = table
                .entry(segment.to_owned())
                .or_insert_with(|| TranslationNode::Branch(BTreeMap::new()));
            if let TranslationNode::Leaf(_) = node {
                *node = TranslationNode::Branch(BTreeMap::new());
            }
            let TranslationNode::Branch(children) = node else {
                return;
            };
            table = children;
        }
        table.insert(last.to_owned(), TranslationNode::Leaf(value.into()));
    }

    /// Every key path that ends in a leaf, sorted.
    #[must_use]
    pub fn leaf_paths(&self) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        collect_leaf_paths(&self.root, "", &mut paths);
        paths
    }

    /// Number of leaf strings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.leaf_paths().len()
    }

    /// True when there is no leaf string, even if empty tables exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Dictionary::default();
        for (key_path, value) in iter {
            dictionary.insert(key_path.as_ref(), value);
        }
        dictionary
    }
}

fn collect_leaf_paths(
    table: &BTreeMap<String, TranslationNode>,
    prefix: &str,
    out: &mut BTreeSet<String>,
) {
    for (key, node) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match node {
            TranslationNode::Leaf(_) => {
                out.insert(path);
            }
            TranslationNode::Branch(children) => collect_leaf_paths(children, &path, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_tables() {
        let dict = Dictionary::from_toml_str(
            r#"
            [toolbar]
            save = "Save"

            [dialog.hyperlink.warning]
            invalidUrl = "Please enter a valid URL"
            "#,
        )
        .unwrap();

        let paths: Vec<_> = dict.leaf_paths().into_iter().collect();
        assert_eq!(
            paths,
            vec!["dialog.hyperlink.warning.invalidUrl", "toolbar.save"]
        );
    }

    #[test]
    fn rejects_non_string_leaves() {
        assert!(Dictionary::from_toml_str("count = 3").is_err());
        assert!(Dictionary::from_toml_str("flags = [\"a\"]").is_err());
    }

    #[test]
    fn insert_builds_branches() {
        let mut dict = Dictionary::default();
        dict.insert("a.b.c", "X");

        let Some(TranslationNode::Branch(a)) = dict.root().get("a") else {
            panic!("expected branch at a");
        };
        let Some(TranslationNode::Branch(b)) = a.get("b") else {
            panic!("expected branch at a.b");
        };
        assert_eq!(b.get("c"), Some(&TranslationNode::Leaf("X".into())));
    }

    #[test]
    fn insert_replaces_leaf_with_branch() {
        let mut dict = Dictionary::default();
        dict.insert("a", "leaf");
        dict.insert("a.b", "nested");
        assert_eq!(dict.leaf_paths().into_iter().collect::<Vec<_>>(), vec!["a.b"]);
    }

    #[test]
    fn empty_tables_count_as_empty() {
        let dict = Dictionary::from_toml_str("[toolbar]\n[dialog.hyperlink]\n").unwrap();
        assert!(!dict.root().is_empty());
        assert_eq!(dict.len(), 0);
        assert!(dict.is_empty());
    }

    #[test]
    fn collects_from_pairs() {
        let dict: Dictionary = [("toolbar.bold", "Bold"), ("toolbar.italic", "Italic")]
            .into_iter()
            .collect();
        assert_eq!(dict.len(), 2);
        assert!(!dict.is_empty());
    }
}

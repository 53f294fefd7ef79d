//! Internal-to-public rule name substitution.

use std::cmp::Reverse;

use itertools::Itertools;

/// Rule name mappings in first-definition order.
///
/// Redefining a name replaces its public name but keeps its position, so
/// substitution order stays stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: Vec<(String, String)>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `name` is published as `replacement`. Last write wins.
    pub fn insert(&mut self, name: &str, replacement: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = replacement.to_string(),
            None => self
                .entries
                .push((name.to_string(), replacement.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrite a captured grammar line.
    ///
    /// Every key is replaced as a plain substring, longest key first, so a
    /// key that is a prefix of another (`spaces` and `spaces?`) never
    /// clobbers the longer match site. Underscores are then turned into
    /// hyphens across the whole line.
    pub fn apply(&self, line: &str) -> String {
        let mapped = self
            .entries
            .iter()
            .sorted_by_key(|(k, _)| Reverse(k.chars().count()))
            .fold(line.to_string(), |acc, (k, v)| acc.replace(k.as_str(), v));
        mapped.replace('_', "-")
    }
}

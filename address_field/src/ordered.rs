//! String-keyed map that remembers insertion order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Entries keyed by name, listed in the order they were first inserted.
///
/// Backs both component configuration and stored address text, where the
/// host's key order decides rendering order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find_map(|(key, entry)| (key == name).then_some(entry))
    }

    /// Replacement keeps the slot of the first insertion.
    pub(crate) fn insert(&mut self, name: impl Into<String>, entry: V) -> Option<V> {
        let key: String = name.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(slot, _)| *slot == key) {
            return Some(std::mem::replace(existing, entry));
        }
        self.entries.push((key, entry));
        None
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
    }

    pub(crate) const fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, entry) in iter {
            map.insert(name, entry);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

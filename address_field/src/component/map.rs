//! Insertion-ordered component map.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::ComponentConfig;
use crate::coerce;
use crate::ordered::OrderedMap;

/// Component configurations keyed by component name.
///
/// Order is significant: the options panel and the "Not Displayed" bucket
/// list components in map order. Names are plain strings so that keys the
/// registry does not know survive a round trip through the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComponentMap(OrderedMap<ComponentConfig>);

impl ComponentMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self(OrderedMap::new())
    }

    /// Looks up the configuration stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ComponentConfig> {
        self.0.get(name)
    }

    /// Returns `true` when `name` has an entry.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.get(name).is_some()
    }

    /// Inserts or replaces an entry. Replacement keeps the original position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        config: ComponentConfig,
    ) -> Option<ComponentConfig> {
        self.0.insert(name, config)
    }

    /// Iterates the component names in map order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys()
    }

    /// Iterates `(name, config)` pairs in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentConfig)> {
        self.0.iter()
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the map has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lays `self` over `defaults` key by key.
    ///
    /// The result lists the keys of `defaults` in their original order, each
    /// taken from `self` when present there, followed by the keys only `self`
    /// carries in the order `self` lists them. Configurations are replaced
    /// whole; attributes are never merged individually.
    #[must_use]
    pub fn overlay_on(&self, defaults: &Self) -> Self {
        let mut merged = defaults.clone();
        for (name, config) in self.iter() {
            merged.insert(name, config.clone());
        }
        merged
    }
}

impl<K: Into<String>> FromIterator<(K, ComponentConfig)> for ComponentMap {
    fn from_iter<I: IntoIterator<Item = (K, ComponentConfig)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ComponentMap {
    type Item = (&'a str, &'a ComponentConfig);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<'de> Deserialize<'de> for ComponentMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        coerce::components(&raw)
            .ok_or_else(|| D::Error::custom("address components must be a mapping"))
    }
}

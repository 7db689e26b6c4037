//! Stored address values and the value loader.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::coerce;
use crate::component::{ComponentMap, ComponentRegistry};
use crate::field::FieldDefinition;
use crate::ordered::OrderedMap;

/// Address text keyed by component name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AddressValue(OrderedMap<String>);

impl AddressValue {
    /// Creates an empty value.
    #[must_use]
    pub const fn new() -> Self {
        Self(OrderedMap::new())
    }

    /// Reads a value from raw storage.
    ///
    /// Objects contribute their scalar entries, stringified. A stored `null`
    /// reads as empty text and still overrides a default; nested structures
    /// are dropped. Anything other than an object reads as empty.
    #[must_use]
    pub fn from_value(raw: &Value) -> Self {
        let Value::Object(entries) = raw else {
            return Self::new();
        };
        entries
            .iter()
            .filter_map(|(name, entry)| Some((name.as_str(), stored_text(entry)?)))
            .collect()
    }

    /// Text stored for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Inserts or replaces an entry. Replacement keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(name, text.into())
    }

    /// Iterates `(name, text)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, text)| (name, text.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no entries are stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The default value of every component in `components`.
    #[must_use]
    pub fn defaults_of(components: &ComponentMap) -> Self {
        components
            .iter()
            .map(|(name, config)| (name, config.default_value()))
            .collect()
    }

    /// Lays `overrides` over `self`; entries in `overrides` win.
    #[must_use]
    pub fn overlaid_with(mut self, overrides: &Self) -> Self {
        for (name, text) in overrides.iter() {
            self.insert(name, text);
        }
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AddressValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, text)| (name, text.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for AddressValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&raw))
    }
}

fn stored_text(entry: &Value) -> Option<String> {
    match entry {
        Value::Null => Some(String::new()),
        other => coerce::scalar(other),
    }
}

/// Loads a stored value, filling unset components with their defaults.
///
/// The result holds every component of the defaulted field in component
/// order, followed by any stored entries the field does not configure.
/// Stored text always wins over a default.
///
/// # Examples
///
/// ```rust
/// use address_field::{ComponentRegistry, FieldDefinition, load_value};
/// use serde_json::json;
///
/// let registry = ComponentRegistry::default();
/// let field = FieldDefinition::new("office");
/// let value = load_value(&json!({"city": "Denver"}), &field, &registry);
/// assert_eq!(value.get("city"), Some("Denver"));
/// assert_eq!(value.get("state"), Some(""));
/// assert_eq!(value.len(), 7);
/// ```
#[must_use]
pub fn load_value(
    raw: &Value,
    field: &FieldDefinition,
    registry: &ComponentRegistry,
) -> AddressValue {
    let resolved = field.resolve(registry);
    AddressValue::defaults_of(resolved.components()).overlaid_with(&AddressValue::from_value(raw))
}

//! Field definitions as stored by the host, and their defaulted form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::coerce;
use crate::component::{ComponentConfig, ComponentMap};
use crate::error::AddressFieldResult;
use crate::layout::{LayoutGrid, LayoutRow};

#[cfg(test)]
mod tests;

/// Configuration of one address field instance.
///
/// Both collections are optional because hosts persist whatever the admin
/// saved, which may predate either setting. See [`crate::ensure_defaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    /// Storage key of the field; also the prefix of the input names.
    pub name: String,
    /// Stored component configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_components: Option<ComponentMap>,
    /// Stored layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_layout: Option<LayoutGrid>,
}

impl FieldDefinition {
    /// Creates a definition with no stored configuration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns a copy carrying `components`.
    #[must_use]
    pub fn with_components(mut self, components: ComponentMap) -> Self {
        self.address_components = Some(components);
        self
    }

    /// Returns a copy carrying `layout`.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutGrid) -> Self {
        self.address_layout = Some(layout);
        self
    }

    /// Reads a definition from raw host data.
    ///
    /// Never fails. Wrong-typed settings are dropped so that defaulting
    /// replaces them.
    ///
    /// ```rust
    /// use address_field::FieldDefinition;
    /// use serde_json::json;
    ///
    /// let field = FieldDefinition::from_value(&json!({
    ///     "name": "office",
    ///     "address_components": "corrupted",
    ///     "address_layout": {"0": {"0": "city"}},
    /// }));
    /// assert_eq!(field.name, "office");
    /// assert!(field.address_components.is_none());
    /// assert_eq!(field.address_layout.map(|grid| grid.rows().len()), Some(1));
    /// ```
    #[must_use]
    pub fn from_value(raw: &Value) -> Self {
        let name = raw
            .get("name")
            .and_then(coerce::scalar)
            .unwrap_or_default();
        Self {
            name,
            address_components: raw.get("address_components").and_then(coerce::components),
            address_layout: raw.get("address_layout").and_then(coerce::layout),
        }
    }

    /// Parses a JSON document and reads a definition from it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AddressFieldError::Json`] when `json` is not valid
    /// JSON. Well-formed JSON of the wrong shape is coerced, not rejected.
    pub fn from_json_str(json: &str) -> AddressFieldResult<Self> {
        let raw: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&raw))
    }
}

impl<'de> Deserialize<'de> for FieldDefinition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&raw))
    }
}

/// A field definition after defaulting, with both collections present.
///
/// Produced by [`FieldDefinition`] defaulting; renderers work from this
/// view so they never deal with missing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    name: String,
    components: ComponentMap,
    layout: LayoutGrid,
}

impl ResolvedField {
    pub(crate) const fn new(name: String, components: ComponentMap, layout: LayoutGrid) -> Self {
        Self {
            name,
            components,
            layout,
        }
    }

    /// Storage key of the field.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Component configuration, every registry key included.
    #[must_use]
    pub const fn components(&self) -> &ComponentMap {
        &self.components
    }

    /// Layout rows.
    #[must_use]
    pub const fn layout(&self) -> &LayoutGrid {
        &self.layout
    }

    /// Components a renderer draws for `row`, in slot order.
    ///
    /// Placeholders, names without a configuration, and disabled components
    /// are skipped.
    pub fn visible_components<'a>(
        &'a self,
        row: &'a LayoutRow,
    ) -> impl Iterator<Item = (&'a str, &'a ComponentConfig)> + 'a {
        row.components().filter_map(|name| {
            let Some(config) = self.components.get(name) else {
                tracing::debug!(
                    field = %self.name,
                    component = name,
                    "skipping unknown layout slot"
                );
                return None;
            };
            config.is_enabled().then_some((name, config))
        })
    }
}

impl From<ResolvedField> for FieldDefinition {
    fn from(resolved: ResolvedField) -> Self {
        Self {
            name: resolved.name,
            address_components: Some(resolved.components),
            address_layout: Some(resolved.layout),
        }
    }
}

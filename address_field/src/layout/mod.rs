//! Layout grid: the rows and columns address components are arranged in.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::coerce;
use crate::component::{ComponentConfig, ComponentKey, ComponentMap};


/// One line of the address: component names in display order.
///
/// An empty string is a placeholder for an unused position and is skipped
/// by every renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LayoutRow(Vec<String>);

impl LayoutRow {
    /// Builds a row from component names.
    #[must_use]
    pub fn new<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(slots.into_iter().map(Into::into).collect())
    }

    /// All slots, placeholders included.
    #[must_use]
    pub fn slots(&self) -> &[String] {
        &self.0
    }

    /// Returns `true` when the row has no slots at all.
    ///
    /// A row of placeholders is not empty: renderers still open its
    /// container.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Component names in the row, placeholders skipped.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .map(String::as_str)
            .filter(|slot| !slot.is_empty())
    }
}

impl<S: Into<String>> FromIterator<S> for LayoutRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Ordered rows of component slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LayoutGrid(Vec<LayoutRow>);

impl LayoutGrid {
    /// Builds a grid from rows.
    #[must_use]
    pub fn new(rows: impl IntoIterator<Item = LayoutRow>) -> Self {
        Self(rows.into_iter().collect())
    }

    /// The layout used when a field has none stored: each street line on its
    /// own row, then city, state, postal code, and country together.
    ///
    /// ```rust
    /// use address_field::LayoutGrid;
    ///
    /// let grid = LayoutGrid::standard();
    /// assert_eq!(grid.rows().len(), 4);
    /// assert_eq!(grid.rows()[3].slots(), ["city", "state", "postal_code", "country"]);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        use ComponentKey::{Address1, Address2, Address3, City, Country, PostalCode, State};

        let line = |keys: &[ComponentKey]| LayoutRow::new(keys.iter().map(|key| key.as_str()));
        Self(vec![
            line(&[Address1]),
            line(&[Address2]),
            line(&[Address3]),
            line(&[City, State, PostalCode, Country]),
        ])
    }

    /// Rows in display order, empty rows included.
    #[must_use]
    pub fn rows(&self) -> &[LayoutRow] {
        &self.0
    }

    /// Rows with at least one slot. Renderers open a container for each.
    pub fn non_empty_rows(&self) -> impl Iterator<Item = &LayoutRow> {
        self.0.iter().filter(|row| !row.is_empty())
    }

    /// Components the grid does not display, in `components` order.
    ///
    /// A component counts as displayed when an enabled configuration for it
    /// sits in a non-placeholder slot. Disabled components therefore land
    /// here even when the grid references them.
    #[must_use]
    pub fn not_displayed<'a>(&self, components: &'a ComponentMap) -> Vec<&'a str> {
        let mut remaining: Vec<&str> = components.keys().collect();
        let displayed = self
            .0
            .iter()
            .flat_map(LayoutRow::components)
            .filter(|name| is_enabled(components, name));
        for name in displayed {
            if let Some(index) = remaining.iter().position(|candidate| *candidate == name) {
                remaining.remove(index);
            }
        }
        remaining
    }
}

fn is_enabled(components: &ComponentMap, name: &str) -> bool {
    components
        .get(name)
        .is_some_and(ComponentConfig::is_enabled)
}

impl FromIterator<LayoutRow> for LayoutGrid {
    fn from_iter<I: IntoIterator<Item = LayoutRow>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'de> Deserialize<'de> for LayoutGrid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        coerce::layout(&raw).ok_or_else(|| D::Error::custom("address layout must be a sequence"))
    }
}

//! Address components: the recognised keys, their per-key configuration, and
//! the ordered map that stores them.

mod map;
mod registry;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use map::ComponentMap;
pub use registry::ComponentRegistry;

/// Keys of the components known to the registry, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKey {
    /// First street line.
    Address1,
    /// Second street line.
    Address2,
    /// Third street line.
    Address3,
    /// City or locality.
    City,
    /// State, province, or region.
    State,
    /// Postal or ZIP code.
    PostalCode,
    /// Country name.
    Country,
}

impl ComponentKey {
    /// Every registry key in registry order.
    pub const ALL: [Self; 7] = [
        Self::Address1,
        Self::Address2,
        Self::Address3,
        Self::City,
        Self::State,
        Self::PostalCode,
        Self::Country,
    ];

    /// Returns the storage name of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Address1 => "address1",
            Self::Address2 => "address2",
            Self::Address3 => "address3",
            Self::City => "city",
            Self::State => "state",
            Self::PostalCode => "postal_code",
            Self::Country => "country",
        }
    }

    /// Message identifier used to localise the component label.
    #[must_use]
    pub const fn label_id(self) -> &'static str {
        match self {
            Self::Address1 => "component.address1",
            Self::Address2 => "component.address2",
            Self::Address3 => "component.address3",
            Self::City => "component.city",
            Self::State => "component.state",
            Self::PostalCode => "component.postal_code",
            Self::Country => "component.country",
        }
    }

    /// English label used when no translation is available.
    #[must_use]
    pub const fn fallback_label(self) -> &'static str {
        match self {
            Self::Address1 => "Address 1",
            Self::Address2 => "Address 2",
            Self::Address3 => "Address 3",
            Self::City => "City",
            Self::State => "State",
            Self::PostalCode => "Postal Code",
            Self::Country => "Country",
        }
    }

    /// Separator placed after the component in API output by default.
    #[must_use]
    pub const fn default_separator(self) -> &'static str {
        match self {
            Self::City => ",",
            _ => "",
        }
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string does not name a registry component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown address component '{0}'")]
pub struct UnknownComponentKey(pub String);

impl FromStr for ComponentKey {
    type Err = UnknownComponentKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| UnknownComponentKey(value.to_owned()))
    }
}

/// Configuration of a single address component.
///
/// Every attribute is optional because stored configuration may be partial.
/// Defaulting fills whole components, never single attributes, so a stored
/// component keeps exactly the attributes it was saved with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Label shown next to the input and in the admin UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Value used when nothing is stored for the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Whether the component is rendered at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// CSS class applied to the rendered element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Text appended after the value in API output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

impl ComponentConfig {
    /// Builds a fully specified, enabled component.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        class: impl Into<String>,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            label: Some(label.into()),
            default_value: Some(String::new()),
            enabled: Some(true),
            class: Some(class.into()),
            separator: Some(separator.into()),
        }
    }

    /// Returns a copy with `enabled` replaced.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Returns a copy with `default_value` replaced.
    #[must_use]
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Label text, empty when unset.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or_default()
    }

    /// Default value, empty when unset.
    #[must_use]
    pub fn default_value(&self) -> &str {
        self.default_value.as_deref().unwrap_or_default()
    }

    /// CSS class, empty when unset.
    #[must_use]
    pub fn class(&self) -> &str {
        self.class.as_deref().unwrap_or_default()
    }

    /// Separator, empty when unset.
    #[must_use]
    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or_default()
    }

    /// A component without an explicit `enabled` flag is treated as disabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self.enabled, Some(true))
    }
}

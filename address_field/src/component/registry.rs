//! Default component configuration.

use super::{ComponentConfig, ComponentKey, ComponentMap};
use crate::localizer::{Localizer, NoOpLocalizer};

/// The default configuration of every recognised component.
///
/// The registry is the merge target for stored configuration. Labels are
/// resolved once, at construction, through the supplied [`Localizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRegistry {
    defaults: ComponentMap,
}

impl ComponentRegistry {
    /// Builds the registry, localising labels with `localizer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use address_field::{ComponentRegistry, NoOpLocalizer};
    ///
    /// let registry = ComponentRegistry::new(&NoOpLocalizer::new());
    /// let city = registry.defaults().get("city").expect("city is registered");
    /// assert_eq!(city.label(), "City");
    /// assert_eq!(city.separator(), ",");
    /// ```
    #[must_use]
    pub fn new(localizer: &dyn Localizer) -> Self {
        let defaults = ComponentKey::ALL
            .into_iter()
            .map(|key| {
                let label = localizer.message(key.label_id(), None, key.fallback_label());
                (
                    key.as_str(),
                    ComponentConfig::new(label, key.as_str(), key.default_separator()),
                )
            })
            .collect();
        Self { defaults }
    }

    /// Default component map in registry order.
    #[must_use]
    pub const fn defaults(&self) -> &ComponentMap {
        &self.defaults
    }

    /// Registry keys in registry order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.defaults.keys()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new(&NoOpLocalizer::new())
    }
}

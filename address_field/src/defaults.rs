//! Back-filling stored field configuration from the registry.

use crate::component::ComponentRegistry;
use crate::field::{FieldDefinition, ResolvedField};
use crate::layout::LayoutGrid;

/// Returns `field` with every missing setting filled in.
///
/// - Stored components are laid over the registry defaults. Registry keys
///   the field lacks are added whole; stored components are kept exactly as
///   stored, including any attributes they lack. Unknown keys are kept.
/// - A stored layout is used verbatim; otherwise the standard grid applies.
///
/// The input is never modified and the operation is idempotent.
///
/// # Examples
///
/// ```rust
/// use address_field::{ComponentConfig, ComponentMap, ComponentRegistry, FieldDefinition};
/// use address_field::ensure_defaults;
///
/// let registry = ComponentRegistry::default();
/// let hidden = ComponentConfig::default().with_enabled(false);
/// let stored = ComponentMap::from_iter([("city", hidden)]);
/// let field = FieldDefinition::new("office").with_components(stored);
///
/// let defaulted = ensure_defaults(&field, &registry);
/// let components = defaulted.address_components.as_ref().expect("always present");
/// assert_eq!(components.len(), 7);
/// assert_eq!(components.get("city").and_then(|c| c.label.as_deref()), None);
/// assert_eq!(ensure_defaults(&defaulted, &registry), defaulted);
/// ```
#[must_use]
pub fn ensure_defaults(field: &FieldDefinition, registry: &ComponentRegistry) -> FieldDefinition {
    field.resolve(registry).into()
}

impl FieldDefinition {
    /// Defaults the definition and exposes it as a [`ResolvedField`].
    #[must_use]
    pub fn resolve(&self, registry: &ComponentRegistry) -> ResolvedField {
        let components = self.address_components.as_ref().map_or_else(
            || {
                tracing::debug!(field = %self.name, "using default address components");
                registry.defaults().clone()
            },
            |stored| stored.overlay_on(registry.defaults()),
        );
        let layout = self.address_layout.clone().unwrap_or_else(|| {
            tracing::debug!(field = %self.name, "using standard address layout");
            LayoutGrid::standard()
        });
        ResolvedField::new(self.name.clone(), components, layout)
    }
}

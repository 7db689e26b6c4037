//! Core crate for the configurable address field.
//!
//! The crate models a multi-component address field for CMS field
//! frameworks: a registry of address components, a layout grid arranging
//! them into rows, and the renderers a field host invokes to draw the edit
//! form, the admin options panel, and the public HTML representation of a
//! stored address.
//!
//! Every operation starts from [`ensure_defaults`], which back-fills missing
//! configuration from the [`ComponentRegistry`] and the standard
//! [`LayoutGrid`]. Hosts usually interact through [`AddressField`], which
//! bundles the registry, a [`Localizer`], and the loaded
//! [`AddressFieldSettings`].
//!
//! ```rust
//! use address_field::{AddressValue, ComponentRegistry, FieldDefinition, ValueEscaping};
//! use address_field::{format_for_api, load_value};
//! use serde_json::json;
//!
//! let registry = ComponentRegistry::default();
//! let field = FieldDefinition::new("office");
//! let stored = json!({"address1": "1 Main St", "city": "Denver", "state": "CO"});
//! let value = load_value(&stored, &field, &registry);
//! let html = format_for_api(&value, &field, &registry, ValueEscaping::Escaped);
//! assert!(html.starts_with(r#"<div class="address_row"><span class="address1">1 Main St </span>"#));
//! ```

mod coerce;
mod component;
mod defaults;
mod error;
mod field;
mod layout;
mod localizer;
pub mod markup;
mod ordered;
mod plugin;
mod render;
mod settings;
mod value;

pub use component::{
    ComponentConfig, ComponentKey, ComponentMap, ComponentRegistry, UnknownComponentKey,
};
pub use defaults::ensure_defaults;
pub use error::{AddressFieldError, AddressFieldResult};
pub use field::{FieldDefinition, ResolvedField};
pub use layout::{LayoutGrid, LayoutRow};
pub use localizer::{
    Catalogue, FluentLocalizer, FluentLocalizerError, LocalizationArgs, Localizer, NoOpLocalizer,
};
pub use plugin::{AddressField, AssetManifest, FieldTypeInfo, ScriptAsset, StyleAsset};
pub use render::{ValueEscaping, format_for_api, render_edit, render_options};
pub use settings::{AddressFieldSettings, ENV_PREFIX};
pub use value::{AddressValue, load_value};

pub use fluent_bundle::FluentValue;
pub use unic_langid::{LanguageIdentifier, langid};

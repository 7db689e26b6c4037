//! Host-facing field type.
//!
//! [`AddressField`] is built once per process and answers the host's field
//! callbacks. It owns the component registry, the localiser labels resolve
//! through, and the loaded settings.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::component::ComponentRegistry;
use crate::error::AddressFieldResult;
use crate::field::FieldDefinition;
use crate::localizer::{FluentLocalizer, Localizer};
use crate::render::{self, messages};
use crate::settings::AddressFieldSettings;
use crate::value::{self, AddressValue};

/// Machine name the field type registers under.
pub(crate) const FIELD_TYPE_NAME: &str = "address-field";
/// Text domain of the field type's translations.
const TEXT_DOMAIN: &str = "acf-address-field";
/// Handle shared by the stylesheet and the script.
const ASSET_HANDLE: &str = "acf-address-field";

/// Registration metadata for the field type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldTypeInfo {
    /// Machine name.
    pub name: &'static str,
    /// Localised display label.
    pub label: String,
    /// Localised field picker category.
    pub category: String,
    /// Plugin version.
    pub version: String,
    /// Translation text domain.
    pub text_domain: &'static str,
}

/// Stylesheet enqueued on the field group admin screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleAsset {
    /// Registration handle.
    pub handle: &'static str,
    /// Absolute or host-relative URI.
    pub src: String,
    /// Version appended by the host for cache busting.
    pub version: String,
}

/// Script enqueued on the field group admin screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptAsset {
    /// Registration handle.
    pub handle: &'static str,
    /// Absolute or host-relative URI.
    pub src: String,
    /// Handles that must load first.
    pub dependencies: Vec<&'static str>,
    /// Version appended by the host for cache busting.
    pub version: String,
}

/// Assets the options panel needs for drag-and-drop layout editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetManifest {
    /// Panel stylesheet.
    pub style: StyleAsset,
    /// Panel script.
    pub script: ScriptAsset,
}

/// The address field type as seen by the host.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use address_field::{AddressField, AddressFieldSettings, FieldDefinition, NoOpLocalizer};
/// use serde_json::json;
///
/// let plugin = AddressField::new(AddressFieldSettings::default(), Arc::new(NoOpLocalizer));
/// let field = FieldDefinition::new("office");
/// let value = plugin.load_value(&json!({"city": "Denver"}), 42, &field);
/// assert_eq!(value.get("city"), Some("Denver"));
/// ```
#[derive(Clone)]
pub struct AddressField {
    registry: ComponentRegistry,
    localizer: Arc<dyn Localizer>,
    settings: AddressFieldSettings,
}

impl AddressField {
    /// Builds the field type with an injected localiser.
    #[must_use]
    pub fn new(settings: AddressFieldSettings, localizer: Arc<dyn Localizer>) -> Self {
        let registry = ComponentRegistry::new(localizer.as_ref());
        Self {
            registry,
            localizer,
            settings,
        }
    }

    /// Builds the field type with the embedded catalogue for
    /// `settings.locale`.
    ///
    /// # Errors
    ///
    /// Returns an error when the locale does not parse or has no embedded
    /// catalogue.
    pub fn from_settings(settings: AddressFieldSettings) -> AddressFieldResult<Self> {
        let localizer = FluentLocalizer::embedded(settings.language()?)?;
        Ok(Self::new(settings, Arc::new(localizer)))
    }

    /// Registration metadata.
    #[must_use]
    pub fn info(&self) -> FieldTypeInfo {
        FieldTypeInfo {
            name: FIELD_TYPE_NAME,
            label: messages::FIELD_TYPE_LABEL.resolve(self.localizer.as_ref()),
            category: messages::FIELD_TYPE_CATEGORY.resolve(self.localizer.as_ref()),
            version: self.settings.version.clone(),
            text_domain: TEXT_DOMAIN,
        }
    }

    /// Stylesheet and script for the field group admin screen.
    #[must_use]
    pub fn assets(&self) -> AssetManifest {
        let base = self.settings.base_uri.as_str();
        AssetManifest {
            style: StyleAsset {
                handle: ASSET_HANDLE,
                src: format!("{base}address-field.css"),
                version: self.settings.version.clone(),
            },
            script: ScriptAsset {
                handle: ASSET_HANDLE,
                src: format!("{base}address-field.js"),
                dependencies: vec!["jquery-ui-sortable"],
                version: self.settings.version.clone(),
            },
        }
    }

    /// Edit form for a post metabox.
    #[must_use]
    pub fn render_field(&self, field: &FieldDefinition, value: &AddressValue) -> String {
        render::render_edit(field, value, &self.registry)
    }

    /// Options panel for the field group editor.
    #[must_use]
    pub fn render_options(&self, field: &FieldDefinition) -> String {
        render::render_options(field, &self.registry, self.localizer.as_ref())
    }

    /// Loads a stored value, filling components the store lacks with their
    /// default values. `post_id` is accepted for host parity only.
    #[must_use]
    pub fn load_value(
        &self,
        raw: &Value,
        post_id: impl fmt::Display,
        field: &FieldDefinition,
    ) -> AddressValue {
        tracing::debug!(field = %field.name, %post_id, "loading address value");
        value::load_value(raw, field, &self.registry)
    }

    /// Formats a loaded value for API consumers using the configured
    /// escaping mode.
    #[must_use]
    pub fn format_value_for_api(
        &self,
        values: &AddressValue,
        post_id: impl fmt::Display,
        field: &FieldDefinition,
    ) -> String {
        tracing::debug!(field = %field.name, %post_id, "formatting address value");
        let escaping = self.settings.value_escaping();
        render::format_for_api(values, field, &self.registry, escaping)
    }

    /// Component registry built from the localiser.
    #[must_use]
    pub const fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Settings the field was built with.
    #[must_use]
    pub const fn settings(&self) -> &AddressFieldSettings {
        &self.settings
    }
}

impl fmt::Debug for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressField")
            .field("registry", &self.registry)
            .field("localizer", &"<localizer>")
            .field("settings", &self.settings)
            .finish()
    }
}

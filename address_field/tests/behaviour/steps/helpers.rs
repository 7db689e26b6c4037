//! Helpers shared by the step modules.

use crate::fixtures::AddressContext;
use address_field::{AddressValue, ComponentConfig, ComponentKey, FieldDefinition, load_value};
use anyhow::{Result, anyhow};
use serde_json::Value;

/// Applies `update` to the field under construction.
pub fn update_field(
    context: &AddressContext,
    update: impl FnOnce(FieldDefinition) -> FieldDefinition,
) -> Result<()> {
    let field = context
        .field
        .take()
        .ok_or_else(|| anyhow!("a field must be declared first"))?;
    context.field.set(update(field));
    Ok(())
}

/// Stores `config` for `key`, replacing any earlier configuration.
pub fn configure_component(
    context: &AddressContext,
    key: &str,
    config: ComponentConfig,
) -> Result<()> {
    update_field(context, |mut field| {
        field
            .address_components
            .get_or_insert_with(Default::default)
            .insert(key, config);
        field
    })
}

/// Registry defaults for `key`, or a bare configuration for unknown keys.
pub fn registry_default(key: &str) -> ComponentConfig {
    AddressContext::registry()
        .defaults()
        .get(key)
        .cloned()
        .unwrap_or_default()
}

/// Fallback label for `key`, or the key itself for unknown keys.
pub fn label_for(key: &str) -> String {
    key.parse::<ComponentKey>().map_or_else(
        |_| key.to_owned(),
        |known| known.fallback_label().to_owned(),
    )
}

/// Field declared by the scenario.
pub fn field(context: &AddressContext) -> Result<FieldDefinition> {
    context
        .field
        .get()
        .ok_or_else(|| anyhow!("a field must be declared first"))
}

/// Loads the scenario's stored value against its field.
pub fn load(context: &AddressContext) -> Result<AddressValue> {
    let raw = context.stored.get().map_or(Value::Null, Value::Object);
    let definition = field(context)?;
    Ok(load_value(&raw, &definition, &AddressContext::registry()))
}

/// Last rendered markup.
pub fn output(context: &AddressContext) -> Result<String> {
    context
        .output
        .get()
        .ok_or_else(|| anyhow!("nothing has been rendered"))
}

//! Steps declaring field definitions and checking defaulting.

use super::helpers::{configure_component, field, label_for, registry_default, update_field};
use crate::fixtures::AddressContext;
use address_field::{ComponentConfig, FieldDefinition, LayoutGrid, LayoutRow, ensure_defaults};
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{list, normalize_scalar};

#[given("a field named {name}")]
fn field_named(context: &AddressContext, name: String) {
    let definition = FieldDefinition::new(normalize_scalar(&name));
    context.field.set(definition);
}

#[given("component {key} is stored as disabled")]
fn component_disabled(context: &AddressContext, key: String) -> Result<()> {
    let config = ComponentConfig {
        enabled: Some(false),
        ..ComponentConfig::default()
    };
    configure_component(context, &normalize_scalar(&key), config)
}

#[given("component {key} uses class {class} and separator {separator}")]
fn component_with_class(
    context: &AddressContext,
    key: String,
    class: String,
    separator: String,
) -> Result<()> {
    let name = normalize_scalar(&key);
    let config = ComponentConfig::new(
        label_for(&name),
        normalize_scalar(&class),
        normalize_scalar(&separator),
    );
    configure_component(context, &name, config)
}

#[given("component {key} defaults to {text}")]
fn component_default_value(context: &AddressContext, key: String, text: String) -> Result<()> {
    let name = normalize_scalar(&key);
    let config = registry_default(&name).with_default_value(normalize_scalar(&text));
    configure_component(context, &name, config)
}

#[given("the layout has lines {lines}")]
fn layout_lines(context: &AddressContext, lines: String) -> Result<()> {
    let rows: Vec<LayoutRow> = normalize_scalar(&lines)
        .split('|')
        .map(|line| LayoutRow::new(list(line)))
        .collect();
    let layout = LayoutGrid::new(rows);
    update_field(context, |definition| definition.with_layout(layout))
}

#[when("the field is defaulted")]
fn field_defaulted(context: &AddressContext) -> Result<()> {
    let defaulted = ensure_defaults(&field(context)?, &AddressContext::registry());
    context.defaulted.set(defaulted);
    Ok(())
}

fn defaulted(context: &AddressContext) -> Result<FieldDefinition> {
    context
        .defaulted
        .get()
        .ok_or_else(|| anyhow!("the field has not been defaulted"))
}

#[then("every registry component is configured")]
fn every_component_configured(context: &AddressContext) -> Result<()> {
    let resolved = defaulted(context)?;
    let components = resolved
        .address_components
        .ok_or_else(|| anyhow!("defaulting must produce components"))?;
    for key in AddressContext::registry().keys() {
        ensure!(components.contains_key(key), "component {key} is missing");
    }
    ensure!(resolved.address_layout.is_some(), "defaulting must produce a layout");
    Ok(())
}

#[then("component {key} has no label")]
fn component_without_label(context: &AddressContext, key: String) -> Result<()> {
    let name = normalize_scalar(&key);
    let label = defaulted(context)?
        .address_components
        .and_then(|components| components.get(&name).map(|config| config.label.clone()))
        .ok_or_else(|| anyhow!("component {name} is missing"))?;
    ensure!(label.is_none(), "expected no label for {name}, found {label:?}");
    Ok(())
}

#[then("defaulting again changes nothing")]
fn defaulting_is_idempotent(context: &AddressContext) -> Result<()> {
    let once = defaulted(context)?;
    let twice = ensure_defaults(&once, &AddressContext::registry());
    ensure!(once == twice, "second defaulting changed the field");
    Ok(())
}

#[then("the components are ordered {keys}")]
fn components_ordered(context: &AddressContext, keys: String) -> Result<()> {
    let components = defaulted(context)?
        .address_components
        .ok_or_else(|| anyhow!("defaulting must produce components"))?;
    let actual: Vec<&str> = components.keys().collect();
    let expected = list(&keys);
    ensure!(actual == expected, "components ordered {actual:?}; expected {expected:?}");
    Ok(())
}

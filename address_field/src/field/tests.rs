//! Unit tests for field definitions and the defaulting engine.

use super::*;
use crate::component::ComponentRegistry;
use crate::defaults::ensure_defaults;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn registry() -> ComponentRegistry {
    ComponentRegistry::default()
}

fn sample_definitions() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::new("empty"),
        FieldDefinition::from_value(&json!({
            "name": "partial",
            "address_components": {"city": {"enabled": false}, "suite": {"label": "Suite"}},
        })),
        FieldDefinition::from_value(&json!({
            "name": "custom_layout",
            "address_layout": [["postal_code", "city"], [], ["", "bogus"]],
        })),
        FieldDefinition::from_value(&json!({
            "name": "malformed",
            "address_components": 12,
            "address_layout": "row",
        })),
    ]
}

#[rstest]
fn defaulting_is_idempotent(registry: ComponentRegistry) {
    for field in sample_definitions() {
        let once = ensure_defaults(&field, &registry);
        let twice = ensure_defaults(&once, &registry);
        assert_eq!(once, twice, "{} should default idempotently", field.name);
    }
}

#[rstest]
fn defaulting_adds_every_registry_key(registry: ComponentRegistry) {
    for field in sample_definitions() {
        let defaulted = ensure_defaults(&field, &registry);
        let components = defaulted
            .address_components
            .expect("components are always present after defaulting");
        for key in registry.keys() {
            assert!(components.contains_key(key), "{} lacks {key}", field.name);
        }
        assert!(defaulted.address_layout.is_some());
    }
}

#[rstest]
fn stored_components_are_not_backfilled_per_attribute(registry: ComponentRegistry) {
    let field = FieldDefinition::from_value(&json!({
        "name": "office",
        "address_components": {"city": {"enabled": false}},
    }));

    let resolved = field.resolve(&registry);
    let city = resolved.components().get("city").expect("city is present");

    assert_eq!(city.label, None);
    assert_eq!(city.class, None);
    assert_eq!(city.enabled, Some(false));
    let state = resolved
        .components()
        .get("state")
        .expect("state is back-filled");
    assert_eq!(state.label(), "State");
}

#[rstest]
fn unknown_component_keys_are_preserved_after_registry_keys(registry: ComponentRegistry) {
    let field = FieldDefinition::from_value(&json!({
        "name": "office",
        "address_components": {"suite": {"label": "Suite", "enabled": 1}, "city": {}},
    }));

    let keys: Vec<String> = field
        .resolve(&registry)
        .components()
        .keys()
        .map(str::to_owned)
        .collect();

    assert_eq!(keys.len(), 8);
    assert_eq!(keys.get(3).map(String::as_str), Some("city"));
    assert_eq!(keys.last().map(String::as_str), Some("suite"));
}

#[rstest]
fn stored_layout_is_used_verbatim(registry: ComponentRegistry) {
    let layout = LayoutGrid::new([LayoutRow::new(["bogus", ""]), LayoutRow::default()]);
    let field = FieldDefinition::new("office").with_layout(layout.clone());
    assert_eq!(field.resolve(&registry).layout(), &layout);
}

#[rstest]
fn missing_layout_uses_standard_grid(registry: ComponentRegistry) {
    let resolved = FieldDefinition::new("office").resolve(&registry);
    assert_eq!(resolved.layout(), &LayoutGrid::standard());
    assert_eq!(resolved.name(), "office");
}

#[rstest]
fn defaulting_leaves_the_input_untouched(registry: ComponentRegistry) {
    let field = FieldDefinition::new("office");
    let _defaulted = ensure_defaults(&field, &registry);
    assert_eq!(field, FieldDefinition::new("office"));
}

#[rstest]
fn visible_components_skip_placeholders_unknown_and_disabled(registry: ComponentRegistry) {
    let field = FieldDefinition::from_value(&json!({
        "name": "office",
        "address_components": {"state": {"enabled": "0"}},
        "address_layout": [["", "city", "bogus", "state", "country"]],
    }));
    let resolved = field.resolve(&registry);
    let row = resolved.layout().rows().first().expect("one row");

    let names: Vec<&str> = resolved
        .visible_components(row)
        .map(|(name, _)| name)
        .collect();

    assert_eq!(names, ["city", "country"]);
}

#[rstest]
#[case(json!({"name": 17}), "17")]
#[case(json!({"name": ["x"]}), "")]
#[case(json!("not-an-object"), "")]
fn name_is_coerced(#[case] raw: Value, #[case] expected: &str) {
    assert_eq!(FieldDefinition::from_value(&raw).name, expected);
}

#[rstest]
fn deserialisation_is_lenient() {
    let field: FieldDefinition = serde_json::from_value(json!({
        "name": "office",
        "address_components": [1, 2, 3],
    }))
    .expect("lenient deserialisation never fails on shape");
    assert_eq!(field, FieldDefinition::new("office"));
}

#[rstest]
fn invalid_json_text_is_an_error() {
    let err = FieldDefinition::from_json_str("{name:").expect_err("syntax error");
    assert!(err.to_string().starts_with("failed to parse JSON"));
}

#[rstest]
fn serialisation_omits_absent_settings() {
    let json = serde_json::to_value(FieldDefinition::new("office")).expect("serialises");
    assert_eq!(json, json!({"name": "office"}));
}

//! Coercion of raw host data into typed configuration.
//!
//! Host frameworks persist field settings as loosely typed maps: booleans
//! arrive as `1`, `"1"`, or `""`, and lists arrive as objects keyed by
//! position. Everything is converted here, once, so the rest of the crate
//! only sees typed values. Nothing in this module fails; malformed data is
//! dropped and the caller falls back to defaults.

use std::num::FpCategory;

use serde_json::{Map, Value};

use crate::component::{ComponentConfig, ComponentMap};
use crate::layout::{LayoutGrid, LayoutRow};

/// Reads a component map from a JSON object. Other shapes yield `None`.
pub(crate) fn components(raw: &Value) -> Option<ComponentMap> {
    let Value::Object(entries) = raw else {
        tracing::debug!(kind = kind(raw), "address components are not a mapping");
        return None;
    };
    Some(
        entries
            .iter()
            .map(|(name, entry)| (name.as_str(), component(entry)))
            .collect(),
    )
}

/// Reads one component. Non-object entries become attribute-less configs.
pub(crate) fn component(raw: &Value) -> ComponentConfig {
    let Value::Object(attributes) = raw else {
        return ComponentConfig::default();
    };
    ComponentConfig {
        label: string_attribute(attributes, "label"),
        default_value: string_attribute(attributes, "default_value"),
        enabled: attributes.get("enabled").map(truthy),
        class: string_attribute(attributes, "class"),
        separator: string_attribute(attributes, "separator"),
    }
}

/// Reads a layout from a JSON array or a position-keyed object.
pub(crate) fn layout(raw: &Value) -> Option<LayoutGrid> {
    let Some(rows) = collection(raw) else {
        tracing::debug!(kind = kind(raw), "address layout is not a sequence");
        return None;
    };
    Some(rows.map(row).collect())
}

fn row(raw: &Value) -> LayoutRow {
    collection(raw).map_or_else(LayoutRow::default, |slots| {
        slots.map(|slot| scalar(slot).unwrap_or_default()).collect()
    })
}

/// Stringifies strings, numbers, and booleans. Other values yield `None`.
pub(crate) fn scalar(raw: &Value) -> Option<String> {
    match raw {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(true) => Some("1".to_owned()),
        Value::Bool(false) => Some(String::new()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Host truthiness: `false`, `0`, `""`, `"0"`, `null`, and empty
/// collections are false.
pub(crate) fn truthy(raw: &Value) -> bool {
    match raw {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|n| n.classify() != FpCategory::Zero),
        Value::String(text) => truthy_text(text),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

fn string_attribute(attributes: &Map<String, Value>, name: &str) -> Option<String> {
    attributes.get(name).and_then(scalar)
}

fn collection(raw: &Value) -> Option<Box<dyn Iterator<Item = &Value> + '_>> {
    match raw {
        Value::Array(items) => Some(Box::new(items.iter())),
        Value::Object(entries) => Some(Box::new(entries.values())),
        _ => None,
    }
}

const fn kind(raw: &Value) -> &'static str {
    match raw {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Host truthiness of a string.
pub(crate) fn truthy_text(text: &str) -> bool {
    !(text.is_empty() || text == "0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(true), true)]
    #[case(json!(1), true)]
    #[case(json!("1"), true)]
    #[case(json!("yes"), true)]
    #[case(json!(false), false)]
    #[case(json!(0), false)]
    #[case(json!("0"), false)]
    #[case(json!(""), false)]
    #[case(json!(null), false)]
    #[case(json!([]), false)]
    fn truthiness_follows_host_rules(#[case] raw: Value, #[case] expected: bool) {
        assert_eq!(truthy(&raw), expected);
    }

    #[rstest]
    fn components_keep_object_order_and_partial_attributes() {
        let raw = json!({
            "state": {"enabled": "1", "class": "st"},
            "city": {"enabled": 0},
            "broken": "not-an-object",
        });
        let map = components(&raw).expect("object input");

        assert_eq!(map.keys().collect::<Vec<_>>(), ["state", "city", "broken"]);
        let state = map.get("state").expect("present");
        assert_eq!(state.enabled, Some(true));
        assert_eq!(state.class.as_deref(), Some("st"));
        assert_eq!(state.label, None);
        assert_eq!(map.get("city").and_then(|c| c.enabled), Some(false));
        assert_eq!(map.get("broken"), Some(&ComponentConfig::default()));
    }

    #[rstest]
    #[case(json!("address1"))]
    #[case(json!(42))]
    #[case(json!(null))]
    fn non_mapping_components_are_rejected(#[case] raw: Value) {
        assert!(components(&raw).is_none());
    }

    #[rstest]
    fn layout_accepts_position_keyed_objects() {
        let raw = json!({
            "0": {"0": "address1"},
            "1": [],
            "2": ["city", null, "", 7],
            "3": "junk",
        });
        let grid = layout(&raw).expect("object input");
        let rows: Vec<Vec<&str>> = grid
            .rows()
            .iter()
            .map(|row| row.slots().iter().map(String::as_str).collect())
            .collect();
        assert_eq!(
            rows,
            vec![vec!["address1"], vec![], vec!["city", "", "", "7"], vec![]]
        );
    }

    #[rstest]
    fn scalar_stringifies_numbers_and_drops_collections() {
        assert_eq!(scalar(&json!(80_202)), Some("80202".to_owned()));
        assert_eq!(scalar(&json!({"nested": true})), None);
    }
}

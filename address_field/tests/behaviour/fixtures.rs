//! Shared fixtures for the behavioural suite.

use address_field::{AddressValue, ComponentRegistry, FieldDefinition, ValueEscaping};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::{Map, Value};

/// Scenario state threaded through field, value, and renderer steps.
#[derive(Debug, Default, ScenarioState)]
pub struct AddressContext {
    /// Field definition under construction.
    pub field: Slot<FieldDefinition>,
    /// Raw stored value under construction.
    pub stored: Slot<Map<String, Value>>,
    /// Escaping mode for API output; unset means the default.
    pub escaping: Slot<ValueEscaping>,
    /// Result of defaulting the field.
    pub defaulted: Slot<FieldDefinition>,
    /// Result of loading the stored value.
    pub loaded: Slot<AddressValue>,
    /// Markup produced by the last renderer.
    pub output: Slot<String>,
}

impl AddressContext {
    /// Registry every step resolves against.
    pub fn registry() -> ComponentRegistry {
        ComponentRegistry::default()
    }
}

/// Creates a clean context for each scenario.
#[fixture]
pub fn context() -> AddressContext {
    AddressContext::default()
}

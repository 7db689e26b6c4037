//! Steps covering stored values and the value loader.

use super::helpers::load;
use crate::fixtures::AddressContext;
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use serde_json::Value;
use test_helpers::text::normalize_scalar;

#[given("a stored value where {key} is {text}")]
fn stored_entry(context: &AddressContext, key: String, text: String) {
    let mut stored = context.stored.take().unwrap_or_default();
    let entry = Value::String(normalize_scalar(&text));
    stored.insert(normalize_scalar(&key), entry);
    context.stored.set(stored);
}

#[when("the value is loaded")]
fn value_loaded(context: &AddressContext) -> Result<()> {
    context.loaded.set(load(context)?);
    Ok(())
}

#[then("the loaded {key} is {text}")]
fn loaded_entry(context: &AddressContext, key: String, text: String) -> Result<()> {
    let name = normalize_scalar(&key);
    let expected = normalize_scalar(&text);
    let actual = context
        .loaded
        .with_ref(|value| value.get(&name).map(str::to_owned))
        .ok_or_else(|| anyhow!("the value has not been loaded"))?;
    ensure!(
        actual.as_deref() == Some(expected.as_str()),
        "loaded {name} = {actual:?}; expected {expected:?}"
    );
    Ok(())
}

#[then("the loaded value has {count} entries")]
fn loaded_entry_count(context: &AddressContext, count: usize) -> Result<()> {
    let actual = context
        .loaded
        .with_ref(address_field::AddressValue::len)
        .ok_or_else(|| anyhow!("the value has not been loaded"))?;
    ensure!(actual == count, "loaded {actual} entries; expected {count}");
    Ok(())
}

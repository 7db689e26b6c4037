//! Steps driving the edit form, options panel, and API formatter.

use super::helpers::{field, load, output};
use crate::fixtures::AddressContext;
use address_field::{NoOpLocalizer, ValueEscaping, format_for_api, render_edit, render_options};
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use test_helpers::markup::{attribute_values, between, count_occurrences};
use test_helpers::text::{list, normalize_scalar};

#[given("legacy escaping")]
fn legacy_escaping(context: &AddressContext) {
    context.escaping.set(ValueEscaping::Legacy);
}

#[when("the value is formatted for the API")]
fn formatted_for_api(context: &AddressContext) -> Result<()> {
    let escaping = context.escaping.get().unwrap_or_default();
    let html = format_for_api(
        &load(context)?,
        &field(context)?,
        &AddressContext::registry(),
        escaping,
    );
    context.output.set(html);
    Ok(())
}

#[when("the edit form is rendered")]
fn edit_form_rendered(context: &AddressContext) -> Result<()> {
    let definition = field(context)?;
    let html = render_edit(&definition, &load(context)?, &AddressContext::registry());
    context.output.set(html);
    Ok(())
}

#[when("the options panel is rendered")]
fn options_panel_rendered(context: &AddressContext) -> Result<()> {
    let definition = field(context)?;
    let html = render_options(&definition, &AddressContext::registry(), &NoOpLocalizer);
    context.output.set(html);
    Ok(())
}

#[then("the output is {expected}")]
fn output_is(context: &AddressContext, expected: String) -> Result<()> {
    let actual = output(context)?;
    let wanted = normalize_scalar(&expected);
    ensure!(actual == wanted, "rendered {actual:?}; expected {wanted:?}");
    Ok(())
}

#[then("the output contains {fragment}")]
fn output_contains(context: &AddressContext, fragment: String) -> Result<()> {
    let actual = output(context)?;
    let wanted = normalize_scalar(&fragment);
    ensure!(actual.contains(&wanted), "{actual:?} does not contain {wanted:?}");
    Ok(())
}

#[then("the output has {count} address rows")]
fn address_row_count(context: &AddressContext, count: usize) -> Result<()> {
    let actual = count_occurrences(&output(context)?, r#"<div class="address_row">"#);
    ensure!(actual == count, "found {actual} rows; expected {count}");
    Ok(())
}

#[then("the output has {count} text inputs")]
fn text_input_count(context: &AddressContext, count: usize) -> Result<()> {
    let actual = count_occurrences(&output(context)?, r#"<input type="text""#);
    ensure!(actual == count, "found {actual} text inputs; expected {count}");
    Ok(())
}

#[then("the layout inputs are {names}")]
fn layout_inputs(context: &AddressContext, names: String) -> Result<()> {
    let html = output(context)?;
    let grid = between(
        &html,
        r#"<div class="address_layout">"#,
        "<label>Not Displayed:",
    )
    .ok_or_else(|| anyhow!("layout grid missing"))?;
    let actual: Vec<String> = attribute_values(grid, "name")
        .into_iter()
        .filter(|name| name.contains("[address_layout]"))
        .collect();
    let expected = list(&names);
    ensure!(actual == expected, "layout inputs {actual:?}; expected {expected:?}");
    Ok(())
}

#[then("the not displayed components are {keys}")]
fn not_displayed(context: &AddressContext, keys: String) -> Result<()> {
    let html = output(context)?;
    let bucket = between(&html, r#"<ul class="row missing">"#, "</ul>")
        .ok_or_else(|| anyhow!("not displayed list missing"))?;
    let actual = attribute_values(bucket, "name");
    let expected = list(&keys);
    ensure!(actual == expected, "not displayed {actual:?}; expected {expected:?}");
    Ok(())
}

//! Public HTML representation of a stored address.

use crate::coerce;
use crate::component::{ComponentConfig, ComponentRegistry};
use crate::field::FieldDefinition;
use crate::markup::{Attribute, MarkupWriter, escape_html};
use crate::value::AddressValue;

/// How component values are written by [`format_for_api`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueEscaping {
    /// Values are HTML-escaped like every other interpolated string.
    #[default]
    Escaped,
    /// Byte-for-byte compatibility with legacy output: values are written
    /// unescaped, and a class or separator of `""` or `"0"` counts as unset.
    /// A class-less span keeps its stray space (`<span >`). Only use this
    /// when stored values are trusted markup.
    Legacy,
}

/// Formats `values` as one `<div class="address_row">` per non-empty row.
///
/// Each visible component becomes
/// `<span class="{class}">{value}{separator} </span>`; the class attribute is
/// omitted when the class is empty and the separator when the separator is
/// empty. The space before `</span>` is always written.
///
/// # Examples
///
/// ```rust
/// use address_field::{AddressValue, ComponentConfig, ComponentMap, ComponentRegistry};
/// use address_field::{FieldDefinition, LayoutGrid, LayoutRow, ValueEscaping, format_for_api};
///
/// let components = ComponentMap::from_iter([
///     ("city", ComponentConfig::new("City", "city", ",")),
///     ("state", ComponentConfig::new("State", "state", "")),
/// ]);
/// let field = FieldDefinition::new("office")
///     .with_components(components)
///     .with_layout(LayoutGrid::new([LayoutRow::new(["city", "state"])]));
/// let values: AddressValue = [("city", "Denver"), ("state", "CO")].into_iter().collect();
///
/// let registry = ComponentRegistry::default();
/// let html = format_for_api(&values, &field, &registry, ValueEscaping::Escaped);
/// assert_eq!(
///     html,
///     r#"<div class="address_row"><span class="city">Denver, </span><span class="state">CO </span></div>"#,
/// );
/// ```
#[must_use]
pub fn format_for_api(
    values: &AddressValue,
    field: &FieldDefinition,
    registry: &ComponentRegistry,
    escaping: ValueEscaping,
) -> String {
    let resolved = field.resolve(registry);
    let mut writer = MarkupWriter::new();

    for row in resolved.layout().non_empty_rows() {
        writer.open("div", &[Attribute::new("class", "address_row")]);
        for (name, config) in resolved.visible_components(row) {
            let value = values.get(name).unwrap_or_default();
            write_component(&mut writer, config, value, escaping);
        }
        writer.close("div");
    }

    writer.finish()
}

fn write_component(
    writer: &mut MarkupWriter,
    config: &ComponentConfig,
    value: &str,
    escaping: ValueEscaping,
) {
    match escaping {
        ValueEscaping::Escaped => {
            let class = Attribute::non_empty("class", config.class());
            writer.open("span", class.as_slice());
            writer.text(value);
            writer.raw(&escape_html(config.separator()));
        }
        ValueEscaping::Legacy => {
            let class = config.class();
            if coerce::truthy_text(class) {
                writer.open("span", &[Attribute::new("class", class)]);
            } else {
                writer.raw("<span >");
            }
            writer.raw(value);
            if coerce::truthy_text(config.separator()) {
                writer.raw(&escape_html(config.separator()));
            }
        }
    }
    writer.raw(" ");
    writer.close("span");
}

//! Edit form shown inside post metaboxes.

use crate::component::ComponentRegistry;
use crate::field::FieldDefinition;
use crate::markup::{Attribute, MarkupWriter};
use crate::value::AddressValue;

/// Renders one labelled text input per visible component, grouped by row.
///
/// Inputs are named `<field>[<component>]` so the host's form handling
/// stores the submission as a component → text mapping. Rows with no slots
/// are skipped; rows whose slots are all hidden still emit their container.
///
/// # Examples
///
/// ```rust
/// use address_field::{AddressValue, ComponentRegistry, FieldDefinition, LayoutGrid, LayoutRow};
/// use address_field::render_edit;
///
/// let registry = ComponentRegistry::default();
/// let field = FieldDefinition::new("home")
///     .with_layout(LayoutGrid::new([LayoutRow::new(["city"])]));
/// let value: AddressValue = [("city", "Denver")].into_iter().collect();
///
/// assert_eq!(
///     render_edit(&field, &value, &registry),
///     concat!(
///         r#"<div class="address"><div class="address_row">"#,
///         r#"<label class="city">City<input type="text" id="home[city]" name="home[city]" value="Denver" /></label>"#,
///         r#"</div></div><div class="clear"></div>"#,
///     ),
/// );
/// ```
#[must_use]
pub fn render_edit(
    field: &FieldDefinition,
    value: &AddressValue,
    registry: &ComponentRegistry,
) -> String {
    let resolved = field.resolve(registry);
    let mut writer = MarkupWriter::new();

    writer.open("div", &[Attribute::new("class", "address")]);
    for row in resolved.layout().non_empty_rows() {
        writer.open("div", &[Attribute::new("class", "address_row")]);
        for (name, config) in resolved.visible_components(row) {
            let input_name = format!("{}[{name}]", resolved.name());
            let class = Attribute::non_empty("class", config.class());

            writer.open("label", class.as_slice());
            writer.text(config.label());
            writer.void(
                "input",
                &[
                    Attribute::new("type", "text"),
                    Attribute::new("id", &input_name),
                    Attribute::new("name", &input_name),
                    Attribute::new("value", value.get(name).unwrap_or_default()),
                ],
            );
            writer.close("label");
        }
        writer.close("div");
    }
    writer.close("div");
    writer.element("div", &[Attribute::new("class", "clear")], "");

    writer.finish()
}

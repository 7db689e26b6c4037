//! Admin options panel: the component table and the drag-and-drop layout grid.

use crate::component::{ComponentConfig, ComponentRegistry};
use crate::field::{FieldDefinition, ResolvedField};
use crate::localizer::{LocalizationArgs, Localizer};
use crate::markup::{Attribute, MarkupWriter};
use crate::plugin::FIELD_TYPE_NAME;
use fluent_bundle::FluentValue;

/// The grid always shows at least this many lines so components can be
/// dragged into rows the stored layout does not have yet.
const MIN_LAYOUT_LINES: usize = 4;

pub(crate) mod messages {
    //! Message identifiers paired with their English fallbacks.

    use crate::localizer::Localizer;

    #[derive(Debug, Clone, Copy)]
    pub(crate) struct Message {
        pub(crate) id: &'static str,
        pub(crate) fallback: &'static str,
    }

    impl Message {
        const fn new(id: &'static str, fallback: &'static str) -> Self {
            Self { id, fallback }
        }

        pub(crate) fn resolve(self, localizer: &dyn Localizer) -> String {
            localizer.message(self.id, None, self.fallback)
        }
    }

    pub(crate) const FIELD_TYPE_LABEL: Message = Message::new("field_type.label", "Address");
    pub(crate) const FIELD_TYPE_CATEGORY: Message = Message::new("field_type.category", "Layout");

    pub(crate) const COMPONENTS_LABEL: Message =
        Message::new("options.components_label", "Address Components");
    pub(crate) const FIELD: Message = Message::new("options.field", "Field");
    pub(crate) const ENABLED: Message = Message::new("options.enabled", "Enabled");
    pub(crate) const ENABLED_HELP: Message =
        Message::new("options.enabled_help", "Is this component used.");
    pub(crate) const LABEL: Message = Message::new("options.label", "Label");
    pub(crate) const LABEL_HELP: Message = Message::new(
        "options.label_help",
        "Used on the add or edit a post screen.",
    );
    pub(crate) const DEFAULT_VALUE: Message =
        Message::new("options.default_value", "Default Value");
    pub(crate) const DEFAULT_VALUE_HELP: Message = Message::new(
        "options.default_value_help",
        "Default value for this component.",
    );
    pub(crate) const CSS_CLASS: Message = Message::new("options.css_class", "CSS Class");
    pub(crate) const CSS_CLASS_HELP: Message = Message::new(
        "options.css_class_help",
        "Class added to the component when using the api.",
    );
    pub(crate) const SEPARATOR: Message = Message::new("options.separator", "Separator");
    pub(crate) const SEPARATOR_HELP: Message = Message::new(
        "options.separator_help",
        "Text placed after the component when using the api.",
    );

    pub(crate) const LAYOUT_LABEL: Message = Message::new("options.layout_label", "Address Layout");
    pub(crate) const LAYOUT_HELP: Message = Message::new(
        "options.layout_help",
        "Drag address components to the desired location. This controls the layout of the address in post metaboxes and the get_field() api method.",
    );
    pub(crate) const LAYOUT_LINE: &str = "options.layout_line";
    pub(crate) const NOT_DISPLAYED: Message =
        Message::new("options.not_displayed", "Not Displayed:");

    /// Column headings of the component table, in column order.
    pub(crate) const COLUMNS: [Message; 6] =
        [FIELD, ENABLED, LABEL, DEFAULT_VALUE, CSS_CLASS, SEPARATOR];

    /// Help entries listed under the component table label.
    pub(crate) const HELP: [(Message, Message); 5] = [
        (ENABLED, ENABLED_HELP),
        (LABEL, LABEL_HELP),
        (DEFAULT_VALUE, DEFAULT_VALUE_HELP),
        (CSS_CLASS, CSS_CLASS_HELP),
        (SEPARATOR, SEPARATOR_HELP),
    ];
}

/// Text attributes editable from the component table, with the input class
/// each one carries.
const TEXT_ATTRIBUTES: [(&str, &str); 4] = [
    ("label", "address_label"),
    ("default_value", "address_default_value"),
    ("class", "address_class"),
    ("separator", "address_separator"),
];

/// Renders the two options-panel rows: the component table and the layout
/// grid with its "Not Displayed" bucket.
///
/// Inputs follow the host's nested form naming, so a submitted panel yields
/// `fields[<field>][address_components][<component>][<attribute>]` and
/// `fields[<field>][address_layout][<row>][<col>]` entries.
#[must_use]
pub fn render_options(
    field: &FieldDefinition,
    registry: &ComponentRegistry,
    localizer: &dyn Localizer,
) -> String {
    let resolved = field.resolve(registry);
    let mut writer = MarkupWriter::new();
    let row_class = format!("field_option field_option_{FIELD_TYPE_NAME}");

    writer.open("tr", &[Attribute::new("class", &row_class)]);
    write_components_help(&mut writer, localizer);
    writer.open("td", &[]);
    write_components_table(&mut writer, &resolved, localizer);
    writer.close("td");
    writer.close("tr");

    writer.open("tr", &[Attribute::new("class", &row_class)]);
    writer.open("td", &[Attribute::new("class", "label")]);
    writer.element("label", &[], &messages::LAYOUT_LABEL.resolve(localizer));
    writer.element(
        "p",
        &[Attribute::new("class", "description")],
        &messages::LAYOUT_HELP.resolve(localizer),
    );
    writer.void(
        "input",
        &[
            Attribute::new("type", "hidden"),
            Attribute::new("name", "address_layout_key"),
            Attribute::new("value", resolved.name()),
        ],
    );
    writer.close("td");
    writer.open("td", &[]);
    write_layout_grid(&mut writer, &resolved, localizer);
    writer.close("td");
    writer.close("tr");

    writer.finish()
}

fn write_components_help(writer: &mut MarkupWriter, localizer: &dyn Localizer) {
    writer.open("td", &[Attribute::new("class", "label")]);
    writer.element("label", &[], &messages::COMPONENTS_LABEL.resolve(localizer));
    writer.open("p", &[Attribute::new("class", "description")]);
    for (term, help) in messages::HELP {
        writer.element("strong", &[], &term.resolve(localizer));
        writer.raw(": ");
        writer.text(&help.resolve(localizer));
        writer.void("br", &[]);
    }
    writer.close("p");
    writer.close("td");
}

fn write_components_table(
    writer: &mut MarkupWriter,
    resolved: &ResolvedField,
    localizer: &dyn Localizer,
) {
    writer.open("table", &[]);
    for section in ["thead", "tfoot"] {
        writer.open(section, &[]);
        writer.open("tr", &[]);
        for column in messages::COLUMNS {
            writer.element("th", &[], &column.resolve(localizer));
        }
        writer.close("tr");
        writer.close(section);
    }

    writer.open("tbody", &[]);
    for (name, config) in resolved.components() {
        let prefix = format!("fields[{}][address_components][{name}]", resolved.name());
        writer.open("tr", &[]);
        writer.element("td", &[], name);

        writer.open("td", &[]);
        write_enabled_toggle(writer, &format!("{prefix}[enabled]"), config.is_enabled());
        writer.close("td");

        for (attribute, class) in TEXT_ATTRIBUTES {
            writer.open("td", &[]);
            writer.void(
                "input",
                &[
                    Attribute::new("type", "text"),
                    Attribute::new("name", &format!("{prefix}[{attribute}]")),
                    Attribute::new("value", text_attribute(config, attribute)),
                    Attribute::new("class", class),
                ],
            );
            writer.close("td");
        }
        writer.close("tr");
    }
    writer.close("tbody");
    writer.close("table");
}

/// A hidden `0` precedes the checkbox so an unchecked toggle still submits.
fn write_enabled_toggle(writer: &mut MarkupWriter, name: &str, enabled: bool) {
    writer.void(
        "input",
        &[
            Attribute::new("type", "hidden"),
            Attribute::new("name", name),
            Attribute::new("value", "0"),
        ],
    );
    let mut attributes = vec![
        Attribute::new("type", "checkbox"),
        Attribute::new("name", name),
        Attribute::new("value", "1"),
        Attribute::new("class", "address_enabled"),
    ];
    if enabled {
        attributes.push(Attribute::new("checked", "checked"));
    }
    writer.void("input", &attributes);
}

fn text_attribute<'a>(config: &'a ComponentConfig, attribute: &str) -> &'a str {
    match attribute {
        "label" => config.label(),
        "default_value" => config.default_value(),
        "class" => config.class(),
        _ => config.separator(),
    }
}

fn write_layout_grid(
    writer: &mut MarkupWriter,
    resolved: &ResolvedField,
    localizer: &dyn Localizer,
) {
    writer.open("div", &[Attribute::new("class", "address_layout")]);

    let mut line = 0;
    for row in resolved.layout().non_empty_rows() {
        write_line_label(writer, localizer, line);
        writer.open("ul", &[Attribute::new("class", "row")]);
        for (col, (name, config)) in resolved.visible_components(row).enumerate() {
            writer.open(
                "li",
                &[
                    Attribute::new("class", "item"),
                    Attribute::new("name", name),
                ],
            );
            writer.text(config.label());
            writer.void(
                "input",
                &[
                    Attribute::new("type", "hidden"),
                    Attribute::new(
                        "name",
                        &format!("fields[{}][address_layout][{line}][{col}]", resolved.name()),
                    ),
                    Attribute::new("value", name),
                ],
            );
            writer.close("li");
        }
        writer.close("ul");
        line += 1;
    }
    for padding in line..MIN_LAYOUT_LINES {
        write_line_label(writer, localizer, padding);
        writer.element("ul", &[Attribute::new("class", "row")], "");
    }

    writer.element("label", &[], &messages::NOT_DISPLAYED.resolve(localizer));
    writer.open("ul", &[Attribute::new("class", "row missing")]);
    for name in resolved.layout().not_displayed(resolved.components()) {
        let Some(config) = resolved.components().get(name) else {
            continue;
        };
        let class = if config.is_enabled() { "item" } else { "item disabled" };
        writer.element(
            "li",
            &[Attribute::new("class", class), Attribute::new("name", name)],
            config.label(),
        );
    }
    writer.close("ul");

    writer.close("div");
}

fn write_line_label(writer: &mut MarkupWriter, localizer: &dyn Localizer, index: usize) {
    let number = index + 1;
    let mut args: LocalizationArgs<'_> = LocalizationArgs::new();
    args.insert("line", FluentValue::from(number));
    let fallback = format!("Line {number}:");
    let label = localizer.message(messages::LAYOUT_LINE, Some(&args), &fallback);
    writer.element("label", &[], &label);
}

//! CLI entrypoint for `address-field`.

mod cli;
mod fs_helpers;

use std::io::{self, Write};
use std::sync::Arc;

use address_field::{
    AddressField, AddressFieldError, AddressFieldResult, AddressFieldSettings, FieldDefinition,
    FluentLocalizer,
};
use camino::Utf8Path;
use clap::Parser;
use serde_json::Value;

use crate::cli::{Args, Command, ValueInput};

fn main() -> Result<(), AddressFieldError> {
    let args = Args::parse();
    let output = run(&args)?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.write_all(b"\n"))
        .map_err(|err| AddressFieldError::io(Utf8Path::new("<stdout>"), err))
}

fn run(args: &Args) -> AddressFieldResult<String> {
    let plugin = build_field(args)?;

    match &args.command {
        Command::Edit(input) => {
            let (field, raw) = read_value_input(input)?;
            let value = plugin.load_value(&raw, "cli", &field);
            Ok(plugin.render_field(&field, &value))
        }
        Command::Options(input) => {
            let field = read_field(&input.field)?;
            Ok(plugin.render_options(&field))
        }
        Command::Load(input) => {
            let (field, raw) = read_value_input(input)?;
            let value = plugin.load_value(&raw, "cli", &field);
            Ok(serde_json::to_string_pretty(&value)?)
        }
        Command::Api(input) => {
            let (field, raw) = read_value_input(input)?;
            let value = plugin.load_value(&raw, "cli", &field);
            Ok(plugin.format_value_for_api(&value, "cli", &field))
        }
        Command::Assets => Ok(serde_json::to_string_pretty(&plugin.assets())?),
        Command::Info => Ok(serde_json::to_string_pretty(&plugin.info())?),
    }
}

fn build_field(args: &Args) -> AddressFieldResult<AddressField> {
    let settings = load_settings(args)?;
    let Some(path) = &args.messages else {
        return AddressField::from_settings(settings);
    };
    let overrides = fs_helpers::read_to_string(path)?;
    let localizer = FluentLocalizer::layered(settings.language()?, [overrides])?;
    Ok(AddressField::new(settings, Arc::new(localizer)))
}

fn load_settings(args: &Args) -> AddressFieldResult<AddressFieldSettings> {
    let mut settings = AddressFieldSettings::load(args.config.as_deref())?;
    if let Some(locale) = &args.locale {
        settings.locale.clone_from(locale);
    }
    if args.should_use_legacy_escaping {
        settings.escape_api_values = false;
    }
    Ok(settings)
}

fn read_field(path: &Utf8Path) -> AddressFieldResult<FieldDefinition> {
    Ok(FieldDefinition::from_value(&fs_helpers::read_json(path)?))
}

fn read_value_input(input: &ValueInput) -> AddressFieldResult<(FieldDefinition, Value)> {
    let field = read_field(&input.field)?;
    let raw = input
        .value_path()
        .map(fs_helpers::read_json)
        .transpose()?
        .unwrap_or(Value::Null);
    Ok((field, raw))
}

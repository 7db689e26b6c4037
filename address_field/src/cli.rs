//! Command-line interface definitions for `address-field`.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args as ClapArgs, Parser, Subcommand};

/// Parsed CLI arguments for `address-field`.
#[derive(Debug, Parser)]
#[command(name = "address-field")]
#[command(about = "Render address field markup from JSON field definitions")]
#[command(version)]
pub struct Args {
    /// Settings file layered over the built-in defaults.
    #[arg(long, value_name = "path", global = true)]
    pub config: Option<Utf8PathBuf>,
    /// Locale overriding the configured one.
    #[arg(long, value_name = "locale", global = true)]
    pub locale: Option<String>,
    /// Fluent file whose messages override the embedded labels.
    #[arg(long, value_name = "path", global = true)]
    pub messages: Option<Utf8PathBuf>,
    /// Write API values unescaped, matching legacy output byte for byte.
    #[arg(long = "legacy-escaping", global = true)]
    pub should_use_legacy_escaping: bool,
    /// Callback to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Host callbacks exposed on the command line.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the post edit form.
    Edit(ValueInput),
    /// Print the field group options panel.
    Options(FieldInput),
    /// Print the loaded value as JSON.
    Load(ValueInput),
    /// Print the API representation of the loaded value.
    Api(ValueInput),
    /// Print the admin asset manifest as JSON.
    Assets,
    /// Print the field type registration metadata as JSON.
    Info,
}

/// A field definition file.
#[derive(Debug, ClapArgs)]
pub struct FieldInput {
    /// JSON field definition.
    #[arg(long, value_name = "path")]
    pub field: Utf8PathBuf,
}

/// A field definition file and an optional stored value file.
#[derive(Debug, ClapArgs)]
pub struct ValueInput {
    /// JSON field definition.
    #[arg(long, value_name = "path")]
    pub field: Utf8PathBuf,
    /// JSON stored value; an absent file means nothing is stored yet.
    #[arg(long, value_name = "path")]
    pub value: Option<Utf8PathBuf>,
}

impl ValueInput {
    /// Value file path, if one was given.
    #[must_use]
    pub fn value_path(&self) -> Option<&Utf8Path> {
        self.value.as_deref()
    }
}

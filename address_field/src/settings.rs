//! Runtime settings for hosts embedding the address field.
//!
//! Settings are layered with `figment`: built-in defaults, then an optional
//! TOML file, then `ADDRESS_FIELD_*` environment variables.

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::error::{AddressFieldError, AddressFieldResult};
use crate::render::ValueEscaping;

/// Prefix of environment variables read by [`AddressFieldSettings::load`].
pub const ENV_PREFIX: &str = "ADDRESS_FIELD_";

/// Plugin-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressFieldSettings {
    /// URI prefix for the admin stylesheet and script.
    pub base_uri: String,
    /// Locale used to resolve labels.
    pub locale: String,
    /// Escape component values in API output. `false` selects
    /// [`ValueEscaping::Legacy`].
    pub escape_api_values: bool,
    /// Version string attached to registered assets.
    pub version: String,
}

impl Default for AddressFieldSettings {
    fn default() -> Self {
        Self {
            base_uri: String::new(),
            locale: "en-US".to_owned(),
            escape_api_values: true,
            version: "1.0.2".to_owned(),
        }
    }
}

impl AddressFieldSettings {
    /// Builds the provider stack without extracting it.
    ///
    /// A missing `config_file` is skipped; pass `None` to read defaults and
    /// the environment only.
    #[must_use]
    pub fn figment(config_file: Option<&Utf8Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path.as_std_path()));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads settings from defaults, `config_file`, and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`AddressFieldError::Settings`] when a provider yields values
    /// of the wrong type or the TOML file does not parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use address_field::AddressFieldSettings;
    ///
    /// let settings = AddressFieldSettings::load(None).expect("defaults always load");
    /// assert_eq!(settings.version, "1.0.2");
    /// ```
    pub fn load(config_file: Option<&Utf8Path>) -> AddressFieldResult<Self> {
        let settings: Self = Self::figment(config_file).extract()?;
        tracing::debug!(
            locale = %settings.locale,
            base_uri = %settings.base_uri,
            "loaded settings"
        );
        Ok(settings)
    }

    /// Parses [`Self::locale`] into a language identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AddressFieldError::InvalidLocale`] when the locale is not a
    /// valid BCP 47 tag.
    pub fn language(&self) -> AddressFieldResult<LanguageIdentifier> {
        self.locale
            .parse()
            .map_err(|err| AddressFieldError::invalid_locale(self.locale.clone(), &err))
    }

    /// Escaping mode for API output.
    #[must_use]
    pub const fn value_escaping(&self) -> ValueEscaping {
        if self.escape_api_values {
            ValueEscaping::Escaped
        } else {
            ValueEscaping::Legacy
        }
    }
}

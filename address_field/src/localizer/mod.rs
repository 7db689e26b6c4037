//! Label and admin text translation.
//!
//! Renderers and the registry ask a [`Localizer`] for each string by message
//! id and pass the English text to fall back on. [`FluentLocalizer`] answers
//! from the catalogue embedded for the configured locale, optionally beneath
//! host overrides.

use fluent_bundle::{FluentArgs, FluentError, FluentValue};
use fluent_syntax::parser::ParserError;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

mod fluent;
use fluent::{Bundle, embedded_catalogue, message_id};


/// Placeable values for a lookup, keyed by variable name.
pub type LocalizationArgs<'value> = HashMap<&'value str, FluentValue<'value>>;

/// Source of translated labels and admin text.
///
/// Object-safe; the field type holds one as `Arc<dyn Localizer>`.
pub trait Localizer: Send + Sync {
    /// Translation for `id`, or `None` when this localiser has none.
    fn lookup(&self, id: &str, args: Option<&LocalizationArgs<'_>>) -> Option<String>;

    /// Translation for `id`, falling back to `fallback`.
    ///
    /// # Examples
    /// ```rust
    /// use address_field::{LocalizationArgs, Localizer};
    ///
    /// struct Untranslated;
    ///
    /// impl Localizer for Untranslated {
    ///     fn lookup(&self, _id: &str, _args: Option<&LocalizationArgs<'_>>) -> Option<String> {
    ///         None
    ///     }
    /// }
    ///
    /// assert_eq!(Untranslated.message("component.city", None, "City"), "City");
    /// ```
    fn message(&self, id: &str, args: Option<&LocalizationArgs<'_>>, fallback: &str) -> String {
        self.lookup(id, args).unwrap_or_else(|| fallback.to_owned())
    }
}

/// Localiser with no translations; every message is its fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpLocalizer;

impl NoOpLocalizer {
    /// Creates a new instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Localizer for NoOpLocalizer {
    fn lookup(&self, _id: &str, _args: Option<&LocalizationArgs<'_>>) -> Option<String> {
        None
    }
}

/// Which catalogue a Fluent failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalogue {
    /// Messages supplied by the host to override the embedded ones.
    Overrides,
    /// Messages shipped with the crate.
    Embedded,
}

/// Failures building a [`FluentLocalizer`].
#[derive(Debug, Error)]
pub enum FluentLocalizerError {
    /// Only `en` and `ja` catalogues are embedded.
    #[error("no embedded catalogue exists for locale {locale}")]
    UnsupportedLocale {
        /// Requested locale.
        locale: LanguageIdentifier,
    },

    /// A catalogue is not valid Fluent syntax.
    #[error("the {catalogue:?} catalogue for {locale} does not parse")]
    Parser {
        /// Locale of the catalogue.
        locale: LanguageIdentifier,
        /// Offending catalogue.
        catalogue: Catalogue,
        /// Syntax errors reported by the parser.
        errors: Vec<ParserError>,
    },

    /// A catalogue defines a message twice.
    #[error("the {catalogue:?} catalogue for {locale} could not be registered")]
    Registration {
        /// Locale of the catalogue.
        locale: LanguageIdentifier,
        /// Offending catalogue.
        catalogue: Catalogue,
        /// Registration errors reported by Fluent.
        errors: Vec<FluentError>,
    },
}

/// Fluent localiser: host overrides first, then the embedded catalogue.
///
/// A message that fails to format is logged at warn level and the next
/// catalogue is tried, so a broken override degrades to the shipped text.
pub struct FluentLocalizer {
    overrides: Option<Bundle>,
    embedded: Bundle,
}

impl FluentLocalizer {
    /// The embedded catalogue for `locale`, matched on language alone.
    ///
    /// # Examples
    /// ```rust
    /// use address_field::{FluentLocalizer, Localizer, langid};
    ///
    /// let localizer = FluentLocalizer::embedded(langid!("en-GB"))
    ///     .expect("English is embedded");
    /// assert_eq!(localizer.lookup("component.postal_code", None).as_deref(), Some("Postal Code"));
    /// ```
    ///
    /// # Errors
    ///
    /// [`FluentLocalizerError::UnsupportedLocale`] when no catalogue is
    /// embedded for the language.
    pub fn embedded(locale: LanguageIdentifier) -> Result<Self, FluentLocalizerError> {
        Self::layered(locale, std::iter::empty::<String>())
    }

    /// The embedded catalogue for `locale` beneath `overrides`, each a Fluent
    /// source text. Override ids use dashes (`component-city`).
    ///
    /// # Errors
    ///
    /// [`FluentLocalizerError::UnsupportedLocale`] when no catalogue is
    /// embedded for the language, or a parse or registration error from
    /// either catalogue.
    pub fn layered<I, S>(
        locale: LanguageIdentifier,
        overrides: I,
    ) -> Result<Self, FluentLocalizerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let shipped = embedded_catalogue(&locale).ok_or_else(|| {
            FluentLocalizerError::UnsupportedLocale {
                locale: locale.clone(),
            }
        })?;
        let embedded = Bundle::parse(&locale, [shipped], Catalogue::Embedded)?;
        let texts: Vec<String> = overrides.into_iter().map(Into::into).collect();
        let host = if texts.is_empty() {
            None
        } else {
            Some(Bundle::parse(&locale, texts, Catalogue::Overrides)?)
        };
        Ok(Self {
            overrides: host,
            embedded,
        })
    }

    /// Locale the catalogues were built for.
    #[must_use]
    pub const fn locale(&self) -> &LanguageIdentifier {
        &self.embedded.locale
    }
}

impl Localizer for FluentLocalizer {
    fn lookup(&self, id: &str, args: Option<&LocalizationArgs<'_>>) -> Option<String> {
        let fluent_args = args.map(to_fluent_args);
        let key = message_id(id);
        self.overrides
            .iter()
            .chain(std::iter::once(&self.embedded))
            .find_map(|bundle| bundle.format(&key, fluent_args.as_ref()))
    }
}

impl fmt::Debug for FluentLocalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluentLocalizer")
            .field("locale", &self.locale().to_string())
            .field("overrides", &self.overrides.is_some())
            .finish_non_exhaustive()
    }
}

fn to_fluent_args<'a>(args: &'a LocalizationArgs<'a>) -> FluentArgs<'a> {
    args.iter()
        .map(|(name, value)| (*name, value.clone()))
        .collect()
}

//! Fluent bundles and the embedded catalogues.

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use std::borrow::Cow;
use unic_langid::LanguageIdentifier;

use super::{Catalogue, FluentLocalizerError};

const EN_US_CATALOGUE: &str = include_str!("../../locales/en-US/messages.ftl");
const JA_CATALOGUE: &str = include_str!("../../locales/ja/messages.ftl");

/// Catalogue shipped for the language of `locale`.
pub(super) fn embedded_catalogue(locale: &LanguageIdentifier) -> Option<&'static str> {
    match locale.language.as_str() {
        "en" => Some(EN_US_CATALOGUE),
        "ja" => Some(JA_CATALOGUE),
        _ => None,
    }
}

/// Fluent ids cannot contain `.` or `_`; callers use dotted `snake_case` ids
/// and the catalogues spell them with dashes.
pub(super) fn message_id(id: &str) -> Cow<'_, str> {
    if id.contains(['.', '_']) {
        Cow::Owned(id.replace(['.', '_'], "-"))
    } else {
        Cow::Borrowed(id)
    }
}

/// One parsed catalogue.
pub(super) struct Bundle {
    pub(super) locale: LanguageIdentifier,
    catalogue: Catalogue,
    messages: FluentBundle<FluentResource>,
}

impl Bundle {
    pub(super) fn parse<I, S>(
        locale: &LanguageIdentifier,
        sources: I,
        catalogue: Catalogue,
    ) -> Result<Self, FluentLocalizerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut messages = FluentBundle::new_concurrent(vec![locale.clone()]);
        // Isolation marks would end up inside HTML attribute values.
        messages.set_use_isolating(false);
        for source in sources {
            let resource = FluentResource::try_new(source.into()).map_err(|(_, errors)| {
                FluentLocalizerError::Parser {
                    locale: locale.clone(),
                    catalogue,
                    errors,
                }
            })?;
            messages
                .add_resource(resource)
                .map_err(|errors| FluentLocalizerError::Registration {
                    locale: locale.clone(),
                    catalogue,
                    errors,
                })?;
        }
        Ok(Self {
            locale: locale.clone(),
            catalogue,
            messages,
        })
    }

    /// Formats `key`, or `None` when it is missing or fails to format.
    pub(super) fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
        let pattern = self.messages.get_message(key)?.value()?;
        let mut errors = Vec::new();
        let text = self.messages.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            return Some(text.into_owned());
        }
        tracing::warn!(
            id = key,
            locale = %self.locale,
            catalogue = ?self.catalogue,
            ?errors,
            "failed to format Fluent message"
        );
        None
    }
}

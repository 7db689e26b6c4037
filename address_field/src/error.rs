//! Error types produced by the ambient operations around the renderers.
//!
//! Rendering itself never fails; malformed configuration is coerced to
//! defaults. Errors arise only while parsing JSON, loading settings,
//! building a localiser, or touching the filesystem.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

use crate::localizer::FluentLocalizerError;

/// Errors that can occur around the address field core.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AddressFieldError {
    /// A field definition or stored value was not valid JSON.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Error while gathering settings from providers.
    #[error("failed to gather settings: {0}")]
    Settings(#[from] Box<figment::Error>),

    /// The Fluent catalogues could not be assembled.
    #[error("failed to build localiser: {0}")]
    Localizer(#[from] FluentLocalizerError),

    /// The configured locale is not a valid language tag.
    #[error("invalid locale '{value}': {message}")]
    InvalidLocale {
        /// Locale string as configured.
        value: String,
        /// Parser diagnostic.
        message: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl From<figment::Error> for AddressFieldError {
    fn from(err: figment::Error) -> Self {
        Self::Settings(Box::new(err))
    }
}

impl AddressFieldError {
    /// Wraps an I/O failure with the path it concerns.
    #[must_use]
    pub fn io(path: impl AsRef<Utf8Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Builds an [`AddressFieldError::InvalidLocale`].
    #[must_use]
    pub fn invalid_locale(value: impl Into<String>, message: &impl ToString) -> Self {
        Self::InvalidLocale {
            value: value.into(),
            message: message.to_string(),
        }
    }
}

/// Result type used throughout the crate.
pub type AddressFieldResult<T> = Result<T, AddressFieldError>;

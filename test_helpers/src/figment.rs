//! Wrappers around `figment::Jail` for settings tests.
//!
//! A jail gives each test its own working directory and restores any
//! environment variables it sets, so `ADDRESS_FIELD_*` overrides never leak
//! between tests.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or the closure fails.
///
/// # Examples
///
/// ```rust
/// use address_field_test_helpers::figment::with_jail;
///
/// let locale = with_jail(|j| {
///     j.set_env("ADDRESS_FIELD_LOCALE", "ja");
///     Ok(std::env::var("ADDRESS_FIELD_LOCALE").unwrap_or_default())
/// })
/// .expect("jail runs");
/// assert_eq!(locale, "ja");
/// ```
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut ::figment::Jail) -> ::figment::error::Result<T>,
{
    let mut output = None;
    ::figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts any displayable error into a [`figment::Error`] so it can cross
/// a jail closure boundary with `?`.
pub fn figment_error(err: &impl ToString) -> ::figment::Error {
    ::figment::Error::from(err.to_string())
}

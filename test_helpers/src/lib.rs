//! Test helpers shared across the address-field workspace.
//!
//! The crate bundles `figment::Jail` wrappers for settings tests, markup
//! inspection helpers for renderer assertions, JSON fixture writers for CLI
//! tests, and the scalar normalisation used by behavioural step bindings.

pub mod figment;
pub mod fixtures;
pub mod markup;
pub mod text;

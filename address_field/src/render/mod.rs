//! Renderers invoked by the field host.
//!
//! Each renderer defaults the field first and then walks the layout grid;
//! they differ only in the markup produced per row and per component.

mod api;
mod edit;
mod options;

pub use api::{ValueEscaping, format_for_api};
pub use edit::render_edit;
pub use options::render_options;

pub(crate) use options::messages;

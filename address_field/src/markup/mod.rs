//! HTML building blocks shared by the renderers.
//!
//! Renderers never concatenate raw strings: text and attribute values pass
//! through [`escape_html`] inside [`MarkupWriter`] unless a caller asks for
//! raw output explicitly.

mod escape;
mod writer;

pub use escape::escape_html;
pub use writer::{Attribute, MarkupWriter};

//! Step definitions for the behavioural suite.

mod field_steps;
mod helpers;
mod render_steps;
mod value_steps;

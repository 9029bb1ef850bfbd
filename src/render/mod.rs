//! Rendering blockify output for people and programs.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::to_text;

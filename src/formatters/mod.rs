//! Formatter implementations

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::{
    default_color_map, interpolate_positional, HexColor, Interpolator, TextFormatter,
    TextFormatterBuilder,
};

// Re-export the trait for convenience
pub use crate::core::Formatter;

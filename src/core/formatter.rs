//! Formatter trait and the rendered unit handed to sinks

use super::error::Result;
use super::record::LogRecord;

/// One formatted unit, ready for a sink.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Display line produced by a text formatter
    Line(String),
    /// Structured mapping produced by a machine-readable formatter
    Data(serde_json::Map<String, serde_json::Value>),
}

impl Rendered {
    pub fn as_line(&self) -> Option<&str> {
        match self {
            Rendered::Line(line) => Some(line),
            Rendered::Data(_) => None,
        }
    }

    pub fn as_data(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        match self {
            Rendered::Line(_) => None,
            Rendered::Data(data) => Some(data),
        }
    }
}

/// Pure rendering step of the output pipeline: record in, rendered unit out.
/// Implementations hold their configuration (scope, colors, interpolation)
/// and are validated at construction, never at call time.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> Result<Rendered>;
}

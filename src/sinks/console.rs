//! Console sink implementation

use crate::core::{Rendered, Result, Sink};
use std::io::Write;

/// Writes rendered units to stdout, one per line. Structured data is
/// serialized to a single JSON line; no coloring is applied here (text
/// formatters color their own lines).
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, rendered: &Rendered) -> Result<()> {
        match rendered {
            Rendered::Line(line) => println!("{}", line),
            Rendered::Data(data) => println!("{}", serde_json::to_string(data)?),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

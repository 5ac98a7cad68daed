//! Sink trait for log output destinations

use super::error::Result;
use super::formatter::Rendered;

/// Pluggable endpoint that performs the actual output side effect. Return
/// values of the side effect itself are never consulted; errors surface to
/// the caller of the logging call.
pub trait Sink: Send + Sync {
    fn write(&mut self, rendered: &Rendered) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

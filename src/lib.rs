//! # Plugin Logging
//!
//! A pluggable structured-logging core for plugins running inside host
//! automation tools.
//!
//! ## Features
//!
//! - **Leveled Logging**: Runtime-adjustable severity gating over a fixed
//!   rank table
//! - **Params/Error Disambiguation**: One call signature serves
//!   `warn(msg, params)` and `warn(msg, error)` shapes
//! - **Pluggable Pipeline**: Formatter + color map + sink, with colorized
//!   text and JSON-line reference formatters
//! - **Host Adapter**: Validates a host's structural contract once, then
//!   binds a logger to its callbacks, including a log-and-abort `throw`

pub mod console;
pub mod core;
pub mod formatters;
pub mod host;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::console::{ConsoleLogger, ConsoleLoggerOptions, ThrownError};
    pub use crate::core::{
        ErrorInfo, FieldValue, Formatter, LogContext, LogLevel, LogParams, LogRecord, Logger,
        LoggerBuilder, LoggerError, RecordBuilder, Rendered, Result, Sink,
    };
    pub use crate::formatters::{JsonFormatter, TextFormatter, TextFormatterBuilder};
    pub use crate::host::{ErrorCtor, HostHandle, HostLogger, HostLoggerOptions, LogHook};
    pub use crate::sinks::ConsoleSink;
}

pub use console::{ConsoleLogger, ConsoleLoggerOptions, ThrownError};
pub use core::{
    ErrorInfo, FieldValue, Formatter, LogContext, LogLevel, LogParams, LogRecord, Logger,
    LoggerBuilder, LoggerError, RecordBuilder, Rendered, Result, Sink,
};
pub use formatters::{JsonFormatter, TextFormatter, TextFormatterBuilder};
pub use host::{ErrorCtor, HostHandle, HostLogger, HostLoggerOptions, LogHook};
pub use sinks::ConsoleSink;

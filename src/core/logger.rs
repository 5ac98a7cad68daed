//! Main logger implementation

use super::{
    context::LogContext,
    error::Result,
    formatter::Formatter,
    log_level::LogLevel,
    params::LogParams,
    record::{ErrorInfo, RecordBuilder},
    sink::Sink,
};
use crate::formatters::TextFormatter;
use crate::sinks::ConsoleSink;
use parking_lot::RwLock;

/// Leveled logger gating records by rank and dispatching accepted records
/// through its bound formatter and sink.
///
/// The threshold is the only mutable field; everything else is fixed at
/// construction. A shared instance sees `set_level` take effect for all
/// subsequent calls from any caller holding a reference.
pub struct Logger {
    threshold: RwLock<LogLevel>,
    context: LogContext,
    formatter: Box<dyn Formatter>,
    sink: RwLock<Box<dyn Sink>>,
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use plugin_logging::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .threshold(LogLevel::Debug)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(logger.get_level(), LogLevel::Debug);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Log a message at `level` with an optional second argument and an
    /// optional explicitly attached error.
    ///
    /// Calls below the current threshold return immediately: no record is
    /// built and no formatting runs for suppressed calls.
    pub fn log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        second: Option<LogParams>,
        error: Option<ErrorInfo>,
    ) -> Result<()> {
        if !level.is_at_least(*self.threshold.read()) {
            return Ok(());
        }

        let mut builder = RecordBuilder::new(level, message);
        if let Some(second) = second {
            builder = builder.second(second);
        }
        if let Some(error) = error {
            builder = builder.error(error);
        }
        let record = builder.build(&self.context);

        let rendered = self.formatter.format(&record)?;
        self.sink.write().write(&rendered)
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>, second: Option<LogParams>) -> Result<()> {
        self.log(LogLevel::Trace, message, second, None)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>, second: Option<LogParams>) -> Result<()> {
        self.log(LogLevel::Debug, message, second, None)
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>, second: Option<LogParams>) -> Result<()> {
        self.log(LogLevel::Info, message, second, None)
    }

    #[inline]
    pub fn warn(
        &self,
        message: impl Into<String>,
        second: Option<LogParams>,
        error: Option<ErrorInfo>,
    ) -> Result<()> {
        self.log(LogLevel::Warn, message, second, error)
    }

    #[inline]
    pub fn error(
        &self,
        message: impl Into<String>,
        second: Option<LogParams>,
        error: Option<ErrorInfo>,
    ) -> Result<()> {
        self.log(LogLevel::Error, message, second, error)
    }

    /// Replace the minimum severity. Effective immediately for subsequent
    /// calls.
    pub fn set_level(&self, level: LogLevel) {
        *self.threshold.write() = level;
    }

    /// Name-validated variant of [`set_level`](Self::set_level); fails on an
    /// unknown severity name.
    pub fn set_level_named(&self, name: &str) -> Result<()> {
        let level: LogLevel = name.parse()?;
        self.set_level(level);
        Ok(())
    }

    pub fn get_level(&self) -> LogLevel {
        *self.threshold.read()
    }

    pub fn context(&self) -> &LogContext {
        &self.context
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.write().flush()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use plugin_logging::prelude::*;
///
/// let logger = Logger::builder()
///     .threshold(LogLevel::Warn)
///     .context(LogContext::new().with_field("plugin", "deploy"))
///     .formatter(JsonFormatter::new())
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    threshold: LogLevel,
    context: LogContext,
    formatter: Option<Box<dyn Formatter>>,
    sink: Option<Box<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            threshold: LogLevel::Info,
            context: LogContext::new(),
            formatter: None,
            sink: None,
        }
    }

    /// Set the minimum severity (default INFO)
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: LogLevel) -> Self {
        self.threshold = level;
        self
    }

    /// Attach fixed context merged into every record
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }

    /// Set the formatter (default: text formatter with the default colors)
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Set the sink (default: console)
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        let formatter = match self.formatter {
            Some(formatter) => formatter,
            None => Box::new(TextFormatter::new()),
        };
        let sink = match self.sink {
            Some(sink) => sink,
            None => Box::new(ConsoleSink::new()),
        };

        Ok(Logger {
            threshold: RwLock::new(self.threshold),
            context: self.context,
            formatter,
            sink: RwLock::new(sink),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

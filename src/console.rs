//! Standalone console logger
//!
//! The same leveled surface as the host-bound logger, for plugins running
//! without a host: text formatter with the default colors, console sink,
//! and a `throw` operation backed by a caller-chosen error constructor.

use crate::core::{
    ErrorInfo, LogContext, LogLevel, LogParams, Logger, RecordBuilder, Result,
};
use crate::formatters::TextFormatter;
use crate::host::ErrorCtor;
use crate::sinks::ConsoleSink;
use std::fmt;
use std::sync::Arc;

/// Error type produced by `throw` when no custom constructor is
/// configured. Carries only its formatted message.
#[derive(Debug)]
pub struct ThrownError {
    message: String,
}

impl ThrownError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ThrownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ThrownError {}

/// Configuration for [`ConsoleLogger`]. The scope prefix is omitted when
/// absent; `debug_enabled` gates TRACE/DEBUG exactly as in the host
/// adapter.
#[derive(Clone)]
pub struct ConsoleLoggerOptions {
    pub scope: Option<String>,
    pub threshold: LogLevel,
    pub debug_enabled: bool,
    pub context: LogContext,
    pub error_ctor: Option<ErrorCtor>,
}

impl Default for ConsoleLoggerOptions {
    fn default() -> Self {
        Self {
            scope: None,
            threshold: LogLevel::Debug,
            debug_enabled: false,
            context: LogContext::new(),
            error_ctor: None,
        }
    }
}

/// Console-backed logger with the host logger's surface, including
/// `throw`.
pub struct ConsoleLogger {
    core: Logger,
    throw_formatter: TextFormatter,
    error_ctor: ErrorCtor,
    debug_enabled: bool,
}

impl ConsoleLogger {
    /// # Example
    /// ```
    /// use plugin_logging::console::{ConsoleLogger, ConsoleLoggerOptions};
    ///
    /// let logger = ConsoleLogger::new(ConsoleLoggerOptions {
    ///     scope: Some("deploy".to_string()),
    ///     ..Default::default()
    /// })
    /// .unwrap();
    /// logger.info("ready", None).unwrap();
    /// ```
    pub fn new(options: ConsoleLoggerOptions) -> Result<Self> {
        let mut formatter = TextFormatter::builder();
        let mut throw_formatter = TextFormatter::builder().no_colors();
        if let Some(scope) = &options.scope {
            formatter = formatter.scope(scope);
            throw_formatter = throw_formatter.scope(scope);
        }

        let core = Logger::builder()
            .threshold(options.threshold)
            .context(options.context)
            .formatter(formatter.build()?)
            .sink(ConsoleSink::new())
            .build()?;

        Ok(Self {
            core,
            throw_formatter: throw_formatter.build()?,
            error_ctor: options
                .error_ctor
                .unwrap_or_else(|| Arc::new(|message| Box::new(ThrownError::new(message)))),
            debug_enabled: options.debug_enabled,
        })
    }

    fn flag_permits(&self, level: LogLevel) -> bool {
        self.debug_enabled || level.is_at_least(LogLevel::Info)
    }

    pub fn log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        second: Option<LogParams>,
        error: Option<ErrorInfo>,
    ) -> Result<()> {
        if !self.flag_permits(level) {
            return Ok(());
        }
        self.core.log(level, message, second, error)
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

    pub fn set_level(&self, level: LogLevel) {
        self.core.set_level(level);
    }

    pub fn set_level_named(&self, name: &str) -> Result<()> {
        self.core.set_level_named(name)
    }

    pub fn get_level(&self) -> LogLevel {
        self.core.get_level()
    }

    /// Render an ERROR record and return it as an error value, bypassing
    /// the threshold gate.
    pub fn throw(
        &self,
        message: impl Into<String>,
        second: Option<LogParams>,
    ) -> Box<dyn std::error::Error + Send + Sync> {
        let mut builder = RecordBuilder::new(LogLevel::Error, message);
        if let Some(second) = second {
            builder = builder.second(second);
        }
        let record = builder.build(self.core.context());
        (self.error_ctor)(self.throw_formatter.format_line(&record))
    }
}

//! Logger bound to a validated host

use super::capability::HostHandle;
use crate::core::{
    ErrorInfo, LogContext, LogLevel, LogParams, Logger, LoggerError, RecordBuilder, Rendered,
    Result, Sink,
};
use crate::formatters::TextFormatter;
use std::sync::Arc;

/// Configuration for wrapping a host.
///
/// `debug_enabled` is the environment suppression signal as an explicit
/// field: the outer CLI layer reads the environment once and passes the
/// result in, so this core never touches global environment state. The
/// threshold defaults to DEBUG, leaving the flag as the sole gate for
/// TRACE/DEBUG output.
#[derive(Debug, Clone)]
pub struct HostLoggerOptions {
    pub scope: Option<String>,
    pub threshold: LogLevel,
    pub debug_enabled: bool,
    pub context: LogContext,
}

impl Default for HostLoggerOptions {
    fn default() -> Self {
        Self {
            scope: None,
            threshold: LogLevel::Debug,
            debug_enabled: false,
            context: LogContext::new(),
        }
    }
}

/// Sink forwarding each rendered unit to the host's logging callback,
/// looked up at call time rather than captured at wrap time.
struct HostSink {
    host: Arc<HostHandle>,
}

impl Sink for HostSink {
    fn write(&mut self, rendered: &Rendered) -> Result<()> {
        let hook = self
            .host
            .log_hook()
            .ok_or_else(|| LoggerError::missing_capability("log function"))?;
        match rendered {
            Rendered::Line(line) => hook(line),
            Rendered::Data(data) => hook(&serde_json::to_string(data)?),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "host"
    }
}

/// Leveled logger wrapping a host's logging callback, with a `throw`
/// operation that renders an ERROR record into an instance of the host's
/// error class instead of writing it.
pub struct HostLogger {
    core: Logger,
    host: Arc<HostHandle>,
    throw_formatter: TextFormatter,
    debug_enabled: bool,
}

impl HostLogger {
    /// Validate the host's structural contract and build a logger bound to
    /// it. All validation happens here; the returned logger assumes the
    /// capabilities it saw.
    ///
    /// # Example
    /// ```
    /// use plugin_logging::host::{HostHandle, HostLogger, HostLoggerOptions};
    /// use plugin_logging::console::ThrownError;
    /// use std::sync::Arc;
    ///
    /// let host = Arc::new(
    ///     HostHandle::new()
    ///         .with_log_hook(Arc::new(|line| println!("{}", line)))
    ///         .with_error_ctor(Arc::new(|msg| Box::new(ThrownError::new(msg)))),
    /// );
    ///
    /// let logger = HostLogger::wrap(
    ///     Some(host),
    ///     HostLoggerOptions {
    ///         scope: Some("deploy".to_string()),
    ///         ..Default::default()
    ///     },
    /// )
    /// .unwrap();
    /// logger.info("plugin registered", None).unwrap();
    /// ```
    pub fn wrap(host: Option<Arc<HostHandle>>, options: HostLoggerOptions) -> Result<HostLogger> {
        let host = host.ok_or(LoggerError::InvalidHost)?;
        if host.log_hook().is_none() {
            return Err(LoggerError::missing_capability("log function"));
        }
        if host.error_ctor().is_none() {
            return Err(LoggerError::missing_capability("error constructor"));
        }
        if let Some(scope) = &options.scope {
            if scope.is_empty() {
                return Err(LoggerError::InvalidScope);
            }
        }

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
            .sink(HostSink {
                host: Arc::clone(&host),
            })
            .build()?;

        Ok(HostLogger {
            core,
            host,
            throw_formatter: throw_formatter.build()?,
            debug_enabled: options.debug_enabled,
        })
    }

    /// TRACE/DEBUG need both the threshold and the explicit debug flag to
    /// permit emission; either one suppressing is enough.
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

    /// Render an ERROR record and hand it back as an instance of the host's
    /// error class for the caller to propagate. The threshold gate is
    /// bypassed entirely; throwing is never suppressed.
    ///
    /// The error constructor is read at call time. If the host dropped it
    /// after wrap, the returned error is the capability failure itself.
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
        let line = self.throw_formatter.format_line(&record);

        match self.host.error_ctor() {
            Some(ctor) => ctor(line),
            None => Box::new(LoggerError::missing_capability("error constructor")),
        }
    }
}

//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They work with
//! any logger exposing `log(level, message, second, error)` — the core
//! [`Logger`](crate::Logger), [`HostLogger`](crate::host::HostLogger) and
//! [`ConsoleLogger`](crate::console::ConsoleLogger).
//!
//! # Examples
//!
//! ```
//! use plugin_logging::prelude::*;
//! use plugin_logging::info;
//!
//! # fn main() -> plugin_logging::Result<()> {
//! let logger = Logger::builder().build()?;
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//! # Ok(())
//! # }
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use plugin_logging::prelude::*;
/// # fn main() -> plugin_logging::Result<()> {
/// # let logger = Logger::builder().build()?;
/// use plugin_logging::log;
/// log!(logger, LogLevel::Info, "Simple message")?;
/// log!(logger, LogLevel::Error, "Error code: {}", 500)?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), None, None)
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use plugin_logging::prelude::*;
/// # fn main() -> plugin_logging::Result<()> {
/// # let logger = Logger::builder().build()?;
/// use plugin_logging::info;
/// info!(logger, "Processing {} items", 100)?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

//! Log record construction and params/error disambiguation
//!
//! A logging call's second argument serves two call shapes: extra structured
//! parameters, or an attached error. `RecordBuilder` resolves the ambiguity
//! once so formatters downstream see a normalized record where `params` and
//! `error` are mutually exclusive.

use super::context::LogContext;
use super::log_level::LogLevel;
use super::params::{FieldValue, LogParams};
use std::collections::HashMap;
use std::fmt;

/// The error capability: the minimal shape an attached error must expose.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    pub name: String,
    pub message: String,
    pub stack: Option<String>,
}

impl ErrorInfo {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: None,
        }
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

/// Renders as `<name>: <message>`, the shape text formatters append.
impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

/// Capture any std error as an attached error. The generic name mirrors the
/// base error class of the hosts this crate adapts to.
impl<E: std::error::Error> From<E> for ErrorInfo {
    fn from(err: E) -> Self {
        ErrorInfo::new("Error", err.to_string())
    }
}

/// An error handed in as the second positional argument travels as
/// error-shaped params until `RecordBuilder` moves it into the error slot.
impl From<ErrorInfo> for LogParams {
    fn from(error: ErrorInfo) -> Self {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), FieldValue::String(error.name));
        fields.insert("message".to_string(), FieldValue::String(error.message));
        fields.insert(
            "stack".to_string(),
            error.stack.map(FieldValue::String).unwrap_or(FieldValue::Null),
        );
        LogParams::Map(fields)
    }
}

/// Immutable normalized value produced per logging call.
///
/// Invariant: `params` and `error` are never both populated.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub params: Option<LogParams>,
    pub error: Option<ErrorInfo>,
    pub context: LogContext,
}

/// Builds a [`LogRecord`], resolving the params/error ambiguity.
pub struct RecordBuilder {
    level: LogLevel,
    message: String,
    second: Option<LogParams>,
    error: Option<ErrorInfo>,
}

impl RecordBuilder {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            second: None,
            error: None,
        }
    }

    /// The raw second positional argument of the call.
    #[must_use]
    pub fn second(mut self, params: LogParams) -> Self {
        self.second = Some(params);
        self
    }

    /// An explicitly attached error. Always wins the error slot; the second
    /// argument then stays params unconditionally.
    #[must_use]
    pub fn error(mut self, error: ErrorInfo) -> Self {
        self.error = Some(error);
        self
    }

    /// Normalize into a record, merging in the logger's fixed context.
    ///
    /// Without an explicit error, an error-shaped second argument (a mapping
    /// exposing `name`, `message` and `stack`) is moved into the error slot.
    /// A plain mapping that coincidentally carries those keys collapses the
    /// same way; callers relying on such keys must attach the error
    /// explicitly to keep the mapping in params.
    pub fn build(self, context: &LogContext) -> LogRecord {
        let (params, error) = match (self.second, self.error) {
            (second, Some(error)) => (second, Some(error)),
            (Some(second), None) => match error_shaped(&second) {
                Some(error) => (None, Some(error)),
                None => (Some(second), None),
            },
            (None, None) => (None, None),
        };

        LogRecord {
            level: self.level,
            message: self.message,
            params,
            error,
            context: context.clone(),
        }
    }
}

/// Structural check for the error capability: a mapping with `name`,
/// `message` and `stack` keys.
fn error_shaped(params: &LogParams) -> Option<ErrorInfo> {
    let LogParams::Map(fields) = params else {
        return None;
    };
    let name = fields.get("name")?;
    let message = fields.get("message")?;
    if !fields.contains_key("stack") {
        return None;
    }
    let stack = match fields.get("stack") {
        Some(FieldValue::String(s)) => Some(s.clone()),
        _ => None,
    };
    Some(ErrorInfo {
        name: name.to_string(),
        message: message.to_string(),
        stack,
    })
}

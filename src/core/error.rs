//! Error types for the logging core

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unknown severity name
    #[error("Invalid log level '{name}', expected one of TRACE, DEBUG, INFO, WARN, ERROR")]
    InvalidLevel { name: String },

    /// Host object missing entirely
    #[error("No host specified.")]
    InvalidHost,

    /// Host present but missing a required hook or constructor
    #[error("No {capability} on host.")]
    MissingCapability { capability: String },

    /// Scope present but not a non-empty string
    #[error("Scope expected to be a non-empty string.")]
    InvalidScope,

    /// Malformed formatter/color/sink supplied at construction
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from a sink write
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sink error (generic)
    #[error("Sink error: {0}")]
    Sink(String),
}

impl LoggerError {
    /// Create an invalid level error for an unknown severity name
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel { name: name.into() }
    }

    /// Create a missing capability error naming the absent host field
    pub fn missing_capability(capability: impl Into<String>) -> Self {
        LoggerError::MissingCapability {
            capability: capability.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a sink error (generic)
    pub fn sink<S: Into<String>>(msg: S) -> Self {
        LoggerError::Sink(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("VERBOSE");
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));

        let err = LoggerError::missing_capability("log function");
        assert!(matches!(err, LoggerError::MissingCapability { .. }));

        let err = LoggerError::config("color map", "malformed hex color '#zz'");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("VERBOSE");
        assert_eq!(
            err.to_string(),
            "Invalid log level 'VERBOSE', expected one of TRACE, DEBUG, INFO, WARN, ERROR"
        );

        let err = LoggerError::InvalidHost;
        assert_eq!(err.to_string(), "No host specified.");

        let err = LoggerError::missing_capability("log function");
        assert_eq!(err.to_string(), "No log function on host.");

        let err = LoggerError::missing_capability("error constructor");
        assert_eq!(err.to_string(), "No error constructor on host.");

        let err = LoggerError::InvalidScope;
        assert_eq!(err.to_string(), "Scope expected to be a non-empty string.");

        let err = LoggerError::config("color map", "malformed hex color '#zz'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for color map: malformed hex color '#zz'"
        );
    }
}

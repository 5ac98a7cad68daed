//! Structured JSON formatter
//!
//! Produces a single flat mapping per record: `level`, `timestamp`,
//! `message`, then params, error fields and context flattened in. Later
//! groups override earlier ones on key collision. The timestamp is taken at
//! format time so it reflects the actual emission instant.

use crate::core::{Formatter, LogParams, LogRecord, Rendered, Result};
use chrono::Utc;
use serde_json::Value;

pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> Result<Rendered> {
        let mut data = serde_json::Map::new();

        data.insert(
            "level".to_string(),
            Value::String(record.level.to_str().to_string()),
        );
        data.insert(
            "timestamp".to_string(),
            Value::String(Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()),
        );
        data.insert("message".to_string(), Value::String(record.message.clone()));

        match &record.params {
            Some(LogParams::Map(fields)) => {
                for (key, value) in fields {
                    data.insert(key.clone(), value.to_json_value());
                }
            }
            // Positional params have no field names; keep them as one array.
            Some(LogParams::List(values)) => {
                data.insert(
                    "params".to_string(),
                    Value::Array(values.iter().map(|v| v.to_json_value()).collect()),
                );
            }
            None => {}
        }

        if let Some(error) = &record.error {
            data.insert("errorName".to_string(), Value::String(error.name.clone()));
            data.insert(
                "errorMessage".to_string(),
                Value::String(error.message.clone()),
            );
            if let Some(stack) = &error.stack {
                data.insert("stackTrace".to_string(), Value::String(stack.clone()));
            }
        }

        for (key, value) in record.context.fields() {
            data.insert(key.clone(), value.to_json_value());
        }

        Ok(Rendered::Data(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ErrorInfo, LogContext, LogLevel, RecordBuilder};

    fn data_of(record: &LogRecord) -> serde_json::Map<String, Value> {
        match JsonFormatter::new().format(record).unwrap() {
            Rendered::Data(data) => data,
            Rendered::Line(_) => panic!("json formatter produced a line"),
        }
    }

    #[test]
    fn test_required_fields() {
        let record = RecordBuilder::new(LogLevel::Info, "deployed").build(&LogContext::new());
        let data = data_of(&record);

        assert_eq!(data["level"], "INFO");
        assert_eq!(data["message"], "deployed");
        let timestamp = data["timestamp"].as_str().unwrap();
        assert!(timestamp.contains('T'));
        assert!(timestamp.ends_with('Z'));
    }

    #[test]
    fn test_params_flattened_and_error_keys_omitted() {
        let record = RecordBuilder::new(LogLevel::Info, "deployed")
            .second(LogParams::new().with_field("a", 1))
            .build(&LogContext::new());
        let data = data_of(&record);

        // Round-trips through serde_json as a single parseable line.
        let json = serde_json::to_string(&data).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["a"], 1);
        assert!(parsed.get("errorName").is_none());
        assert!(parsed.get("errorMessage").is_none());
        assert!(parsed.get("stackTrace").is_none());
    }

    #[test]
    fn test_error_fields_flattened() {
        let record = RecordBuilder::new(LogLevel::Error, "failed")
            .error(ErrorInfo::new("DeployError", "rollback").with_stack("at deploy"))
            .build(&LogContext::new());
        let data = data_of(&record);

        assert_eq!(data["errorName"], "DeployError");
        assert_eq!(data["errorMessage"], "rollback");
        assert_eq!(data["stackTrace"], "at deploy");
    }

    #[test]
    fn test_stack_trace_omitted_without_stack() {
        let record = RecordBuilder::new(LogLevel::Error, "failed")
            .error(ErrorInfo::new("Error", "boom"))
            .build(&LogContext::new());
        let data = data_of(&record);

        assert_eq!(data["errorName"], "Error");
        assert!(!data.contains_key("stackTrace"));
    }

    #[test]
    fn test_positional_params_kept_as_array() {
        let record = RecordBuilder::new(LogLevel::Info, "deployed {}")
            .second(LogParams::positional(["prod"]))
            .build(&LogContext::new());
        let data = data_of(&record);

        assert_eq!(data["params"], serde_json::json!(["prod"]));
    }

    #[test]
    fn test_context_overrides_params_on_collision() {
        let context = LogContext::new().with_field("stage", "prod");
        let record = RecordBuilder::new(LogLevel::Info, "deployed")
            .second(LogParams::new().with_field("stage", "dev"))
            .build(&context);
        let data = data_of(&record);

        assert_eq!(data["stage"], "prod");
    }

    #[test]
    fn test_context_fields_flattened() {
        let context = LogContext::new()
            .with_field("plugin", "deploy")
            .with_field("attempt", 3);
        let record = RecordBuilder::new(LogLevel::Warn, "retrying").build(&context);
        let data = data_of(&record);

        assert_eq!(data["plugin"], "deploy");
        assert_eq!(data["attempt"], 3);
    }
}

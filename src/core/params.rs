//! Structured parameter values attached to a logging call
//!
//! `LogParams` is the second positional argument of a logging call before
//! normalization: either named fields or an ordered sequence for positional
//! interpolation into the message.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// Extra structured parameters supplied with a logging call.
///
/// A mapping carries named fields that structured formatters flatten into
/// the output record; an ordered sequence feeds positional interpolation in
/// text formatters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogParams {
    Map(HashMap<String, FieldValue>),
    List(Vec<FieldValue>),
}

impl LogParams {
    /// Create empty named params
    pub fn new() -> Self {
        LogParams::Map(HashMap::new())
    }

    /// Add a named field. No-op on positional params.
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        if let LogParams::Map(ref mut fields) = self {
            fields.insert(key.into(), value.into());
        }
        self
    }

    /// Create positional params for message interpolation
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        LogParams::List(values.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            LogParams::Map(fields) => fields.is_empty(),
            LogParams::List(values) => values.is_empty(),
        }
    }
}

impl Default for LogParams {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, FieldValue>> for LogParams {
    fn from(fields: HashMap<String, FieldValue>) -> Self {
        LogParams::Map(fields)
    }
}

impl From<Vec<FieldValue>> for LogParams {
    fn from(values: Vec<FieldValue>) -> Self {
        LogParams::List(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_params() {
        let params = LogParams::new()
            .with_field("user_id", 123)
            .with_field("action", "deploy")
            .with_field("dry_run", true);

        match params {
            LogParams::Map(fields) => {
                assert_eq!(fields.len(), 3);
                assert_eq!(fields.get("user_id"), Some(&FieldValue::Int(123)));
            }
            LogParams::List(_) => panic!("expected named params"),
        }
    }

    #[test]
    fn test_positional_params() {
        let params = LogParams::positional(["us-east-1", "prod"]);
        match params {
            LogParams::List(values) => assert_eq!(values.len(), 2),
            LogParams::Map(_) => panic!("expected positional params"),
        }
    }

    #[test]
    fn test_is_empty() {
        assert!(LogParams::new().is_empty());
        assert!(LogParams::positional(Vec::<FieldValue>::new()).is_empty());
        assert!(!LogParams::new().with_field("a", 1).is_empty());
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::String("x".into()).to_string(), "x");
        assert_eq!(FieldValue::Int(42).to_string(), "42");
        assert_eq!(FieldValue::Bool(false).to_string(), "false");
        assert_eq!(FieldValue::Null.to_string(), "null");
    }

    #[test]
    fn test_field_value_to_json() {
        assert_eq!(
            FieldValue::Int(7).to_json_value(),
            serde_json::Value::Number(7.into())
        );
        assert_eq!(FieldValue::Null.to_json_value(), serde_json::Value::Null);
    }
}

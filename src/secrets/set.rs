//! Parsing of the secrets payload handed over by the runner.

use crate::error::{ExportError, ExportResult};
use serde_json::Value;
use std::str::FromStr;

/// Secrets keyed by name, in the order they appear in the JSON payload.
///
/// A repeated key keeps the position of its first occurrence and the value
/// of its last one.
#[derive(Debug, Clone, PartialEq)]
pub struct SecretSet {
    entries: Vec<(String, String)>,
}

impl SecretSet {
    /// Parse a JSON object whose values are all strings.
    pub fn parse(json: &str) -> ExportResult<Self> {
        let value: Value = serde_json::from_str(json)?;

        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(ExportError::SecretsParse(format!(
                    "expected a JSON object, found {}",
                    json_kind(&other)
                )));
            }
        };

        let mut entries = Vec::with_capacity(map.len());
        for (name, value) in map {
            match value {
                Value::String(secret) => entries.push((name, secret)),
                other => {
                    return Err(ExportError::SecretsParse(format!(
                        "secret {:?} is {}, expected a string",
                        name,
                        json_kind(&other)
                    )));
                }
            }
        }

        Ok(Self { entries })
    }

    /// Iterate over `(name, value)` pairs in payload order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl FromStr for SecretSet {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

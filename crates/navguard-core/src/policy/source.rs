//! Loosely-typed whitelist input from script-side options.
//!
//! The `whitelist` option may arrive as a real list, as a string holding a
//! JSON array, as one bare domain, or as something else entirely. This module
//! turns it into a tagged value before it reaches the policy.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhitelistSource {
    /// JSON array of strings.
    List(Vec<String>),
    /// String that decoded as a JSON array of strings.
    EncodedList(Vec<String>),
    /// Any other non-blank string, kept whole.
    SingleDomain(String),
    /// Blank string; disables the whitelist.
    Empty,
    /// Not understood. Carries the JSON kind for the caller's warning.
    Unrecognized(&'static str),
}

impl WhitelistSource {
    pub fn from_value(v: &Value) -> Self {
        match v {
            Value::Array(items) => match strings(items) {
                Some(list) => WhitelistSource::List(list),
                None => WhitelistSource::Unrecognized("array with non-string entries"),
            },
            Value::String(s) => Self::from_str_value(s),
            Value::Null => WhitelistSource::Unrecognized("null"),
            Value::Bool(_) => WhitelistSource::Unrecognized("bool"),
            Value::Number(_) => WhitelistSource::Unrecognized("number"),
            Value::Object(_) => WhitelistSource::Unrecognized("object"),
        }
    }

    fn from_str_value(s: &str) -> Self {
        if s.trim().is_empty() {
            return WhitelistSource::Empty;
        }

        match serde_json::from_str::<Vec<String>>(s) {
            Ok(list) => WhitelistSource::EncodedList(list),
            Err(e) => {
                tracing::debug!(error = %e, "whitelist string is not a JSON array, using it as one domain");
                WhitelistSource::SingleDomain(s.to_string())
            }
        }
    }
}

impl From<&Value> for WhitelistSource {
    fn from(v: &Value) -> Self {
        Self::from_value(v)
    }
}

fn strings(items: &[Value]) -> Option<Vec<String>> {
    items
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}

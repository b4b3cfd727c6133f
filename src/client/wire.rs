//! Internal wire types for serde deserialization.

use serde::Deserialize;
use serde_json::Value;

/// Error body returned by the API on 4xx/5xx responses.
#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<Value>,
}

impl ErrorBody {
    /// The `error` field as display text. Missing or null gives an empty
    /// string; non-string values are rendered as JSON.
    pub fn detail(self) -> String {
        match self.error {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
        }
    }
}

//! Uniform response envelope shared by every tool and resource.
//!
//! Success bodies echo the request parameters next to one result field,
//! failures carry `{ error, message }` where `error` is a short label such as
//! `NotFound`. Both are sent as a single JSON text.

use leetcode_provider::ProviderError;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Label used when arguments fail to deserialize.
pub const INVALID_ARGUMENTS: &str = "Invalid arguments";

#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Success(Value),
    Failure { error: String, message: String },
}

impl Envelope {
    /// Echoed parameters plus `field: result`.
    pub fn success(echo: Value, field: &str, result: impl Serialize) -> Self {
        let result = match serde_json::to_value(result) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize {field}: {e}");
                return Self::failure("SerializationError", format!("Failed to serialize {field}: {e}"));
            }
        };
        let mut body = match echo {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("params".to_string(), other);
                map
            }
        };
        body.insert(field.to_string(), result);
        Self::Success(Value::Object(body))
    }

    pub fn failure(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
            message: message.into(),
        }
    }

    /// Failure envelope for a provider error.
    ///
    /// `error` is the error's label; `context` prefixes the message.
    /// Expected errors (missing credentials, unsupported on this site,
    /// not found) log at `warn`, the rest at `error`.
    pub fn from_provider_error(context: &str, err: &ProviderError) -> Self {
        if err.is_expected() {
            tracing::warn!(label = err.label(), "{context}: {err}");
        } else {
            tracing::error!(label = err.label(), "{context}: {err}");
        }
        Self::failure(err.label(), format!("{context}: {err}"))
    }

    /// Wraps a provider result, mapping `Err` to a failure envelope.
    pub fn from_result<T: Serialize>(
        result: Result<T, ProviderError>,
        echo: Value,
        field: &str,
        context: &str,
    ) -> Self {
        match result {
            Ok(value) => Self::success(echo, field, value),
            Err(err) => Self::from_provider_error(context, &err),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Success(body) => body.clone(),
            Self::Failure { error, message } => json!({ "error": error, "message": message }),
        }
    }

    pub fn to_text(&self) -> String {
        self.to_value().to_string()
    }

    pub fn into_call_tool_result(self) -> CallToolResult {
        let content = vec![Content::text(self.to_text())];
        if self.is_failure() {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

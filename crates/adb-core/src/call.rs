use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single named invocation dispatched from the host into a channel.
///
/// The arguments are carried verbatim; handlers that take no arguments
/// (like the built-in plugin) simply ignore them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub args: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: Value::Null,
        }
    }

    pub fn with_args(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// Outcome of dispatching a [`MethodCall`]. Exactly one is produced per call.
///
/// `NotImplemented` is a protocol response, not a fault: it tells the host
/// that no handler logic exists for the requested method name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResult {
    Success { value: Value },
    NotImplemented,
}

impl MethodResult {
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success {
            value: value.into(),
        }
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented)
    }

    /// Returns the payload as a string slice, if this is a successful string
    /// result.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Success { value } => value.as_str(),
            Self::NotImplemented => None,
        }
    }
}

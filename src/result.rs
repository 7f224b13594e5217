//! Uniform success/failure records returned by the service, and the
//! boundary type for what a caller may hand it.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use input::SpecInput;

/// Outcome of a service operation.
///
/// Plain data: built once, never modified. Serializes to
/// `{success, message, data, timestamp}` with an ISO-8601 timestamp.
///
/// ```rust
/// use spec_intake::ProcessingResult;
///
/// let result = ProcessingResult::failure("Cannot process null specification");
/// assert!(!result.success);
/// assert!(result.data.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub success: bool,
    pub message: String,
    pub data: Map<String, Value>,
    #[serde(with = "input::serde_iso")]
    pub timestamp: DateTime<Utc>,
}

impl ProcessingResult {
    pub fn new(success: bool, message: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            success,
            message: message.into(),
            data,
            timestamp: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>, data: Map<String, Value>) -> Self {
        Self::new(true, message, data)
    }

    /// Failed result with no data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(false, message, Map::new())
    }

    pub fn failure_with(message: impl Into<String>, data: Map<String, Value>) -> Self {
        Self::new(false, message, data)
    }

    /// JSON mapping form of this result.
    pub fn to_value(&self) -> Value {
        // A struct of strings, bools and JSON maps always serializes.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// What a caller passes to [`process_spec`](crate::SpecInputService::process_spec).
///
/// Anything that is not a [`SpecInput`] ends up as `Unrecognized` and is
/// answered with a failed result rather than an error. Strings and JSON
/// values are never coerced into an input.
///
/// ```rust
/// use spec_intake::{SpecInput, Submission};
///
/// assert!(matches!(Submission::from(SpecInput::text("ok")), Submission::Spec(_)));
/// assert!(matches!(Submission::from("not a spec object"), Submission::Unrecognized(_)));
/// ```
#[derive(Debug, Clone)]
pub enum Submission {
    Spec(SpecInput),
    Unrecognized(Value),
}

impl Submission {
    /// Short type name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Submission::Spec(_) => "spec_input",
            Submission::Unrecognized(Value::Null) => "null",
            Submission::Unrecognized(Value::Bool(_)) => "bool",
            Submission::Unrecognized(Value::Number(_)) => "number",
            Submission::Unrecognized(Value::String(_)) => "string",
            Submission::Unrecognized(Value::Array(_)) => "array",
            Submission::Unrecognized(Value::Object(_)) => "object",
        }
    }
}

impl From<SpecInput> for Submission {
    fn from(value: SpecInput) -> Self {
        Submission::Spec(value)
    }
}

impl From<Value> for Submission {
    fn from(value: Value) -> Self {
        Submission::Unrecognized(value)
    }
}

impl From<&str> for Submission {
    fn from(value: &str) -> Self {
        Submission::Unrecognized(Value::String(value.to_string()))
    }
}

impl From<String> for Submission {
    fn from(value: String) -> Self {
        Submission::Unrecognized(Value::String(value))
    }
}

//! Field-level decoding of JSON request payloads.
//!
//! Create payloads are decoded field by field rather than through
//! `serde::Deserialize` so that every problem in a payload is reported at
//! once, keyed by the offending field. Each `*_field` helper records its own
//! error into a shared [`FieldErrors`] and returns `None` on failure, letting
//! the caller keep going and collect the rest.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Key under which errors about the payload as a whole are reported.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_NULL: &str = "This field may not be null.";
pub const MSG_BLANK: &str = "This field may not be blank.";
pub const MSG_INVALID_INTEGER: &str = "A valid integer is required.";
pub const MSG_INVALID_NUMBER: &str = "A valid number is required.";
pub const MSG_INVALID_STRING: &str = "Not a valid string.";

/// Validation errors keyed by field name.
///
/// Serializes as a plain JSON object: `{"power": ["A valid integer is required."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error message against `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Names of all fields with at least one error, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Short JSON type name used in error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrow `value` as a JSON object, or record a non-field error.
pub fn as_object<'a>(value: &'a Value, errors: &mut FieldErrors) -> Option<&'a Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        other => {
            errors.add(
                NON_FIELD_ERRORS,
                format!(
                    "Invalid data. Expected a dictionary, but got {}.",
                    json_kind(other)
                ),
            );
            None
        }
    }
}

/// Look up a required, non-null field.
fn present<'a>(obj: &'a Map<String, Value>, name: &str, errors: &mut FieldErrors) -> Option<&'a Value> {
    match obj.get(name) {
        None => {
            errors.add(name, MSG_REQUIRED);
            None
        }
        Some(Value::Null) => {
            errors.add(name, MSG_NULL);
            None
        }
        Some(value) => Some(value),
    }
}

/// Decode a required integer field.
///
/// Accepts JSON integers, floats with no fractional part, and strings that
/// hold one of those.
pub fn integer_field(obj: &Map<String, Value>, name: &str, errors: &mut FieldErrors) -> Option<i64> {
    let value = present(obj, name, errors)?;
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    };
    if parsed.is_none() {
        errors.add(name, MSG_INVALID_INTEGER);
    }
    parsed
}

/// Decode a required floating-point field.
///
/// Accepts JSON numbers and strings holding a finite number.
pub fn number_field(obj: &Map<String, Value>, name: &str, errors: &mut FieldErrors) -> Option<f64> {
    let value = present(obj, name, errors)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite());
    if parsed.is_none() {
        errors.add(name, MSG_INVALID_NUMBER);
    }
    parsed
}

/// Decode a required, non-blank string field.
///
/// Surrounding whitespace is trimmed. Numbers are accepted and kept in their
/// JSON text form.
pub fn string_field(obj: &Map<String, Value>, name: &str, errors: &mut FieldErrors) -> Option<String> {
    let value = present(obj, name, errors)?;
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => {
            errors.add(name, MSG_INVALID_STRING);
            return None;
        }
    };
    if text.is_empty() {
        errors.add(name, MSG_BLANK);
        return None;
    }
    Some(text)
}

fn integral(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

use crate::mcp::errors;
use serde_json::{Map, Value};
use std::fmt;
use url::Url;

#[derive(Debug, Clone)]
pub struct InputError {
    pub kind: &'static str,
    pub message: String,
}

impl InputError {
    fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(errors::INVALID_INPUT, message)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for InputError {}

pub fn arguments(args: &Value) -> Result<&Map<String, Value>, InputError> {
    args.as_object()
        .ok_or_else(|| InputError::invalid_input("arguments must be an object"))
}

/// A string field that must be present and non-empty. `missing` is returned
/// verbatim when it is absent, null or empty.
pub fn required_str<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
    missing: &str,
) -> Result<&'a str, InputError> {
    match optional_str(obj, field)? {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(InputError::invalid_input(missing)),
    }
}

pub fn optional_str<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
) -> Result<Option<&'a str>, InputError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(_) => Err(InputError::invalid_input(format!(
            "{field} must be a string"
        ))),
    }
}

/// Bounds are in characters, inclusive.
pub fn check_length(
    text: &str,
    min: usize,
    max: usize,
    too_short: &str,
    too_long: &str,
) -> Result<(), InputError> {
    let len = text.chars().count();
    if len < min {
        return Err(InputError::invalid_input(too_short));
    }
    if len > max {
        return Err(InputError::invalid_input(too_long));
    }
    Ok(())
}

pub fn check_max_length(text: &str, max: usize, too_long: &str) -> Result<(), InputError> {
    check_length(text, 0, max, too_long, too_long)
}

pub fn check_http_url(value: &str, invalid: &str) -> Result<(), InputError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => Ok(()),
        _ => Err(InputError::invalid_input(invalid)),
    }
}

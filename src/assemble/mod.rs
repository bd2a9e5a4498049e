//! Turns Winston AI responses into display strings.
//!
//! Every kind follows the same policy: an `{error}` payload, a non-object
//! body, or a success body whose indicator field is absent, null or zero is
//! echoed back as pretty-printed JSON. Other fields that are missing or
//! mistyped only degrade the prose to their defaults. Otherwise a prose summary is built and the
//! response JSON is appended after a separator. Nothing here fails or mutates
//! its input.
//!
//! A genuine score of `0` cannot be told apart from a missing one, so it is
//! rendered as a failure echo. Values that decode but make no sense (a
//! negative score, say) produce prose as-is.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cmp::Ordering;

pub mod compare;
pub mod image;
pub mod plagiarism;
pub mod text;

pub const TOP_SENTENCES: usize = 4;
pub const TOP_SOURCES: usize = 4;

pub const FULL_RESPONSE_SEPARATOR: &str = "\n\n Full API Response : \n\n";
pub const PLAGIARISM_RESPONSE_SEPARATOR: &str = "\n\n API Response : \n\n";

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResult {
    pub error: String,
}

#[derive(Debug, Clone)]
pub enum Detection<T> {
    Success(T),
    Error(ErrorResult),
    /// Not a JSON object.
    Unrecognized,
}

/// A decoded upstream body together with the JSON it was decoded from.
#[derive(Debug, Clone)]
pub struct Response<T> {
    raw: Value,
    detection: Detection<T>,
}

impl<T: DeserializeOwned> Response<T> {
    pub fn from_value(raw: Value) -> Self {
        let detection = match raw.get("error") {
            Some(error) => Detection::Error(ErrorResult {
                error: error
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| error.to_string()),
            }),
            None if raw.is_object() => match serde_json::from_value::<T>(raw.clone()) {
                Ok(parsed) => Detection::Success(parsed),
                Err(_) => Detection::Unrecognized,
            },
            None => Detection::Unrecognized,
        };
        Self { raw, detection }
    }
}

impl<T> Response<T> {
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn detection(&self) -> &Detection<T> {
        &self.detection
    }

    /// The typed view and its indicator value, if the indicator is truthy.
    fn success_with(&self, indicator: impl Fn(&T) -> Option<f64>) -> Option<(&T, f64)> {
        match &self.detection {
            Detection::Success(parsed) => match indicator(parsed) {
                Some(value) if is_truthy(value) => Some((parsed, value)),
                _ => None,
            },
            _ => None,
        }
    }
}

fn is_truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Shortest form, no trailing `.0`. Always plain decimal, never exponent
/// notation, so `1e-7` prints as `0.0000001`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Probability in [0, 1] to a percentage with two decimals, half away from zero.
pub fn probability_percent(probability: f64) -> f64 {
    (probability * 100.0 * 100.0).round() / 100.0
}

/// The `n` highest-scoring items, ties kept in input order.
pub fn top_by_score<T>(items: &[T], n: usize, score: impl Fn(&T) -> f64) -> Vec<&T> {
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}

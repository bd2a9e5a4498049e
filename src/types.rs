//! Typed views over Winston AI payloads.
//!
//! Response views are lenient: every field has a default so that a partial
//! body still decodes, and a field holding `null` or the wrong JSON type
//! decodes as that default instead of failing the whole body. The raw JSON is
//! kept alongside by the assembler and is what gets echoed back (credits,
//! versions, watermark info, match spans...), so these structs only name the
//! fields the prose reads.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct AiTextDetectionRequest<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<&'a str>,
    pub sentences: bool,
    pub version: &'static str,
    pub language: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AiImageDetectionRequest<'a> {
    pub url: &'a str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlagiarismRequest<'a> {
    pub text: &'a str,
    pub language: &'a str,
    pub country: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextCompareRequest<'a> {
    pub first_text: &'a str,
    pub second_text: &'a str,
}

/// Falls back to `T::default()` when the value does not fit `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Keeps the object elements of an array, skipping anything else.
fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Sentence {
    #[serde(deserialize_with = "lenient")]
    pub text: String,
    #[serde(deserialize_with = "lenient")]
    pub score: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AiTextDetection {
    /// Human score, 0..100. Named `score` on the wire.
    #[serde(deserialize_with = "lenient")]
    pub score: Option<f64>,
    #[serde(deserialize_with = "lenient_items")]
    pub sentences: Vec<Sentence>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AiImageDetection {
    #[serde(deserialize_with = "lenient")]
    pub human_probability: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub ai_probability: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlagiarismSummary {
    #[serde(deserialize_with = "lenient")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlagiarismSource {
    #[serde(deserialize_with = "lenient")]
    pub score: f64,
    #[serde(deserialize_with = "lenient")]
    pub can_access: bool,
    #[serde(deserialize_with = "lenient")]
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlagiarismDetection {
    #[serde(deserialize_with = "lenient")]
    pub result: PlagiarismSummary,
    #[serde(deserialize_with = "lenient_items")]
    pub sources: Vec<PlagiarismSource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ComparisonSide {
    #[serde(deserialize_with = "lenient")]
    pub similarity_percentage: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextCompare {
    #[serde(deserialize_with = "lenient")]
    pub similarity_score: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub first_text: ComparisonSide,
    #[serde(deserialize_with = "lenient")]
    pub second_text: ComparisonSide,
}

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::client::ApiFailure;

/// A decoded JSON response object.
pub type JsonObject = serde_json::Map<String, Value>;

/// Error code the gateway uses for an invalid or expired API key.
pub const INVALID_KEY_CODE: &str = "101";

const STATUS_FAILURE: &str = "0";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("unexpected response shape: {0}")]
    Shape(#[source] serde_json::Error),
}

/// Scalar value returned by SMSCenter as either JSON string, number or boolean.
///
/// The gateway is inconsistent (`"smsId": "123"` in one response, `"smsId": 123` in
/// another), so every scalar is kept as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireText {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl WireText {
    pub fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
        }
    }
}

/// Either a single scalar or a list of scalars.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireList {
    Many(Vec<WireText>),
    One(WireText),
}

impl WireList {
    pub fn into_strings(self) -> Vec<String> {
        match self {
            Self::Many(values) => values.into_iter().map(WireText::into_string).collect(),
            Self::One(value) => vec![value.into_string()],
        }
    }
}

pub fn text(value: Option<WireText>) -> Option<String> {
    value.map(WireText::into_string)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        Value::Bool(value) => Some(value.to_string()),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|it| !it.is_empty())
}

pub fn flag(value: bool) -> String {
    if value { "true" } else { "false" }.to_owned()
}

pub fn parse_object(body: &str) -> Result<JsonObject, TransportError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Object(object) => Ok(object),
        other => Err(TransportError::NotAnObject {
            found: kind_of(&other),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `Some` when the response signals failure (`status == "0"`).
///
/// A missing `status` is a success: a few endpoints never send one.
pub fn failure(object: &JsonObject) -> Option<ApiFailure> {
    let status = object.get("status").and_then(scalar_text)?;
    if status != STATUS_FAILURE {
        return None;
    }
    Some(ApiFailure {
        message: non_empty(object.get("remarks").and_then(scalar_text)),
        code: non_empty(object.get("error").and_then(scalar_text)),
        response: Some(object.clone()),
    })
}

pub fn is_invalid_key(failure: &ApiFailure) -> bool {
    failure.code.as_deref() == Some(INVALID_KEY_CODE)
}

pub fn decode<T: DeserializeOwned>(object: &JsonObject) -> Result<T, TransportError> {
    serde_json::from_value(Value::Object(object.clone())).map_err(TransportError::Shape)
}

/// Rows stored under stringified indices (`"0"`, `"1"`, ...) next to the envelope fields.
///
/// Rows come back in index order; keys that are not indices are skipped.
pub fn indexed_rows<T: DeserializeOwned>(object: &JsonObject) -> Result<Vec<T>, TransportError> {
    let mut rows = object
        .iter()
        .filter_map(|(key, value)| key.parse::<usize>().ok().map(|idx| (idx, value)))
        .collect::<Vec<_>>();
    rows.sort_by_key(|(idx, _)| *idx);

    rows.into_iter()
        .map(|(_, value)| serde_json::from_value(value.clone()).map_err(TransportError::Shape))
        .collect()
}

fn has_index_keys(object: &JsonObject) -> bool {
    object.keys().any(|key| key.parse::<usize>().is_ok())
}

/// `deserialize_with` helper for list fields.
///
/// Accepts a JSON array, `null`, an empty object, an index-keyed object
/// (`{"0": {..}, "1": {..}}`) or a single row object.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
            .collect(),
        Value::Object(object) if object.is_empty() || has_index_keys(&object) => {
            indexed_rows(&object).map_err(D::Error::custom)
        }
        Value::Object(object) => serde_json::from_value(Value::Object(object))
            .map(|row| vec![row])
            .map_err(D::Error::custom),
        other => Err(D::Error::custom(format!(
            "expected a list, got {}",
            kind_of(&other)
        ))),
    }
}

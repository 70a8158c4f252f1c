//! Decoded response body representation.

use serde::Serialize;
use serde_json::Value;

/// A decoded HTTP response body.
///
/// The transport layer inspects the `content-type` response header: if it
/// contains `"json"` the body is parsed and returned as [`ResponseBody::Json`];
/// on parse failure, or for any other content type, the raw text is returned
/// as [`ResponseBody::Text`]. The fallback never surfaces as an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// A successfully parsed JSON value, passed through verbatim.
    Json(Value),
    /// The raw body text for non-JSON or undecodable responses.
    Text(String),
}

impl ResponseBody {
    /// Returns the parsed JSON value, if this body decoded as JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    /// Consumes the body, returning the JSON value if present.
    pub fn into_json(self) -> Option<Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    /// Returns the raw text, if this body fell back to text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Json(_) => None,
            ResponseBody::Text(text) => Some(text),
        }
    }
}

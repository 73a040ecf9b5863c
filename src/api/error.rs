use serde_json::Value;
use thiserror::Error;

/// Failure of a single API round trip
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Credentials rejected
    #[error("{0}")]
    Auth(String),
    /// Server refused the request; message comes from the response body
    #[error("{0}")]
    Validation(String),
    /// Request never completed
    #[error("Network error: {0}")]
    Network(String),
    /// Success status but the body was not what we expect
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// What could be salvaged from an error response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// JSON body carrying a `detail` or `error` message
    Detail(String),
    /// Non-empty body that is not structured
    Raw(String),
    Empty,
}

impl ErrorBody {
    /// User-facing message, `fallback` when nothing usable came back
    pub fn into_message(self, fallback: &str) -> String {
        match self {
            ErrorBody::Detail(msg) | ErrorBody::Raw(msg) => msg,
            ErrorBody::Empty => fallback.to_string(),
        }
    }
}

/// Decode an error body: JSON `detail` wins over `error`, then the raw text
pub fn decode_error_body(text: &str) -> ErrorBody {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ErrorBody::Empty;
    }

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        for key in ["detail", "error"] {
            if let Some(msg) = map.get(key).and_then(detail_text) {
                return ErrorBody::Detail(msg);
            }
        }
    }

    ErrorBody::Raw(trimmed.to_string())
}

/// A detail is either a string or a list of validation entries with `msg`
fn detail_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Object(obj) => obj.get("msg").and_then(Value::as_str).map(str::to_string),
                    _ => None,
                })
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}

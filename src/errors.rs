// ============================================================================
// ERRORS - Taxonomía de fallos del widget de perfil
// ============================================================================
// Ningún error se muestra al usuario: todos terminan en redirect a login.
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while loading, rendering or signing out the profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// No bearer token in storage.
    #[error("no credential token in storage")]
    MissingToken,

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    /// The body was not a JSON object with optional string `name`/`email`.
    #[error("parse error: {0}")]
    Parse(String),

    /// The load was aborted before its result could be applied.
    #[error("load aborted")]
    Aborted,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl ProfileError {
    /// Build a `Dom` error from a raw `JsValue` thrown by web-sys.
    pub fn from_js(value: &JsValue) -> Self {
        ProfileError::Dom(js_message(value))
    }
}

impl From<ProfileError> for JsValue {
    fn from(err: ProfileError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort text for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl From<serde_json::Error> for ProfileError {
    fn from(e: serde_json::Error) -> Self {
        ProfileError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_like_http_line() {
        let err = ProfileError::Status { status: 401, status_text: "Unauthorized".to_string() };
        assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let err: ProfileError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, ProfileError::Parse(_)));
    }
}

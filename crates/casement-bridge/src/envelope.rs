//! Wire envelopes crossing the host/page boundary.
//!
//! Two shapes, both JSON:
//! - **Page -> host**: `{funcName, args, callbackId}` via
//!   `window.ipc.postMessage`.
//! - **Host -> page**: `{callbackId, success, payload}` delivered by
//!   evaluating a script in the page. `payload` is itself a JSON-encoded
//!   string: the result on success, `{"error": "..."}` on failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A call request from the page. Immutable once sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallEnvelope {
    /// Name of the builtin or user-registered function.
    pub func_name: String,
    /// Positional arguments (arbitrary JSON values).
    #[serde(default)]
    pub args: Vec<Value>,
    /// Correlation id pairing this call with its one response.
    pub callback_id: String,
}

impl CallEnvelope {
    /// Parse a call envelope from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// The single response to a call. Immutable once sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub callback_id: String,
    pub success: bool,
    /// JSON-encoded result, or `{"error": string}` when `success` is false.
    pub payload: String,
}

impl ResponseEnvelope {
    /// Successful response carrying the handler's JSON result.
    pub fn ok(callback_id: &str, result: &Value) -> Self {
        Self {
            callback_id: callback_id.to_string(),
            success: true,
            payload: result.to_string(),
        }
    }

    /// Failed response carrying the failure's textual description.
    pub fn err(callback_id: &str, detail: &str) -> Self {
        Self {
            callback_id: callback_id.to_string(),
            success: false,
            payload: serde_json::json!({ "error": detail }).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_call_envelope() {
        let raw = r#"{"funcName":"set_size","args":[800,600],"callbackId":"abc-123"}"#;
        let call = CallEnvelope::from_json(raw).unwrap();
        assert_eq!(call.func_name, "set_size");
        assert_eq!(call.args, vec![json!(800), json!(600)]);
        assert_eq!(call.callback_id, "abc-123");
    }

    #[test]
    fn missing_args_defaults_to_empty() {
        let raw = r#"{"funcName":"center","callbackId":"x"}"#;
        let call = CallEnvelope::from_json(raw).unwrap();
        assert!(call.args.is_empty());
    }

    #[test]
    fn rejects_garbage_and_missing_fields() {
        assert!(CallEnvelope::from_json("not json").is_none());
        assert!(CallEnvelope::from_json(r#"{"funcName":"x"}"#).is_none());
        assert!(CallEnvelope::from_json(r#"{"args":[],"callbackId":"y"}"#).is_none());
    }

    #[test]
    fn ok_response_encodes_result_as_json_string() {
        let resp = ResponseEnvelope::ok("id-1", &json!({"status": "success", "width": 800}));
        assert!(resp.success);
        assert_eq!(resp.callback_id, "id-1");
        let parsed: Value = serde_json::from_str(&resp.payload).unwrap();
        assert_eq!(parsed["width"], 800);
    }

    #[test]
    fn err_response_wraps_detail_in_error_object() {
        let resp = ResponseEnvelope::err("id-2", "Function 'nope' not found");
        assert!(!resp.success);
        let parsed: Value = serde_json::from_str(&resp.payload).unwrap();
        assert_eq!(parsed["error"], "Function 'nope' not found");
    }

    #[test]
    fn response_serializes_camel_case() {
        let resp = ResponseEnvelope::ok("id-3", &json!(null));
        let text = serde_json::to_string(&resp).unwrap();
        assert!(text.contains("\"callbackId\""));
        assert!(text.contains("\"success\""));
        assert!(text.contains("\"payload\""));
    }
}

//! JSON-RPC 2.0 protocol implementation
//!
//! Defines the core protocol types for MCP communication over stdio.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// MCP protocol revision implemented by the server
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC 2.0 request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version (must be "2.0")
    pub jsonrpc: String,

    /// Method name to invoke
    pub method: String,

    /// Parameters (can be object or array)
    #[serde(default)]
    pub params: Value,

    /// Request ID; `None` only when the member is absent, `Some(Null)` for `"id": null`
    #[serde(
        default,
        deserialize_with = "present_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Value>,
}

impl JsonRpcRequest {
    /// Notifications have no `id` member and get no response
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Keep an explicit null id so the request is still answered
fn present_id<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version (must be "2.0")
    pub jsonrpc: String,

    /// Result (present if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Error (present if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,

    /// Request ID (echoed from request)
    pub id: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a success response
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response
    pub fn error(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code
    pub code: i32,

    /// Error message
    pub message: String,

    /// Additional error data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// Parse error (-32700)
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self {
            code: -32700,
            message: message.into(),
            data: None,
        }
    }

    /// Invalid request (-32600)
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            code: -32600,
            message: message.into(),
            data: None,
        }
    }

    /// Method not found (-32601)
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self {
            code: -32601,
            message: format!("Method not found: {}", method.into()),
            data: None,
        }
    }

    /// Invalid params (-32602)
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self {
            code: -32602,
            message: message.into(),
            data: None,
        }
    }

    /// Application error (custom code)
    pub fn application_error(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(line: &str) -> JsonRpcRequest {
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn test_missing_id_is_notification() {
        let request = parse(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#);

        assert!(request.is_notification());
        assert_eq!(request.params, Value::Null);
    }

    #[test]
    fn test_null_id_is_a_request() {
        let request = parse(r#"{"jsonrpc":"2.0","method":"ping","id":null}"#);

        assert!(!request.is_notification());
        assert_eq!(request.id, Some(Value::Null));
    }

    #[test]
    fn test_string_id_is_kept() {
        let request = parse(r#"{"jsonrpc":"2.0","method":"tools/list","id":"abc"}"#);
        assert_eq!(request.id, Some(json!("abc")));
    }

    #[test]
    fn test_response_echoes_null_id() {
        let response = JsonRpcResponse::success(Some(Value::Null), json!({}));

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.as_object().unwrap().contains_key("id"));
        assert_eq!(json["id"], Value::Null);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(JsonRpcError::parse_error("x").code, -32700);
        assert_eq!(JsonRpcError::invalid_request("x").code, -32600);
        assert_eq!(JsonRpcError::invalid_params("x").code, -32602);

        let err = JsonRpcError::method_not_found("prompts/delete");
        assert_eq!(err.code, -32601);
        assert_eq!(err.message, "Method not found: prompts/delete");
    }
}

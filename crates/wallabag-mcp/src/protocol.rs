//! MCP protocol types (JSON-RPC 2.0)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// MCP protocol revision implemented by this server
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC error code for unparsable input
pub const PARSE_ERROR: i32 = -32700;
/// JSON-RPC error code for unknown methods
pub const METHOD_NOT_FOUND: i32 = -32601;
/// JSON-RPC error code for bad parameters
pub const INVALID_PARAMS: i32 = -32602;

/// JSON-RPC request
///
/// A request without an `id` is a notification and gets no response.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version (must be "2.0")
    pub jsonrpc: String,
    /// Request ID
    #[serde(default)]
    pub id: Option<Value>,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: Value,
}

/// JSON-RPC response (success)
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version (must be "2.0")
    pub jsonrpc: String,
    /// Request ID
    pub id: Option<Value>,
    /// Result data
    pub result: Value,
}

/// JSON-RPC error response
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    /// JSON-RPC version (must be "2.0")
    pub jsonrpc: String,
    /// Request ID
    pub id: Option<Value>,
    /// Error details
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Error code
    pub code: i32,
    /// Error message
    pub message: String,
}

impl JsonRpcResponse {
    /// Create a new success response
    pub fn new(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
        }
    }
}

impl JsonRpcError {
    /// Create a new error response
    pub fn new(id: Option<Value>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            error: ErrorDetail { code, message },
        }
    }

    /// Convert to a JSON value without going through a serializer
    pub fn into_value(self) -> Value {
        let mut error = Map::new();
        error.insert("code".to_string(), Value::from(self.error.code));
        error.insert("message".to_string(), Value::String(self.error.message));

        let mut response = Map::new();
        response.insert("jsonrpc".to_string(), Value::String(self.jsonrpc));
        response.insert("id".to_string(), self.id.unwrap_or(Value::Null));
        response.insert("error".to_string(), Value::Object(error));
        Value::Object(response)
    }
}

/// MCP tool list response
#[derive(Debug, Serialize)]
pub struct ToolListResponse {
    /// Available tools
    pub tools: Vec<ToolDefinition>,
}

/// Tool definition
#[derive(Debug, Serialize)]
pub struct ToolDefinition {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Input schema (JSON Schema)
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Result of `tools/call`
#[derive(Debug, Serialize)]
pub struct ToolCallResponse {
    /// Content blocks returned by the tool
    pub content: Vec<Content>,
}

impl ToolCallResponse {
    /// A response carrying a single text block
    pub fn text(text: String) -> Self {
        Self {
            content: vec![Content::Text { text }],
        }
    }
}

/// Content block
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    /// Plain text
    Text {
        /// The text
        text: String,
    },
}

/// MCP prompt list response
#[derive(Debug, Serialize)]
pub struct PromptListResponse {
    /// Available prompts
    pub prompts: Vec<PromptDefinition>,
}

/// Prompt definition
#[derive(Debug, Serialize)]
pub struct PromptDefinition {
    /// Prompt name
    pub name: String,
    /// Prompt description
    pub description: String,
    /// Arguments the prompt accepts
    pub arguments: Vec<PromptArgument>,
}

/// Prompt argument
#[derive(Debug, Serialize)]
pub struct PromptArgument {
    /// Argument name
    pub name: String,
    /// Argument description
    pub description: String,
    /// Whether the argument must be given
    pub required: bool,
}

/// Result of `prompts/get`
#[derive(Debug, Serialize)]
pub struct GetPromptResponse {
    /// Prompt description
    pub description: String,
    /// Rendered messages
    pub messages: Vec<PromptMessage>,
}

/// A rendered prompt message
#[derive(Debug, Serialize)]
pub struct PromptMessage {
    /// Speaker role ("user" or "assistant")
    pub role: String,
    /// Message content
    pub content: Content,
}

/// MCP server info
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// Initialize response
#[derive(Debug, Serialize)]
pub struct InitializeResponse {
    /// Protocol version
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server info
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// Capabilities
    pub capabilities: Capabilities,
    /// Usage hints for the client model
    pub instructions: String,
}

/// Server capabilities
#[derive(Debug, Serialize)]
pub struct Capabilities {
    /// Tools capability
    pub tools: ListCapability,
    /// Prompts capability
    pub prompts: ListCapability,
}

/// Capability for a listable feature
#[derive(Debug, Serialize)]
pub struct ListCapability {
    /// Whether the server announces list changes
    #[serde(rename = "listChanged")]
    pub list_changed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_notification_has_no_id() {
        let request: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
                .unwrap();
        assert!(request.id.is_none());
        assert!(request.params.is_null());
    }

    #[test]
    fn test_error_into_value_matches_serialized_form() {
        let error = JsonRpcError::new(Some(json!(5)), METHOD_NOT_FOUND, "nope".to_string());
        let expected = serde_json::to_value(&error).unwrap();
        assert_eq!(error.into_value(), expected);

        let anonymous = JsonRpcError::new(None, PARSE_ERROR, "bad".to_string()).into_value();
        assert!(anonymous["id"].is_null());
        assert_eq!(anonymous["error"]["code"], PARSE_ERROR);
    }

    #[test]
    fn test_tool_call_response_shape() {
        let value = serde_json::to_value(ToolCallResponse::text("hi".to_string())).unwrap();
        assert_eq!(value, json!({"content": [{"type": "text", "text": "hi"}]}));
    }

    #[test]
    fn test_tool_definition_schema_key() {
        let value = serde_json::to_value(ToolDefinition {
            name: "t".to_string(),
            description: "d".to_string(),
            input_schema: json!({"type": "object"}),
        })
        .unwrap();
        assert_eq!(value["inputSchema"]["type"], "object");
    }
}

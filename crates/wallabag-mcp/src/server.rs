//! MCP server implementation

use serde::Serialize;
use serde_json::{json, Value};
use std::io::{BufRead, Write};
use tokio::runtime::Runtime;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};
use wallabag_sdk::{Credentials, WallabagClient, WallabagConfig};

use crate::error::McpError;
use crate::prompts;
use crate::protocol::*;
use crate::tools;

const INSTRUCTIONS: &str = "This server provides saved articles from the user's self-hosted \
    Wallabag service. Use the `get_wallabag_articles` tool to retrieve a list of saved \
    articles, `get_single_wallabag_article` to read one article in full, and \
    `search_articles` to search for specific articles by title or content.";

/// MCP Server
///
/// Handles Model Context Protocol requests via stdio transport. The Wallabag
/// client is created and authenticated on the first tool call and reused for
/// the rest of the session.
pub struct McpServer {
    config: WallabagConfig,
    client: OnceCell<WallabagClient>,
    runtime: Runtime,
}

impl McpServer {
    /// Create a new MCP server
    ///
    /// # Arguments
    ///
    /// * `config` - Wallabag settings used to build the client on first use
    pub fn new(config: WallabagConfig) -> Result<Self, McpError> {
        Ok(Self {
            config,
            client: OnceCell::new(),
            runtime: Runtime::new()?,
        })
    }

    /// Create a server around an already authenticated client
    pub fn with_client(client: WallabagClient) -> Result<Self, McpError> {
        Ok(Self {
            config: WallabagConfig::default(),
            client: OnceCell::new_with(Some(client)),
            runtime: Runtime::new()?,
        })
    }

    /// Run the MCP server (stdio transport)
    ///
    /// Reads JSON-RPC requests from stdin and writes responses to stdout.
    pub fn run(&self) -> Result<(), McpError> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        self.serve(stdin.lock(), &mut stdout)
    }

    /// Serve line-delimited JSON-RPC from `reader` until it is exhausted
    pub fn serve<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> Result<(), McpError> {
        info!("MCP server started");

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_message(&line) {
                self.write_response(writer, &response)?;
            }
        }

        info!("MCP server stopped");
        Ok(())
    }

    /// Handle one raw JSON-RPC message
    ///
    /// Returns `None` for notifications, which get no response.
    pub fn handle_message(&self, line: &str) -> Option<Value> {
        debug!("Received request: {}", line);

        match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle_request(request),
            Err(e) => {
                error!("Failed to parse request: {}", e);
                Some(error_value(None, PARSE_ERROR, format!("Parse error: {}", e)))
            }
        }
    }

    /// Handle a JSON-RPC request
    fn handle_request(&self, request: JsonRpcRequest) -> Option<Value> {
        let Some(id) = request.id else {
            debug!(method = %request.method, "Notification received");
            return None;
        };
        let id = Some(id);

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "ping" => result_value(id, json!({})),
            "tools/list" => result_value(id, ToolListResponse { tools: tools::definitions() }),
            "tools/call" => self.handle_tool_call(id, request.params),
            "prompts/list" => result_value(
                id,
                PromptListResponse {
                    prompts: prompts::definitions(),
                },
            ),
            "prompts/get" => self.handle_prompt_get(id, request.params),
            _ => error_value(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };

        Some(response)
    }

    /// Handle initialize request
    fn handle_initialize(&self, id: Option<Value>) -> Value {
        let response = InitializeResponse {
            protocol_version: PROTOCOL_VERSION.to_string(),
            server_info: ServerInfo {
                name: "wallabag-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: Capabilities {
                tools: ListCapability { list_changed: false },
                prompts: ListCapability { list_changed: false },
            },
            instructions: INSTRUCTIONS.to_string(),
        };

        result_value(id, response)
    }

    /// Handle tools/call request
    fn handle_tool_call(&self, id: Option<Value>, params: Value) -> Value {
        let tool_name = match params.get("name").and_then(|v| v.as_str()) {
            Some(name) => name,
            None => return error_value(id, INVALID_PARAMS, "Missing tool name".to_string()),
        };

        let arguments = match params.get("arguments") {
            Some(Value::Null) | None => json!({}),
            Some(args) => args.clone(),
        };

        // Route to appropriate tool handler
        let payload = match tool_name {
            tools::GET_ARTICLE_TOOL => {
                tools::envelope(self.runtime.block_on(self.call_get_article(arguments)))
            }
            tools::LIST_ARTICLES_TOOL => {
                tools::envelope(self.runtime.block_on(self.call_list_articles(arguments)))
            }
            tools::SEARCH_TOOL => tools::envelope(self.runtime.block_on(self.call_search(arguments))),
            _ => {
                return error_value(id, INVALID_PARAMS, format!("Tool not found: {}", tool_name));
            }
        };

        if payload["success"] == false {
            error!(tool = tool_name, error = %payload["error"], "Tool call failed");
        }

        match serde_json::to_string_pretty(&payload) {
            Ok(text) => result_value(id, ToolCallResponse::text(text)),
            Err(e) => error_value(id, PARSE_ERROR, e.to_string()),
        }
    }

    /// Handle prompts/get request
    fn handle_prompt_get(&self, id: Option<Value>, params: Value) -> Value {
        let Some(name) = params.get("name").and_then(|v| v.as_str()) else {
            return error_value(id, INVALID_PARAMS, "Missing prompt name".to_string());
        };
        let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

        match prompts::render(name, &arguments) {
            Ok(response) => result_value(id, response),
            Err(e) => error_value(id, e.error_code(), e.to_string()),
        }
    }

    /// The shared client, created and authenticated on first use
    ///
    /// A failed initialization leaves the slot empty so the next call retries.
    async fn client(&self) -> Result<&WallabagClient, McpError> {
        self.client
            .get_or_try_init(|| async {
                let mut client = WallabagClient::with_config(None, None, self.config.clone())?;
                client.authenticate(Credentials::default()).await?;
                info!(base_url = client.base_url(), "Wallabag client initialized");
                Ok::<_, McpError>(client)
            })
            .await
    }

    /// Call single article tool
    async fn call_get_article(&self, arguments: Value) -> Result<tools::GetArticleResult, McpError> {
        let params: tools::GetArticleParams = tools::parse_params(arguments)?;
        tools::handle_get_article(self.client().await?, params).await
    }

    /// Call listing tool
    async fn call_list_articles(&self, arguments: Value) -> Result<tools::ListArticlesResult, McpError> {
        let params: tools::ListArticlesParams = tools::parse_params(arguments)?;
        tools::handle_list_articles(self.client().await?, params).await
    }

    /// Call search tool
    async fn call_search(&self, arguments: Value) -> Result<tools::SearchResult, McpError> {
        let params: tools::SearchParams = tools::parse_params(arguments)?;
        tools::handle_search(self.client().await?, params).await
    }

    /// Write response to stdout
    fn write_response<W: Write>(&self, writer: &mut W, response: &Value) -> Result<(), McpError> {
        let response_str = serde_json::to_string(response)?;
        writeln!(writer, "{}", response_str)?;
        writer.flush()?;
        debug!("Sent response: {}", response_str);
        Ok(())
    }
}

fn result_value<T: Serialize>(id: Option<Value>, result: T) -> Value {
    let response = serde_json::to_value(result)
        .and_then(|result| serde_json::to_value(JsonRpcResponse::new(id.clone(), result)));

    match response {
        Ok(response) => response,
        Err(e) => error_value(id, PARSE_ERROR, e.to_string()),
    }
}

fn error_value(id: Option<Value>, code: i32, message: String) -> Value {
    JsonRpcError::new(id, code, message).into_value()
}

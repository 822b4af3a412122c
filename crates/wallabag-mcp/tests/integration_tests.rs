//! Integration tests for MCP server
//!
//! These tests drive the JSON-RPC loop end to end against a wiremock server
//! standing in for Wallabag. The MCP server owns its own runtime, so the
//! tests are synchronous and use a separate runtime for the mock.

use serde_json::{json, Value};
use std::io::Cursor;
use tokio::runtime::Runtime;
use wallabag_mcp::McpServer;
use wallabag_sdk::WallabagConfig;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Field order matters: the mock server drops before its runtime.
struct Harness {
    wallabag: MockServer,
    runtime: Runtime,
}

impl Harness {
    fn start() -> Self {
        let runtime = Runtime::new().unwrap();
        let wallabag = runtime.block_on(MockServer::start());
        Self { wallabag, runtime }
    }

    fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.wallabag));
    }

    fn mount_token(&self) {
        self.mount(
            Mock::given(method("GET"))
                .and(path("/oauth/v2/token"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(json!({"access_token": "mcp-token"})),
                )
                .expect(1),
        );
    }

    fn config(&self) -> WallabagConfig {
        WallabagConfig {
            base_url: Some(self.wallabag.uri()),
            client_id: Some("cid".to_string()),
            client_secret: Some("secret".to_string()),
            username: Some("reader".to_string()),
            password: Some("pw".to_string()),
        }
    }

    fn server(&self) -> McpServer {
        McpServer::new(self.config()).unwrap()
    }
}

fn tool_call(id: u64, name: &str, arguments: Value) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {"name": name, "arguments": arguments}
    })
    .to_string()
}

/// Decode the envelope carried in a tools/call result
fn envelope(response: &Value) -> Value {
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

fn article(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Saved {id}"),
        "url": format!("http://example.com/{id}"),
        "created_at": "2023-01-01T10:00:00+0000",
        "updated_at": "2023-01-01T11:00:00+0000",
        "is_archived": 0,
        "is_starred": 1
    })
}

#[test]
fn test_tools_list() {
    let server = McpServer::new(WallabagConfig::default()).unwrap();
    let response = server
        .handle_message(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#)
        .unwrap();

    let tools = response["result"]["tools"].as_array().unwrap();
    let names: Vec<_> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "get_single_wallabag_article",
            "get_wallabag_articles",
            "search_articles"
        ]
    );
    assert_eq!(tools[0]["inputSchema"]["required"], json!(["id"]));
    assert_eq!(tools[2]["inputSchema"]["required"], json!(["search_term"]));
}

#[test]
fn test_prompts() {
    let server = McpServer::new(WallabagConfig::default()).unwrap();

    let list = server
        .handle_message(r#"{"jsonrpc":"2.0","id":1,"method":"prompts/list"}"#)
        .unwrap();
    assert_eq!(list["result"]["prompts"][0]["name"], "ask_for_titles");

    let get = server
        .handle_message(
            r#"{"jsonrpc":"2.0","id":2,"method":"prompts/get","params":{"name":"ask_for_titles","arguments":{"count":"4"}}}"#,
        )
        .unwrap();
    assert_eq!(
        get["result"]["messages"][0]["content"]["text"],
        "Can you give me the titles for my last 4 saved articles from Wallabag?"
    );
}

#[test]
fn test_unknown_tool_is_protocol_error() {
    let server = McpServer::new(WallabagConfig::default()).unwrap();
    let response = server
        .handle_message(&tool_call(3, "delete_everything", json!({})))
        .unwrap();
    assert_eq!(response["error"]["code"], -32602);
    assert!(response.get("result").is_none());
}

#[test]
fn test_list_articles_tool() {
    let harness = Harness::start();
    harness.mount_token();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/api/entries"))
            .and(header("Authorization", "Bearer mcp-token"))
            .and(query_param("archive", "0"))
            .and(query_param("perPage", "2"))
            .and(query_param("order", "asc"))
            .and(query_param("detail", "metadata"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_embedded": {"items": [article(1), article(2)]}
            }))),
    );

    let server = harness.server();
    let response = server
        .handle_message(&tool_call(
            4,
            "get_wallabag_articles",
            json!({"count": 2, "sort_order": "asc"}),
        ))
        .unwrap();

    assert_eq!(response["id"], 4);
    let payload = envelope(&response);
    assert_eq!(payload["success"], true);
    assert_eq!(payload["count"], 2);
    assert_eq!(payload["saved_wallabag_articles"][0]["title"], "Saved 1");
    assert_eq!(payload["saved_wallabag_articles"][1]["is_starred"], true);
}

#[test]
fn test_client_is_authenticated_once() {
    let harness = Harness::start();
    harness.mount_token();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("term", "rust"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_embedded": {"items": [article(5)]}
            })))
            .expect(2),
    );
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/api/entries/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(article(5)))
            .expect(1),
    );

    let input = [
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#.to_string(),
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#.to_string(),
        tool_call(2, "search_articles", json!({"search_term": "rust"})),
        String::new(),
        tool_call(3, "search_articles", json!({"search_term": "rust", "count": 10})),
        tool_call(4, "get_single_wallabag_article", json!({"id": 5})),
    ]
    .join("\n");

    let server = harness.server();
    let mut output = Vec::new();
    server.serve(Cursor::new(input), &mut output).unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    // initialize + three tool calls; the notification and blank line are silent
    assert_eq!(responses.len(), 4);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "wallabag-mcp");

    let search = envelope(&responses[1]);
    assert_eq!(search["success"], true);
    assert_eq!(search["count"], 1);
    assert_eq!(search["articles"][0]["id"], 5);

    let single = envelope(&responses[3]);
    assert_eq!(single["success"], true);
    assert_eq!(single["wallabag_article"]["url"], "http://example.com/5");

    // Token endpoint expectation (exactly once) is verified when the mock drops.
    harness.runtime.block_on(harness.wallabag.verify());
}

#[test]
fn test_backend_failure_becomes_failure_envelope() {
    let harness = Harness::start();
    harness.mount_token();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/api/entries/9"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Entry not found")),
    );

    let server = harness.server();
    let response = server
        .handle_message(&tool_call(5, "get_single_wallabag_article", json!({"id": 9})))
        .unwrap();

    assert!(response.get("error").is_none());
    let payload = envelope(&response);
    assert_eq!(payload["success"], false);
    assert_eq!(payload["error"], "API request failed: 404 - Entry not found");
}

#[test]
fn test_invalid_arguments_become_failure_envelope() {
    let harness = Harness::start();
    let server = harness.server();

    let response = server
        .handle_message(&tool_call(6, "search_articles", json!({"search_term": "  "})))
        .unwrap();
    let payload = envelope(&response);
    assert_eq!(payload["success"], false);
    assert!(payload["error"]
        .as_str()
        .unwrap()
        .contains("Search term must not be empty"));

    let response = server
        .handle_message(&tool_call(7, "get_single_wallabag_article", json!({"id": "seven"})))
        .unwrap();
    let payload = envelope(&response);
    assert_eq!(payload["success"], false);
    assert!(payload["error"].as_str().unwrap().contains("Invalid arguments"));

    // Nothing reached Wallabag.
    let received = harness
        .runtime
        .block_on(harness.wallabag.received_requests())
        .unwrap();
    assert!(received.is_empty());
}

#[test]
fn test_failed_authentication_is_retried_on_next_call() {
    let harness = Harness::start();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/oauth/v2/token"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid_client"))
            .up_to_n_times(1),
    );
    harness.mount_token();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({}))),
    );

    let server = harness.server();
    let call = tool_call(8, "search_articles", json!({"search_term": "rust"}));

    let first = envelope(&server.handle_message(&call).unwrap());
    assert_eq!(first["success"], false);
    assert!(first["error"].as_str().unwrap().contains("400"));

    let second = envelope(&server.handle_message(&call).unwrap());
    assert_eq!(second["success"], true);
    assert_eq!(second["count"], 0);
}

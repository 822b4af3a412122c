//! Wallabag MCP Server - Main entry point

use tracing_subscriber::EnvFilter;
use wallabag_mcp::McpServer;
use wallabag_sdk::WallabagConfig;

fn main() {
    // Log to stderr; stdout carries the protocol
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server = match McpServer::new(WallabagConfig::from_env()) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to create MCP server: {}", e);
            std::process::exit(1);
        }
    };

    // Run server (blocks until stdin closes)
    if let Err(e) = server.run() {
        eprintln!("MCP server error: {}", e);
        std::process::exit(1);
    }
}

//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. All tool routing is data-driven: the router is built from the
//! endpoint catalog at construction time, so adding an upstream endpoint
//! never requires touching this file.

use std::sync::Arc;

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};

use crate::domains::catalog::build_tool_router;
use crate::domains::gateway::GatewayClient;

#[cfg(feature = "http")]
use crate::domains::catalog::ToolRegistry;

use super::config::Config;

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp; every tool call is
/// validated against its catalog schema and forwarded through the shared
/// gateway client.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared client bound to the upstream base URL.
    client: Arc<GatewayClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new server with the given configuration.
    ///
    /// # Errors
    ///
    /// Fails when the configured upstream base URL is invalid.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let config = Arc::new(config);
        let client = Arc::new(GatewayClient::new(&config.upstream)?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config,
            client,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the configured upstream base URL.
    pub fn upstream_base_url(&self) -> &str {
        &self.config.upstream.base_url
    }

    /// Get the shared gateway client.
    pub fn client(&self) -> &Arc<GatewayClient> {
        &self.client
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let registry = ToolRegistry::new(self.client.clone());
        registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Gateway to the blkmarket.ar marketplace API. Every tool forwards one \
                 REST call; HTTP status codes are returned as metadata, not errors."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_builds_with_defaults() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "blkmarket-mcp-server");
        assert_eq!(server.upstream_base_url(), "https://blkmarket.ar");
    }

    #[test]
    fn test_server_rejects_bad_upstream() {
        let mut config = Config::default();
        config.upstream.base_url = "definitely not a url".to_string();
        assert!(McpServer::new(config).is_err());
    }

    #[test]
    fn test_list_tools_projection() {
        let server = McpServer::new(Config::default()).unwrap();
        let tools = server.list_tools();
        assert_eq!(tools.len(), 20);
        assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));
    }
}

//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all catalog tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::Tool;

use crate::domains::gateway::GatewayClient;

use super::{ToolDef, all_tools};

/// Tool registry - manages all catalog tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    defs: Vec<ToolDef>,
    client: Arc<GatewayClient>,
}

impl ToolRegistry {
    /// Create a new tool registry over the full catalog.
    pub fn new(client: Arc<GatewayClient>) -> Self {
        Self {
            defs: all_tools(),
            client,
        }
    }

    /// Get all tool names, in listing order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.defs.iter().map(|def| def.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools; both
    /// transports derive their listings from the same definitions.
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.defs.iter().map(ToolDef::to_tool).collect()
    }

    /// Look up one definition by tool name.
    pub fn find(&self, name: &str) -> Option<&ToolDef> {
        self.defs.iter().find(|def| def.name == name)
    }

    /// Dispatch an HTTP tool call: validate the arguments against the
    /// tool's schema, forward through the gateway, return the envelope.
    ///
    /// Validation failures are reported before any network activity.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        use tracing::warn;

        let Some(def) = self.find(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(format!("Unknown tool: {}", name));
        };

        let accepted = def.input.validate(&arguments).map_err(|e| e.to_string())?;
        let params = accepted.as_object().cloned().unwrap_or_default();

        let result = self.client.invoke(&def.endpoint, &params).await;
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::UpstreamConfig;
    use std::collections::HashSet;

    fn test_registry() -> ToolRegistry {
        let client = Arc::new(
            GatewayClient::new(&UpstreamConfig::default()).expect("default upstream URL parses"),
        );
        ToolRegistry::new(client)
    }

    /// Names of `{placeholder}` segments in a path template.
    fn placeholders(template: &str) -> Vec<&str> {
        template
            .split('{')
            .skip(1)
            .filter_map(|rest| rest.split('}').next())
            .collect()
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = test_registry();
        let names = registry.tool_names();
        assert_eq!(names.len(), 20);
        assert!(names.contains(&"create_account"));
        assert!(names.contains(&"login"));
        assert!(names.contains(&"list_listings"));
        assert!(names.contains(&"search_listings"));
        assert!(names.contains(&"create_order"));
        assert!(names.contains(&"update_order_status"));
        assert!(names.contains(&"create_payment"));
        assert!(names.contains(&"refund_payment"));
    }

    #[test]
    fn test_tool_names_are_unique() {
        let registry = test_registry();
        let names = registry.tool_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_every_placeholder_has_a_path_descriptor() {
        let registry = test_registry();
        for name in registry.tool_names() {
            let def = registry.find(name).unwrap();
            for placeholder in placeholders(&def.endpoint.path_template) {
                assert!(
                    def.endpoint.path_param(placeholder).is_some(),
                    "tool `{}` has no path descriptor for `{{{}}}`",
                    name,
                    placeholder
                );
            }
        }
    }

    #[test]
    fn test_every_declared_param_appears_in_input_schema() {
        let registry = test_registry();
        for name in registry.tool_names() {
            let def = registry.find(name).unwrap();
            for descriptor in &def.endpoint.params {
                assert!(
                    def.input.property(&descriptor.name).is_some(),
                    "tool `{}` declares `{}` but its input schema does not",
                    name,
                    descriptor.name
                );
            }
            for field in &def.endpoint.body_fields {
                assert!(
                    def.input.property(field).is_some(),
                    "tool `{}` stages `{}` into the body but its input schema does not declare it",
                    name,
                    field
                );
            }
        }
    }

    #[test]
    fn test_tool_metadata_has_object_input_schema() {
        let registry = test_registry();
        for tool in registry.get_all_tools() {
            assert_eq!(
                tool.input_schema.get("type"),
                Some(&serde_json::json!("object")),
                "tool `{}` must advertise an object input schema",
                tool.name
            );
        }
    }

    #[test]
    fn test_find_unknown_tool() {
        let registry = test_registry();
        assert!(registry.find("unknown").is_none());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_call_tool_validates_before_any_network_activity() {
        // Missing required field: the error surfaces without the gateway
        // ever dialing the (unreachable) default upstream.
        let registry = test_registry();
        let err = tokio_test::block_on(registry.call_tool("get_order", serde_json::json!({})))
            .unwrap_err();
        assert!(err.contains("orderId"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_call_tool_unknown_name() {
        let registry = test_registry();
        let err = tokio_test::block_on(registry.call_tool("unknown", serde_json::json!({})))
            .unwrap_err();
        assert!(err.contains("Unknown tool"));
    }
}

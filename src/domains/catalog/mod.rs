//! Catalog domain module.
//!
//! The catalog is the configuration surface of the gateway: one [`ToolDef`]
//! per upstream endpoint, carrying the tool name, the human description, the
//! flat input schema, and the endpoint declaration the gateway routes by.
//! Definitions are plain data built once at startup; adding an endpoint
//! means adding an entry to one of the `definitions/` lists.
//!
//! ## Architecture
//!
//! - `definitions/` - static tool definitions, one file per API area
//! - `registry.rs` - central registry and HTTP dispatch
//! - `router.rs` - dynamic rmcp ToolRouter built from the definitions

pub mod definitions;
mod registry;
pub mod router;

use std::sync::Arc;

use rmcp::model::Tool;

use crate::domains::gateway::EndpointSpec;
use crate::domains::schema::SchemaNode;

pub use registry::ToolRegistry;
pub use router::build_tool_router;

/// One endpoint of the upstream API, exposed as an MCP tool.
#[derive(Debug, Clone)]
pub struct ToolDef {
    /// Tool name as registered in MCP.
    pub name: &'static str,
    /// Tool description shown to clients.
    pub description: &'static str,
    /// Shape of the flat parameter object callers supply.
    pub input: SchemaNode,
    /// The upstream operation this tool forwards to.
    pub endpoint: EndpointSpec,
}

impl ToolDef {
    /// Render the rmcp Tool model (metadata) for this definition.
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input.input_schema_object()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// All tool definitions, in listing order.
pub fn all_tools() -> Vec<ToolDef> {
    let mut defs = Vec::new();
    defs.extend(definitions::accounts::tools());
    defs.extend(definitions::listings::tools());
    defs.extend(definitions::orders::tools());
    defs.extend(definitions::payments::tools());
    defs
}

//! Tool Router - builds the rmcp ToolRouter from the catalog.
//!
//! One dynamic route per [`ToolDef`]; each route validates the caller's
//! arguments against the tool's schema, forwards through the shared
//! [`GatewayClient`], and converts the envelope into a tool result. Adding
//! an endpoint to the catalog adds its route automatically.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};
use serde_json::Value;

use crate::domains::gateway::GatewayClient;

use super::{ToolDef, all_tools};

/// Build the tool router with every catalog tool registered.
pub fn build_tool_router<S>(client: Arc<GatewayClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let mut router = ToolRouter::new();
    for def in all_tools() {
        router = router.with_route(route_for(def, client.clone()));
    }
    router
}

/// Create the dynamic route for one tool definition.
fn route_for<S>(def: ToolDef, client: Arc<GatewayClient>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let tool = def.to_tool();
    let def = Arc::new(def);

    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let def = def.clone();
        let client = client.clone();
        let args = ctx.arguments.clone().unwrap_or_default();
        async move {
            // Validation failures are reported before any network activity.
            let accepted = def
                .input
                .validate(&Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            let params = accepted.as_object().cloned().unwrap_or_default();

            let result = client.invoke(&def.endpoint, &params).await;
            Ok(result.into_call_result())
        }
        .boxed()
    })
}

//! Order endpoints: placing, tracking, and cancelling orders.

use crate::domains::catalog::ToolDef;
use crate::domains::gateway::{EndpointSpec, HttpMethod, ParameterDescriptor};
use crate::domains::schema::SchemaNode;

use super::accounts::address_schema;

fn status_schema() -> SchemaNode {
    SchemaNode::string().enum_of(["pending", "paid", "shipped", "delivered", "cancelled"])
}

pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "list_orders",
            description: "List orders, optionally filtered by status or buyer.",
            input: SchemaNode::object([
                ("status", status_schema().optional()),
                ("buyerId", SchemaNode::string().optional()),
                ("page", SchemaNode::integer().default_value(1)),
            ]),
            endpoint: EndpointSpec::new(HttpMethod::Get, "/order")
                .param(ParameterDescriptor::query("status", status_schema()))
                .param(ParameterDescriptor::query("buyerId", SchemaNode::string()))
                .param(ParameterDescriptor::query("page", SchemaNode::integer())),
        },
        ToolDef {
            name: "get_order",
            description: "Fetch one order by its identifier.",
            input: SchemaNode::object([("orderId", SchemaNode::string())]),
            endpoint: EndpointSpec::new(HttpMethod::Get, "/order/{orderId}")
                .param(ParameterDescriptor::path("orderId", SchemaNode::string())),
        },
        ToolDef {
            name: "create_order",
            description: "Place an order for a listing.",
            input: SchemaNode::object([
                ("listingId", SchemaNode::string()),
                ("quantity", SchemaNode::integer().default_value(1)),
                ("shippingAddress", address_schema()),
                (
                    "note",
                    SchemaNode::string()
                        .nullable()
                        .optional()
                        .describe("Optional note to the seller"),
                ),
            ]),
            endpoint: EndpointSpec::new(HttpMethod::Post, "/order").body_fields([
                "listingId",
                "quantity",
                "shippingAddress",
                "note",
            ]),
        },
        ToolDef {
            name: "update_order_status",
            description: "Move an order to a new fulfilment status.",
            input: SchemaNode::object([
                ("orderId", SchemaNode::string()),
                ("status", status_schema()),
            ]),
            endpoint: EndpointSpec::new(HttpMethod::Patch, "/order/{orderId}/status")
                .body_fields(["status"])
                .param(ParameterDescriptor::path("orderId", SchemaNode::string())),
        },
        ToolDef {
            name: "cancel_order",
            description: "Cancel an order that has not shipped yet.",
            input: SchemaNode::object([
                ("orderId", SchemaNode::string()),
                ("reason", SchemaNode::string().optional()),
            ]),
            endpoint: EndpointSpec::new(HttpMethod::Post, "/order/{orderId}/cancel")
                .body_fields(["reason"])
                .param(ParameterDescriptor::path("orderId", SchemaNode::string())),
        },
    ]
}

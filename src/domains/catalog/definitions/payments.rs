//! Payment endpoints: charging orders and issuing refunds.

use crate::domains::catalog::ToolDef;
use crate::domains::gateway::{EndpointSpec, HttpMethod, ParameterDescriptor};
use crate::domains::schema::SchemaNode;

/// Payment method: either a saved-method token or inline card details.
fn method_schema() -> SchemaNode {
    SchemaNode::one_of([
        SchemaNode::string().describe("Saved payment method token"),
        SchemaNode::object([
            ("type", SchemaNode::string().enum_of(["card", "transfer", "wallet"])),
            ("number", SchemaNode::string().optional()),
            ("holder", SchemaNode::string().optional()),
        ]),
    ])
}

pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "create_payment",
            description: "Charge an order with a saved method token or inline details.",
            input: SchemaNode::object([
                ("orderId", SchemaNode::string()),
                ("amount", SchemaNode::number()),
                ("method", method_schema()),
            ]),
            endpoint: EndpointSpec::new(HttpMethod::Post, "/payment").body_fields([
                "orderId",
                "amount",
                "method",
            ]),
        },
        ToolDef {
            name: "get_payment",
            description: "Fetch one payment by its identifier.",
            input: SchemaNode::object([("paymentId", SchemaNode::string())]),
            endpoint: EndpointSpec::new(HttpMethod::Get, "/payment/{paymentId}")
                .param(ParameterDescriptor::path("paymentId", SchemaNode::string())),
        },
        ToolDef {
            name: "list_payments",
            description: "List payments, optionally scoped to one order.",
            input: SchemaNode::object([("orderId", SchemaNode::string().optional())]),
            endpoint: EndpointSpec::new(HttpMethod::Get, "/payment")
                .param(ParameterDescriptor::query("orderId", SchemaNode::string())),
        },
        ToolDef {
            name: "refund_payment",
            description: "Refund a payment, fully or for a partial amount.",
            input: SchemaNode::object([
                ("paymentId", SchemaNode::string()),
                (
                    "amount",
                    SchemaNode::number()
                        .nullable()
                        .optional()
                        .describe("Partial refund amount; omit or null for a full refund"),
                ),
                ("reason", SchemaNode::string().optional()),
            ]),
            endpoint: EndpointSpec::new(HttpMethod::Post, "/payment/{paymentId}/refund")
                .body_fields(["amount", "reason"])
                .param(ParameterDescriptor::path("paymentId", SchemaNode::string())),
        },
    ]
}

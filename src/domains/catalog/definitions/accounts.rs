//! Account endpoints: registration, login, profile management.

use crate::domains::catalog::ToolDef;
use crate::domains::gateway::{EndpointSpec, HttpMethod, ParameterDescriptor};
use crate::domains::schema::SchemaNode;

/// Shipping/billing address shape, shared by account and order endpoints.
pub(crate) fn address_schema() -> SchemaNode {
    SchemaNode::object([
        ("street", SchemaNode::string()),
        ("city", SchemaNode::string()),
        ("province", SchemaNode::string().optional()),
        ("zip", SchemaNode::string()),
    ])
}

pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "create_account",
            description: "Register a new marketplace account.",
            input: SchemaNode::object([
                ("email", SchemaNode::string().describe("Account email address")),
                ("password", SchemaNode::string()),
                ("displayName", SchemaNode::string().optional()),
                ("address", address_schema().optional()),
            ]),
            endpoint: EndpointSpec::new(HttpMethod::Post, "/user")
                .body_fields(["email", "password", "displayName", "address"]),
        },
        ToolDef {
            name: "login",
            description: "Authenticate with email and password, returning a session token.",
            input: SchemaNode::object([
                ("email", SchemaNode::string()),
                ("password", SchemaNode::string()),
            ]),
            endpoint: EndpointSpec::new(HttpMethod::Post, "/user/login")
                .body_fields(["email", "password"]),
        },
        ToolDef {
            name: "get_account",
            description: "Fetch one account profile by its identifier.",
            input: SchemaNode::object([(
                "userId",
                SchemaNode::string().describe("Account identifier"),
            )]),
            endpoint: EndpointSpec::new(HttpMethod::Get, "/user/{userId}")
                .param(ParameterDescriptor::path("userId", SchemaNode::string())),
        },
        ToolDef {
            name: "update_account",
            description: "Update profile fields of an existing account.",
            input: SchemaNode::object([
                ("userId", SchemaNode::string()),
                ("displayName", SchemaNode::string().optional()),
                ("address", address_schema().optional()),
            ]),
            endpoint: EndpointSpec::new(HttpMethod::Put, "/user/{userId}")
                .body_fields(["displayName", "address"])
                .param(ParameterDescriptor::path("userId", SchemaNode::string())),
        },
        ToolDef {
            name: "delete_account",
            description: "Permanently delete an account.",
            input: SchemaNode::object([("userId", SchemaNode::string())]),
            endpoint: EndpointSpec::new(HttpMethod::Delete, "/user/{userId}")
                .param(ParameterDescriptor::path("userId", SchemaNode::string())),
        },
    ]
}

//! Listing endpoints: browsing, search, and seller-side CRUD.

use crate::domains::catalog::ToolDef;
use crate::domains::gateway::{EndpointSpec, HttpMethod, ParameterDescriptor};
use crate::domains::schema::SchemaNode;

fn category_schema() -> SchemaNode {
    SchemaNode::string().enum_of(["apparel", "footwear", "accessories", "collectibles"])
}

fn page_schema() -> SchemaNode {
    SchemaNode::integer().default_value(1).describe("1-based page number")
}

fn limit_schema() -> SchemaNode {
    SchemaNode::integer().default_value(20).describe("Page size, upstream-capped")
}

pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "list_listings",
            description: "Browse listings, optionally filtered by category and sorted.",
            input: SchemaNode::object([
                ("page", page_schema()),
                ("limit", limit_schema()),
                ("category", category_schema().optional()),
                (
                    "sort",
                    SchemaNode::string()
                        .enum_of(["newest", "price_asc", "price_desc"])
                        .optional(),
                ),
            ]),
            endpoint: EndpointSpec::new(HttpMethod::Get, "/listing")
                .param(ParameterDescriptor::query("page", SchemaNode::integer()))
                .param(ParameterDescriptor::query("limit", SchemaNode::integer()))
                .param(ParameterDescriptor::query("category", category_schema()))
                .param(ParameterDescriptor::query("sort", SchemaNode::string())),
        },
        ToolDef {
            name: "search_listings",
            description: "Full-text search over listing titles and descriptions.",
            input: SchemaNode::object([
                ("q", SchemaNode::string().describe("Search phrase")),
                ("page", page_schema()),
                ("limit", limit_schema()),
            ]),
            endpoint: EndpointSpec::new(HttpMethod::Get, "/listing/search")
                .param(ParameterDescriptor::query("q", SchemaNode::string()).required())
                .param(ParameterDescriptor::query("page", SchemaNode::integer()))
                .param(ParameterDescriptor::query("limit", SchemaNode::integer())),
        },
        ToolDef {
            name: "get_listing",
            description: "Fetch one listing by its identifier.",
            input: SchemaNode::object([("listingId", SchemaNode::string())]),
            endpoint: EndpointSpec::new(HttpMethod::Get, "/listing/{listingId}")
                .param(ParameterDescriptor::path("listingId", SchemaNode::string())),
        },
        ToolDef {
            name: "create_listing",
            description: "Publish a new listing.",
            input: SchemaNode::object([
                ("title", SchemaNode::string()),
                (
                    "description",
                    SchemaNode::string().nullable().describe("Plain-text description, null to omit"),
                ),
                ("price", SchemaNode::number()),
                ("currency", SchemaNode::string().enum_of(["ARS", "USD"]).default_value("ARS")),
                ("tags", SchemaNode::array(SchemaNode::string()).optional()),
                (
                    "attributes",
                    SchemaNode::open_object()
                        .optional()
                        .describe("Free-form key/value attributes, e.g. size or colorway"),
                ),
                (
                    "condition",
                    SchemaNode::string().enum_of(["new", "like_new", "used"]).optional(),
                ),
            ]),
            endpoint: EndpointSpec::new(HttpMethod::Post, "/listing").body_fields([
                "title",
                "description",
                "price",
                "currency",
                "tags",
                "attributes",
                "condition",
            ]),
        },
        ToolDef {
            name: "update_listing",
            description: "Update fields of an existing listing.",
            input: SchemaNode::object([
                ("listingId", SchemaNode::string()),
                ("title", SchemaNode::string().optional()),
                ("description", SchemaNode::string().nullable().optional()),
                ("price", SchemaNode::number().optional()),
                ("tags", SchemaNode::array(SchemaNode::string()).optional()),
            ]),
            endpoint: EndpointSpec::new(HttpMethod::Patch, "/listing/{listingId}")
                .body_fields(["title", "description", "price", "tags"])
                .param(ParameterDescriptor::path("listingId", SchemaNode::string())),
        },
        ToolDef {
            name: "delete_listing",
            description: "Take a listing off the marketplace.",
            input: SchemaNode::object([("listingId", SchemaNode::string())]),
            endpoint: EndpointSpec::new(HttpMethod::Delete, "/listing/{listingId}")
                .param(ParameterDescriptor::path("listingId", SchemaNode::string())),
        },
    ]
}

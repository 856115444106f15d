//! Gateway domain module.
//!
//! This module owns the request path between a validated parameter object
//! and the upstream REST API: classifying each field into a path
//! substitution, a query-string entry, or a JSON body member, executing
//! exactly one HTTP call, and normalizing the response into a uniform
//! envelope.
//!
//! ## Architecture
//!
//! - `endpoint.rs` - static endpoint descriptions (method, template, params)
//! - `request.rs` - the ordered-rule field classifier
//! - `client.rs` - the HTTP executor and response normalizer
//! - `result.rs` - the uniform success/error envelope
//! - `error.rs` - gateway error types

mod client;
mod endpoint;
mod error;
mod request;
mod result;

pub use client::GatewayClient;
pub use endpoint::{EndpointSpec, HttpMethod, ParamLocation, ParameterDescriptor};
pub use error::GatewayError;
pub use request::{RAW_BODY_FIELD, StagedRequest, stage};
pub use result::{InvocationMeta, InvocationResult, TextContent};

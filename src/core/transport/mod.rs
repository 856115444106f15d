//! Transport layer for the gateway server.
//!
//! This module provides the transport implementations:
//! - **STDIO**: Standard input/output (default for MCP) - feature: `stdio`
//! - **HTTP**: HTTP server with JSON-RPC over POST requests - feature: `http`
//!
//! Each transport handles the connection lifecycle and delegates message
//! processing to the MCP server handler.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;

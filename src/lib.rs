//! blkmarket MCP gateway server library.
//!
//! This crate exposes the blkmarket.ar marketplace REST API as MCP tools.
//! Every tool is configuration: a name, a description, a field schema, and
//! an endpoint declaration. Two pieces of machinery do all the work:
//!
//! - **Schema Translator** (`domains::schema`): turns the declarative field
//!   schemas into runtime validators, applied before any network activity.
//! - **Request Router & Executor** (`domains::gateway`): classifies each
//!   validated field into a path substitution, query entry, or JSON body
//!   member, executes exactly one HTTP call, and normalizes the response
//!   into a uniform envelope. Upstream status codes are metadata, never
//!   errors.
//!
//! # Example
//!
//! ```rust,no_run
//! use blkmarket_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};

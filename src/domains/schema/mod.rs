//! Schema domain module.
//!
//! This module translates declarative field-schema descriptors into runtime
//! validators. Every tool in the catalog describes its flat parameter object
//! as a [`SchemaNode`] tree; before any request leaves the process, the
//! caller's arguments are checked (and lightly coerced, e.g. defaults filled
//! in) against that tree.
//!
//! ## Architecture
//!
//! - `node.rs` - the `SchemaNode` descriptor type and its builder API
//! - `validate.rs` - recursive validation over `SchemaNode` trees
//! - `error.rs` - validation error types with field paths

mod error;
mod node;
mod validate;

pub use error::SchemaError;
pub use node::{SchemaKind, SchemaNode};

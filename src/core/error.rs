//! Error types and handling for the gateway server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies, providing consistent error
//! handling across the entire application.

use thiserror::Error;

/// A specialized Result type for gateway server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the gateway server.
#[derive(Debug, Error)]
pub enum Error {
    /// Input failed its schema check.
    #[error("Schema error: {0}")]
    Schema(#[from] crate::domains::schema::SchemaError),

    /// Error originating from the gateway domain.
    #[error("Gateway error: {0}")]
    Gateway(#[from] crate::domains::gateway::GatewayError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

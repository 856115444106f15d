//! Gateway error types.

use thiserror::Error;

/// Errors that can occur while building or executing an upstream request.
///
/// None of these propagate past the invocation boundary: [`GatewayClient`]
/// converts every variant into the uniform error envelope.
///
/// [`GatewayClient`]: super::GatewayClient
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The upstream base URL or the composed request URL failed to parse.
    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),

    /// The HTTP client failed to build or the request failed in transit.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Serializing the request body or response rendering failed.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

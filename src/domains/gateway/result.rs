//! The uniform invocation envelope.
//!
//! Every invocation produces exactly one of two shapes: a response envelope
//! carrying the normalized body text plus HTTP status/headers metadata, or a
//! failure envelope carrying an error message. A non-2xx upstream status is
//! a *response*, not a failure - interpretation is left to the caller.

use std::collections::BTreeMap;

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};

/// One text content block of an envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    /// Always `"text"`.
    #[serde(rename = "type")]
    pub content_type: String,
    /// The normalized body or the error message.
    pub text: String,
}

impl TextContent {
    /// Create a text content block.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Metadata of an invocation envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvocationMeta {
    /// The upstream answered; status is reported verbatim, whatever it was.
    Response {
        status: u16,
        #[serde(rename = "statusText")]
        status_text: String,
        headers: BTreeMap<String, String>,
    },
    /// The request never completed (construction or transport failure).
    Failure {
        error: bool,
        #[serde(rename = "errorMessage")]
        error_message: String,
    },
}

/// The uniform result returned to callers of the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationResult {
    pub content: Vec<TextContent>,
    pub metadata: InvocationMeta,
}

impl InvocationResult {
    /// Build a response envelope from a normalized body and response line.
    pub fn response(
        text: impl Into<String>,
        status: u16,
        status_text: impl Into<String>,
        headers: BTreeMap<String, String>,
    ) -> Self {
        Self {
            content: vec![TextContent::new(text)],
            metadata: InvocationMeta::Response {
                status,
                status_text: status_text.into(),
                headers,
            },
        }
    }

    /// Build a failure envelope. Empty messages are replaced with a generic
    /// placeholder so callers always see something actionable.
    pub fn failure(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = "Unknown error".to_string();
        }
        Self {
            content: vec![TextContent::new(message.clone())],
            metadata: InvocationMeta::Failure {
                error: true,
                error_message: message,
            },
        }
    }

    /// Whether this is the failure shape.
    pub fn is_error(&self) -> bool {
        matches!(self.metadata, InvocationMeta::Failure { .. })
    }

    /// The HTTP status, when the upstream answered.
    pub fn status(&self) -> Option<u16> {
        match &self.metadata {
            InvocationMeta::Response { status, .. } => Some(*status),
            InvocationMeta::Failure { .. } => None,
        }
    }

    /// The first content block's text.
    pub fn text(&self) -> &str {
        self.content.first().map(|c| c.text.as_str()).unwrap_or("")
    }

    /// Convert into an rmcp tool result: content as text blocks, the
    /// envelope metadata as structured content.
    pub fn into_call_result(self) -> CallToolResult {
        let is_error = self.is_error();
        let metadata = serde_json::to_value(&self.metadata).ok();
        CallToolResult {
            content: self
                .content
                .into_iter()
                .map(|block| Content::text(block.text))
                .collect(),
            structured_content: metadata,
            is_error: Some(is_error),
            meta: None,
        }
    }
}

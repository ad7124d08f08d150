//! Chat endpoint transport.
//!
//! The widget talks to its backend only through [`ChatTransport`]. The
//! shipped implementation is [`HttpTransport`], which posts
//! `{"message": ...}` to the chat endpoint and reads `{"reply": ...}` back.

mod http;

pub use http::{DEFAULT_CHAT_PATH, HttpTransport, chat_endpoint_url};

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body sent to the chat endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    /// Trimmed user text.
    pub message: &'a str,
}

/// Response body expected from the chat endpoint.
///
/// Fields other than `reply` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Why a reply could not be shown.
///
/// The widget never surfaces the variant to the user; it is kept for logs.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// Connection, timeout or body read failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("Chat endpoint returned status {status}")]
    Status { status: u16 },

    /// Body was not JSON or had no string `reply` field.
    #[error("Malformed reply: {0}")]
    Decode(#[from] serde_json::Error),

    /// Endpoint URL could not be built.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Relays one user message to the chat backend and returns its reply text.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, message: &str) -> Result<String, DeliveryError>;
}

#[async_trait]
impl<T: ChatTransport + ?Sized> ChatTransport for Arc<T> {
    async fn send(&self, message: &str) -> Result<String, DeliveryError> {
        (**self).send(message).await
    }
}

/// Extract the reply text from a response body.
pub fn parse_reply(body: &[u8]) -> Result<String, DeliveryError> {
    let reply: ChatReply = serde_json::from_slice(body)?;
    Ok(reply.reply)
}

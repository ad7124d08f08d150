//! HTTP transport backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::{ChatRequest, ChatTransport, DeliveryError, parse_reply};
use crate::config::EndpointConfig;

/// Default path of the chat endpoint.
pub const DEFAULT_CHAT_PATH: &str = "/chat";

/// Resolve `{base_url}{chat_path}`.
///
/// Any path already on the base is kept, and a leading `/` on `chat_path`
/// does not make it absolute: `http://host/app` + `/chat` is
/// `http://host/app/chat`.
pub fn chat_endpoint_url(base_url: &str, chat_path: &str) -> Result<Url, DeliveryError> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(chat_path.trim_start_matches('/'))?)
}

/// Posts chat messages to `{base_url}{chat_path}` as JSON.
///
/// # Example
///
/// ```rust,no_run
/// use chat_widget::transport::{ChatTransport, HttpTransport};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = HttpTransport::new("http://127.0.0.1:5000")?;
/// let reply = transport.send("hello").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport for the default `/chat` path under `base_url`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, DeliveryError> {
        Self::with_client(base_url, DEFAULT_CHAT_PATH, reqwest::Client::new())
    }

    /// Create a transport with a custom path and reqwest client.
    pub fn with_client(
        base_url: impl AsRef<str>,
        chat_path: &str,
        http: reqwest::Client,
    ) -> Result<Self, DeliveryError> {
        let endpoint = chat_endpoint_url(base_url.as_ref(), chat_path)?;
        Ok(Self { endpoint, http })
    }

    /// Build from configuration, applying the request timeout.
    pub fn from_config(config: &EndpointConfig) -> Result<Self, DeliveryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Self::with_client(&config.base_url, &config.chat_path, http)
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, message: &str) -> Result<String, DeliveryError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&ChatRequest { message })
            .send()
            .await?;

        let status = response.status();
        debug!(
            name: "transport.http.response",
            status = status.as_u16(),
            "Chat endpoint responded"
        );
        if !status.is_success() {
            return Err(DeliveryError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        parse_reply(&body)
    }
}

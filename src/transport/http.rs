use async_trait::async_trait;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use std::time::Duration;

use super::middleware::RequestTracing;
use super::{BaseUrl, ChatError, ChatTransport};
use crate::widget::EndpointConfig;

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub connect_timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            user_agent: Some(format!("chatline/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl HttpConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Chat exchange over HTTP/JSON.
///
/// The chat request carries no overall timeout: a reply may take as long as
/// the backend needs. Only connection establishment is bounded.
#[derive(Clone)]
pub struct HttpTransport {
    client: ClientWithMiddleware,
    base_url: BaseUrl,
    endpoint: EndpointConfig,
}

impl HttpTransport {
    pub fn new(base_url: BaseUrl, endpoint: EndpointConfig) -> Result<Self, ChatError> {
        Self::with_config(base_url, endpoint, &HttpConfig::default())
    }

    pub fn with_config(
        base_url: BaseUrl,
        endpoint: EndpointConfig,
        config: &HttpConfig,
    ) -> Result<Self, ChatError> {
        let mut builder = Client::builder().connect_timeout(config.connect_timeout);

        if let Some(ref ua) = config.user_agent {
            builder = builder.user_agent(ua);
        }

        let client = builder.build().map_err(|e| {
            ChatError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        let client = ClientBuilder::new(client).with(RequestTracing).build();

        Ok(Self {
            client,
            base_url,
            endpoint,
        })
    }

    #[must_use]
    pub fn endpoint_url(&self) -> String {
        self.base_url.join(self.endpoint.path())
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, text: &str) -> Result<String, ChatError> {
        let url = self.endpoint_url();
        let body = serde_json::to_string(&self.endpoint.body(text))
            .map_err(|e| ChatError::Configuration(format!("Unserializable request body: {e}")))?;

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ChatError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ChatError::from_status(status.as_u16(), &error_body, &self.endpoint));
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))?;

        self.endpoint
            .reply(&value)
            .ok_or_else(|| ChatError::Decode("reply field missing or not a string".to_string()))
    }

    async fn probe(&self) -> Result<(), ChatError> {
        let response = self
            .client
            .head(self.base_url.root())
            .send()
            .await
            .map_err(|e| ChatError::transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ChatError::Status {
                status: status.as_u16(),
                message: format!("HTTP error, status={}", status.as_u16()),
            })
        }
    }

    fn target(&self) -> String {
        self.endpoint_url()
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_config_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(
            config
                .user_agent
                .as_deref()
                .is_some_and(|ua| ua.starts_with("chatline/"))
        );
    }

    #[test]
    fn test_http_config_builder() {
        let config = HttpConfig::new()
            .with_connect_timeout(Duration::from_secs(3))
            .with_user_agent("test-agent");

        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_endpoint_url() {
        let base = BaseUrl::parse("http://127.0.0.1:5000/").unwrap();
        let transport = HttpTransport::new(base, EndpointConfig::chat()).unwrap();

        assert_eq!(transport.endpoint_url(), "http://127.0.0.1:5000/chat");
        assert_eq!(transport.target(), "http://127.0.0.1:5000/chat");
    }

    #[test]
    fn test_http_transport_debug() {
        let base = BaseUrl::parse("http://127.0.0.1:5000").unwrap();
        let transport = HttpTransport::new(base, EndpointConfig::default()).unwrap();
        let debug = format!("{transport:?}");
        assert!(debug.contains("HttpTransport"));
        assert!(debug.contains("/api/prompt"));
    }
}

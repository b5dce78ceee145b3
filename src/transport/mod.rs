pub mod base_url;
pub mod error;
pub mod http;
pub mod middleware;
pub mod mock;

pub use base_url::BaseUrl;
pub use error::ChatError;
pub use http::{HttpConfig, HttpTransport};
pub use mock::{MockReply, MockTransport};

use async_trait::async_trait;

/// Outbound side of the chat widget.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Sends one user message and returns the assistant's reply text.
    async fn send(&self, text: &str) -> Result<String, ChatError>;

    /// Lightweight reachability check of the host.
    async fn probe(&self) -> Result<(), ChatError>;

    /// Human-readable destination, shown in headers and logs.
    fn target(&self) -> String;
}

use std::time::Duration;
use thiserror::Error;

use crate::widget::EndpointConfig;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Network error: failed to reach the server")]
    Transport { detail: String },

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode server response: {0}")]
    Decode(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ChatError {
    #[must_use]
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }

    /// Builds the error for a non-2xx reply. The server-supplied error field
    /// wins when the body is JSON and carries one.
    #[must_use]
    pub fn from_status(status: u16, body: &str, endpoint: &EndpointConfig) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| endpoint.error_message(&v))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP error, status={status}"));

        Self::Status { status, message }
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

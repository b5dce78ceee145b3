use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Notify;

use super::{ChatError, ChatTransport};

#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Status { status: u16, message: String },
    Transport,
    Decode,
}

impl MockReply {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    fn into_result(self) -> Result<String, ChatError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Status { status, message } => Err(ChatError::Status { status, message }),
            Self::Transport => Err(ChatError::transport("connection refused")),
            Self::Decode => Err(ChatError::Decode("expected value at line 1 column 1".into())),
        }
    }
}

/// Scripted transport for tests and offline demos.
///
/// Replies and probe results are consumed in order. With [`MockTransport::gated`]
/// every `send` waits for [`MockTransport::release`] before answering.
#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    probes: Arc<Mutex<VecDeque<bool>>>,
    sent: Arc<Mutex<Vec<String>>>,
    probe_count: Arc<Mutex<usize>>,
    gate: Option<Arc<Notify>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_reply(self, reply: MockReply) -> Self {
        self.replies.lock().push_back(reply);
        self
    }

    #[must_use]
    pub fn with_probe(self, online: bool) -> Self {
        self.probes.lock().push_back(online);
        self
    }

    /// Lets one gated `send` complete.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    #[must_use]
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().clone()
    }

    #[must_use]
    pub fn send_count(&self) -> usize {
        self.sent.lock().len()
    }

    #[must_use]
    pub fn probe_count(&self) -> usize {
        *self.probe_count.lock()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn send(&self, text: &str) -> Result<String, ChatError> {
        self.sent.lock().push(text.to_string());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let reply = self.replies.lock().pop_front();
        reply.map_or_else(
            || {
                Err(ChatError::Configuration(
                    "MockTransport: no replies queued".to_string(),
                ))
            },
            MockReply::into_result,
        )
    }

    async fn probe(&self) -> Result<(), ChatError> {
        *self.probe_count.lock() += 1;
        let online = self.probes.lock().pop_front().unwrap_or(true);
        if online {
            Ok(())
        } else {
            Err(ChatError::transport("probe failed"))
        }
    }

    fn target(&self) -> String {
        "mock://chat".to_string()
    }
}

use parking_lot::Mutex;

use super::message::{Message, Sender};

/// Append-only, ordered record of every message shown to the user.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Mutex<Vec<Message>>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message and returns it. Sequence numbers are assigned under
    /// the lock so they always match insertion order.
    pub fn push(&self, sender: Sender, text: impl Into<String>) -> Message {
        let mut messages = self.messages.lock();
        let message = Message::new(sender, text, messages.len() as u64);
        messages.push(message.clone());
        message
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.lock().clone()
    }

}

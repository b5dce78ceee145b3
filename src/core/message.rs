//! Transcript entries.
//!
//! A [`Message`] is immutable once created. Its text may come from a remote
//! server, so every front-end renders it through [`Message::lines`], which
//! strips control characters and splits on newlines. Nothing is ever handed
//! to a terminal or markup layer verbatim.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
    Error,
}

impl Sender {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    sender: Sender,
    text: String,
    seq: u64,
}

impl Message {
    #[must_use]
    pub fn new(sender: Sender, text: impl Into<String>, seq: u64) -> Self {
        Self {
            sender,
            text: text.into(),
            seq,
        }
    }

    #[must_use]
    pub const fn sender(&self) -> Sender {
        self.sender
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Position in the transcript, starting at zero.
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }

    /// Display lines for this message, safe to insert as plain text.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        sanitize(&self.text).split('\n').map(String::from).collect()
    }
}

/// Normalizes line endings and drops control characters other than
/// newline and tab, including the ESC that starts terminal sequences.
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect()
}

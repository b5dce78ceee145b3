use tokio::sync::mpsc::UnboundedSender;

use super::AppEvent;
use crate::core::Message;
use crate::widget::{ChatView, Connectivity};

/// Forwards widget updates to the terminal loop, which owns the screen.
pub struct TuiChatView {
    sender: UnboundedSender<AppEvent>,
}

impl TuiChatView {
    #[must_use]
    pub const fn new(sender: UnboundedSender<AppEvent>) -> Self {
        Self { sender }
    }

    fn emit(&self, event: AppEvent) {
        if self.sender.send(event).is_err() {
            tracing::debug!("Terminal loop is gone, dropping view update");
        }
    }
}

impl ChatView for TuiChatView {
    fn append_message(&self, message: &Message) {
        self.emit(AppEvent::MessageAppended(message.clone()));
    }

    fn clear_input(&self) {
        self.emit(AppEvent::InputCleared);
    }

    fn set_loading(&self, loading: bool) {
        self.emit(AppEvent::Loading(loading));
    }

    fn focus_input(&self) {
        self.emit(AppEvent::InputFocused);
    }

    fn set_connectivity(&self, connectivity: Connectivity) {
        self.emit(AppEvent::Connectivity(connectivity));
    }
}

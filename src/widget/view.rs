use parking_lot::Mutex;
use std::sync::Arc;

use super::Connectivity;
use crate::core::Message;

/// The UI controls a [`ChatWidget`](super::ChatWidget) drives.
///
/// Implementations are handed to the widget at construction, so the widget
/// never reaches for a global screen or document.
pub trait ChatView: Send + Sync {
    /// Append a transcript entry and scroll it into view.
    fn append_message(&self, message: &Message);

    fn clear_input(&self);

    /// Disable input and send while `loading`, and show the loading indicator.
    fn set_loading(&self, loading: bool);

    fn focus_input(&self);

    fn set_connectivity(&self, connectivity: Connectivity);
}

impl<V: ChatView + ?Sized> ChatView for Arc<V> {
    fn append_message(&self, message: &Message) {
        (**self).append_message(message);
    }

    fn clear_input(&self) {
        (**self).clear_input();
    }

    fn set_loading(&self, loading: bool) {
        (**self).set_loading(loading);
    }

    fn focus_input(&self) {
        (**self).focus_input();
    }

    fn set_connectivity(&self, connectivity: Connectivity) {
        (**self).set_connectivity(connectivity);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Appended(Message),
    InputCleared,
    Loading(bool),
    Focused,
    Connectivity(Connectivity),
}

/// View that records every call, for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl RecordingView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().clone()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Appended(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn last_connectivity(&self) -> Option<Connectivity> {
        self.events.lock().iter().rev().find_map(|e| match e {
            ViewEvent::Connectivity(c) => Some(*c),
            _ => None,
        })
    }

    fn record(&self, event: ViewEvent) {
        self.events.lock().push(event);
    }
}

impl ChatView for RecordingView {
    fn append_message(&self, message: &Message) {
        self.record(ViewEvent::Appended(message.clone()));
    }

    fn clear_input(&self) {
        self.record(ViewEvent::InputCleared);
    }

    fn set_loading(&self, loading: bool) {
        self.record(ViewEvent::Loading(loading));
    }

    fn focus_input(&self) {
        self.record(ViewEvent::Focused);
    }

    fn set_connectivity(&self, connectivity: Connectivity) {
        self.record(ViewEvent::Connectivity(connectivity));
    }
}

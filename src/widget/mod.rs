//! The chat widget core.
//!
//! [`ChatWidget`] owns the transcript and the presentation state, and drives
//! two injected seams: a [`ChatView`] (the UI controls) and a
//! [`ChatTransport`] (the network). A widget moves `Idle -> Sending -> Idle`
//! on each [`ChatWidget::submit`]; at most one request is in flight at a
//! time, enforced inside `submit` itself.

pub mod connectivity;
pub mod endpoint;
pub mod view;

pub use connectivity::ConnectivityMonitor;
pub use endpoint::{DEFAULT_SOURCE, EndpointConfig, EndpointVariant};
pub use view::{ChatView, RecordingView, ViewEvent};

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use crate::core::{Message, Sender, Transcript};
use crate::transport::{ChatError, ChatTransport};

pub const ERROR_PREFIX: &str = "Sorry, I encountered an error:";
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);
/// Shortest probe timeout accepted. A zero timeout would fail every probe.
pub const MIN_PROBE_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    Unknown,
    Online,
    Offline,
}

impl Connectivity {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Checking",
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct WidgetState {
    loading: bool,
    connectivity: Connectivity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty or whitespace-only input; nothing happened.
    Ignored,
    /// A request was already in flight; nothing happened.
    Busy,
    Replied,
    Failed,
}

#[derive(Debug, Default)]
struct ProbeState {
    applied: u64,
}

pub struct ChatWidget<V, T> {
    view: V,
    transport: T,
    transcript: Transcript,
    sending: AtomicBool,
    state: Mutex<WidgetState>,
    probe_ticket: AtomicU64,
    probe_state: Mutex<ProbeState>,
    probe_timeout: Duration,
}

impl<V: ChatView, T: ChatTransport> ChatWidget<V, T> {
    #[must_use]
    pub fn new(view: V, transport: T) -> Self {
        Self {
            view,
            transport,
            transcript: Transcript::new(),
            sending: AtomicBool::new(false),
            state: Mutex::new(WidgetState::default()),
            probe_ticket: AtomicU64::new(0),
            probe_state: Mutex::new(ProbeState::default()),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout.max(MIN_PROBE_TIMEOUT);
        self
    }

    /// Sends one user message and renders the exchange.
    ///
    /// Never fails: transport errors become an error entry in the transcript.
    pub async fn submit(&self, raw_text: &str) -> SubmitOutcome {
        let text = raw_text.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }

        let Some(guard) = SendingGuard::acquire(self) else {
            tracing::debug!("Submit rejected, a request is already in flight");
            return SubmitOutcome::Busy;
        };

        self.render(Sender::User, text);
        self.view.clear_input();
        self.set_loading(true);

        tracing::info!(target_url = %self.transport.target(), chars = text.len(), "Sending chat message");

        let outcome = match self.transport.send(text).await {
            Ok(reply) => {
                tracing::debug!(chars = reply.len(), "Received reply");
                self.render(Sender::Assistant, reply);
                SubmitOutcome::Replied
            }
            Err(e) => {
                tracing::warn!(error = %e, status = ?e.status(), "Chat request failed");
                if let ChatError::Transport { detail } = &e {
                    tracing::debug!(%detail, "Transport failure detail");
                }
                self.render(Sender::Error, format!("{ERROR_PREFIX}\n{e}"));
                SubmitOutcome::Failed
            }
        };

        drop(guard);

        if outcome == SubmitOutcome::Failed {
            self.check_connectivity().await;
        }

        outcome
    }

    /// Appends a message to the transcript and shows it.
    pub fn render(&self, sender: Sender, text: impl Into<String>) -> Message {
        let message = self.transcript.push(sender, text);
        self.view.append_message(&message);
        message
    }

    /// Probes the host and updates the connectivity indicator.
    ///
    /// The probe is bounded by the widget's probe timeout. A result is only
    /// applied if no later probe has already reported.
    pub async fn check_connectivity(&self) -> Connectivity {
        let ticket = self.begin_probe();

        let result = tokio::time::timeout(self.probe_timeout, self.transport.probe())
            .await
            .unwrap_or_else(|_| Err(ChatError::Timeout(self.probe_timeout)));

        let connectivity = match result {
            Ok(()) => Connectivity::Online,
            Err(e) => {
                tracing::debug!(error = %e, "Connectivity probe failed");
                Connectivity::Offline
            }
        };

        self.finish_probe(ticket, connectivity);
        connectivity
    }

    fn begin_probe(&self) -> u64 {
        self.probe_ticket.fetch_add(1, Ordering::AcqRel) + 1
    }

    fn finish_probe(&self, ticket: u64, connectivity: Connectivity) -> bool {
        let mut probes = self.probe_state.lock();
        if ticket <= probes.applied {
            tracing::trace!(ticket, applied = probes.applied, "Discarding stale probe result");
            return false;
        }
        probes.applied = ticket;

        let changed = {
            let mut state = self.state.lock();
            let changed = state.connectivity != connectivity;
            state.connectivity = connectivity;
            changed
        };

        if changed {
            tracing::info!(status = connectivity.label(), "Connectivity changed");
        }
        self.view.set_connectivity(connectivity);
        true
    }

    fn set_loading(&self, loading: bool) {
        self.state.lock().loading = loading;
        self.view.set_loading(loading);
        if !loading {
            self.view.focus_input();
        }
    }

    #[must_use]
    pub fn transcript(&self) -> Vec<Message> {
        self.transcript.snapshot()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    #[must_use]
    pub fn connectivity(&self) -> Connectivity {
        self.state.lock().connectivity
    }

    /// URL of the chat endpoint this widget posts to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.transport.target()
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }
}

/// Holds the `Sending` state. Dropping it returns the widget to `Idle`,
/// even if the submit future is dropped mid-request.
struct SendingGuard<'a, V: ChatView, T: ChatTransport> {
    widget: &'a ChatWidget<V, T>,
}

impl<'a, V: ChatView, T: ChatTransport> SendingGuard<'a, V, T> {
    fn acquire(widget: &'a ChatWidget<V, T>) -> Option<Self> {
        widget
            .sending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { widget })
    }
}

impl<V: ChatView, T: ChatTransport> Drop for SendingGuard<'_, V, T> {
    fn drop(&mut self) {
        self.widget.set_loading(false);
        self.widget.sending.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockReply, MockTransport};
    use std::sync::Arc;

    fn widget(transport: MockTransport) -> (ChatWidget<RecordingView, MockTransport>, RecordingView) {
        let view = RecordingView::new();
        (ChatWidget::new(view.clone(), transport), view)
    }

    fn senders(messages: &[Message]) -> Vec<Sender> {
        messages.iter().map(Message::sender).collect()
    }

    #[tokio::test]
    async fn empty_input_is_ignored() {
        let (widget, view) = widget(MockTransport::new());

        assert_eq!(widget.submit("").await, SubmitOutcome::Ignored);
        assert_eq!(widget.submit("  \n\t ").await, SubmitOutcome::Ignored);

        assert!(widget.transcript().is_empty());
        assert!(view.events().is_empty());
        assert_eq!(widget.transport().send_count(), 0);
    }

    #[tokio::test]
    async fn successful_exchange_renders_in_order() {
        let transport = MockTransport::new().with_reply(MockReply::text("Hello"));
        let (widget, view) = widget(transport);

        assert_eq!(widget.submit("  hi there ").await, SubmitOutcome::Replied);

        assert_eq!(widget.transport().sent(), vec!["hi there"]);
        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Appended(widget.transcript()[0].clone()),
                ViewEvent::InputCleared,
                ViewEvent::Loading(true),
                ViewEvent::Appended(widget.transcript()[1].clone()),
                ViewEvent::Loading(false),
                ViewEvent::Focused,
            ]
        );

        let transcript = widget.transcript();
        assert_eq!(senders(&transcript), vec![Sender::User, Sender::Assistant]);
        assert_eq!(transcript[0].text(), "hi there");
        assert_eq!(transcript[1].text(), "Hello");
        assert!(!widget.is_loading());
        assert_eq!(widget.transport().probe_count(), 0);
    }

    #[tokio::test]
    async fn server_error_message_is_rendered() {
        let transport = MockTransport::new().with_reply(MockReply::status(500, "boom"));
        let (widget, _view) = widget(transport);

        assert_eq!(widget.submit("hi").await, SubmitOutcome::Failed);

        let transcript = widget.transcript();
        assert_eq!(senders(&transcript), vec![Sender::User, Sender::Error]);
        assert!(transcript[1].text().contains("boom"));
        assert!(transcript[1].text().starts_with(ERROR_PREFIX));
    }

    #[tokio::test]
    async fn transport_failure_triggers_probe() {
        let transport = MockTransport::new()
            .with_reply(MockReply::Transport)
            .with_probe(false);
        let (widget, view) = widget(transport);

        assert_eq!(widget.submit("hi").await, SubmitOutcome::Failed);

        let transcript = widget.transcript();
        assert_eq!(transcript.len(), 2);
        assert!(transcript[1].text().contains("Network error"));
        assert_eq!(widget.transport().probe_count(), 1);
        assert_eq!(widget.connectivity(), Connectivity::Offline);
        assert_eq!(view.last_connectivity(), Some(Connectivity::Offline));
    }

    #[tokio::test]
    async fn controls_are_restored_after_failure() {
        let transport = MockTransport::new().with_reply(MockReply::Decode);
        let (widget, view) = widget(transport);

        widget.submit("hi").await;

        let events = view.events();
        let loading_off = events
            .iter()
            .position(|e| *e == ViewEvent::Loading(false))
            .unwrap();
        assert_eq!(events[loading_off + 1], ViewEvent::Focused);
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn sequential_submissions_keep_order() {
        let transport = MockTransport::new()
            .with_reply(MockReply::text("reply A"))
            .with_reply(MockReply::status(503, "unavailable"));
        let (widget, view) = widget(transport);

        widget.submit("A").await;
        widget.submit("B").await;

        let transcript = widget.transcript();
        let texts: Vec<_> = transcript.iter().map(Message::text).collect();
        assert_eq!(texts[0], "A");
        assert_eq!(texts[1], "reply A");
        assert_eq!(texts[2], "B");
        assert!(texts[3].contains("unavailable"));
        assert_eq!(
            senders(&transcript),
            vec![Sender::User, Sender::Assistant, Sender::User, Sender::Error]
        );

        let seqs: Vec<_> = view.messages().iter().map(Message::seq).collect();
        assert_eq!(seqs, vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn second_submit_while_sending_is_busy() {
        let transport = MockTransport::gated().with_reply(MockReply::text("done"));
        let view = RecordingView::new();
        let widget = Arc::new(ChatWidget::new(view.clone(), transport));

        let first = {
            let widget = Arc::clone(&widget);
            tokio::spawn(async move { widget.submit("first").await })
        };

        while widget.transport().send_count() == 0 {
            tokio::task::yield_now().await;
        }

        assert!(widget.is_loading());
        assert_eq!(widget.submit("second").await, SubmitOutcome::Busy);
        assert_eq!(widget.transport().send_count(), 1);
        assert_eq!(widget.transcript().len(), 1);

        widget.transport().release();
        assert_eq!(first.await.unwrap(), SubmitOutcome::Replied);
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn dropped_submit_returns_to_idle() {
        let transport = MockTransport::gated().with_reply(MockReply::text("late"));
        let (widget, _view) = widget(transport);

        let mut pending = tokio_test::task::spawn(widget.submit("hello"));
        assert!(pending.poll().is_pending());
        assert!(widget.is_loading());
        drop(pending);

        assert!(!widget.is_loading());
        widget.transport().release();
        assert_eq!(widget.submit("again").await, SubmitOutcome::Replied);
    }

    #[tokio::test]
    async fn stale_probe_result_is_discarded() {
        let (widget, view) = widget(MockTransport::new());

        let older = widget.begin_probe();
        let newer = widget.begin_probe();

        assert!(widget.finish_probe(newer, Connectivity::Online));
        assert!(!widget.finish_probe(older, Connectivity::Offline));

        assert_eq!(widget.connectivity(), Connectivity::Online);
        assert_eq!(view.last_connectivity(), Some(Connectivity::Online));
    }

    #[tokio::test]
    async fn probe_reflects_latest_result() {
        let transport = MockTransport::new()
            .with_probe(true)
            .with_probe(false)
            .with_probe(true);
        let (widget, _view) = widget(transport);

        assert_eq!(widget.check_connectivity().await, Connectivity::Online);
        assert_eq!(widget.check_connectivity().await, Connectivity::Offline);
        assert_eq!(widget.connectivity(), Connectivity::Offline);
        assert_eq!(widget.check_connectivity().await, Connectivity::Online);
        assert_eq!(widget.connectivity(), Connectivity::Online);
        assert!(widget.transcript().is_empty());
    }

    #[test]
    fn connectivity_labels() {
        assert_eq!(Connectivity::default().label(), "Checking");
        assert_eq!(Connectivity::Online.label(), "Online");
        assert_eq!(Connectivity::Offline.label(), "Offline");
    }
}

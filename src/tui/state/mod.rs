mod history;

pub use history::InputHistory;

use std::time::{Duration, Instant};

use crate::core::{Message, Sender};
use crate::tui::widgets::TranscriptScroll;
use crate::widget::Connectivity;

const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Everything the terminal loop draws, mutated only on the loop task.
pub struct AppState {
    pub should_quit: bool,
    pub spinner_frame: usize,
    pub loading: bool,
    pub connectivity: Connectivity,
    pub messages: Vec<Message>,
    pub scroll: TranscriptScroll,
    pub history: InputHistory,
    pub notice: Option<String>,

    spinner_last_update: Option<Instant>,
    request_start: Option<Instant>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_quit: false,
            spinner_frame: 0,
            loading: false,
            connectivity: Connectivity::Unknown,
            messages: Vec::new(),
            scroll: TranscriptScroll::new(),
            history: InputHistory::new(),
            notice: None,
            spinner_last_update: None,
            request_start: None,
        }
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        match self.spinner_last_update {
            Some(last) if now.duration_since(last) >= SPINNER_INTERVAL => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                self.spinner_last_update = Some(now);
            }
            None => self.spinner_last_update = Some(now),
            Some(_) => {}
        }
    }

    pub const fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn append_message(&mut self, message: Message) {
        if message.sender() == Sender::User {
            self.scroll.follow();
        }
        self.messages.push(message);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.request_start = loading.then(Instant::now);
    }

    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.request_start.map(|start| start.elapsed())
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub const fn scroll_up(&mut self, lines: usize) {
        self.scroll.scroll_up(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll.scroll_down(lines);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

mod loops;
mod view;

pub use loops::{terminal_event_loop, tick_loop, translate};
pub use view::TuiChatView;

use crossterm::event::KeyEvent;
use std::time::Duration;

use crate::core::Message;
use crate::widget::Connectivity;

pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);
pub const SCROLL_DELTA: i16 = 3;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Input(KeyEvent),
    Paste(String),
    MouseScroll(i16),
    Resize(u16, u16),
    Tick,
    MessageAppended(Message),
    InputCleared,
    Loading(bool),
    InputFocused,
    Connectivity(Connectivity),
}

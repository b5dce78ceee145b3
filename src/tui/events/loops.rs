use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind, MouseEventKind};
use tokio::sync::mpsc::UnboundedSender;

use super::{AppEvent, POLL_TIMEOUT, SCROLL_DELTA, TICK_INTERVAL};
use crate::core::Result;

/// Maps a raw terminal event onto the app's event set. Key releases and
/// mouse movement are dropped.
#[must_use]
pub fn translate(event: CrosstermEvent) -> Option<AppEvent> {
    match event {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(AppEvent::Input(key)),
        CrosstermEvent::Paste(text) => Some(AppEvent::Paste(text)),
        CrosstermEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(AppEvent::MouseScroll(-SCROLL_DELTA)),
            MouseEventKind::ScrollDown => Some(AppEvent::MouseScroll(SCROLL_DELTA)),
            _ => None,
        },
        _ => None,
    }
}

pub async fn terminal_event_loop(tx: UnboundedSender<AppEvent>) -> Result<()> {
    while !tx.is_closed() {
        let polled = tokio::task::spawn_blocking(|| -> std::io::Result<Option<CrosstermEvent>> {
            if event::poll(POLL_TIMEOUT)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })
        .await
        .map_err(std::io::Error::other)??;

        if let Some(app_event) = polled.and_then(translate)
            && tx.send(app_event).is_err()
        {
            break;
        }
    }
    tracing::debug!("Terminal event loop stopped");
    Ok(())
}

pub async fn tick_loop(tx: UnboundedSender<AppEvent>) {
    let mut interval = tokio::time::interval(TICK_INTERVAL);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    loop {
        interval.tick().await;
        if tx.send(AppEvent::Tick).is_err() {
            break;
        }
    }
}

mod commands;
mod render;
mod terminal;

pub use commands::{HELP_TEXT, SlashCommand};
pub use terminal::{TerminalGuard, stdout_terminal};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::sync::mpsc;

use crate::core::Result;
use crate::tui::events::AppEvent;
use crate::tui::layout::calculate_layout;
use crate::tui::runner::ChatCommand;
use crate::tui::state::AppState;
use crate::tui::widgets::{InputAction, InputWidget, TranscriptWidget};
use render::{render_header, render_status};

const PAGE_SCROLL: usize = 10;

pub struct TuiApp<B: Backend> {
    terminal: Terminal<B>,
    endpoint: String,
    state: AppState,
    input: InputWidget<'static>,
    /// Text handed to the runner whose `InputCleared` has not arrived yet.
    awaiting_clear: Option<String>,
    cmd_tx: mpsc::UnboundedSender<ChatCommand>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl<B: Backend> TuiApp<B> {
    pub fn new(
        terminal: Terminal<B>,
        endpoint: impl Into<String>,
        cmd_tx: mpsc::UnboundedSender<ChatCommand>,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
    ) -> Self {
        Self {
            terminal,
            endpoint: endpoint.into(),
            state: AppState::new(),
            input: InputWidget::new(),
            awaiting_clear: None,
            cmd_tx,
            event_rx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        while !self.state.should_quit {
            self.draw()?;

            let Some(event) = self.event_rx.recv().await else {
                tracing::debug!("Event channel closed");
                break;
            };
            self.handle_event(event);
        }

        let _ = self.cmd_tx.send(ChatCommand::Shutdown);
        Ok(())
    }

    pub fn draw(&mut self) -> Result<()> {
        let Self {
            terminal,
            endpoint,
            state,
            input,
            ..
        } = self;

        terminal.draw(|f| {
            let layout = calculate_layout(f.area());

            render_header(f, layout.header, endpoint);
            TranscriptWidget::new(&state.messages, &mut state.scroll)
                .render(layout.transcript, f.buffer_mut());
            input.render(layout.input, f);
            render_status(f, layout.status, state);
        })?;
        Ok(())
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(key) => self.handle_key(key),
            AppEvent::Paste(text) => {
                let action = self.input.handle_paste(&text);
                self.handle_input_action(action);
            }
            AppEvent::MouseScroll(delta) => {
                let lines = usize::from(delta.unsigned_abs());
                if delta < 0 {
                    self.state.scroll_up(lines);
                } else {
                    self.state.scroll_down(lines);
                }
            }
            // The next draw picks up the new size.
            AppEvent::Resize(..) => {}
            AppEvent::Tick => self.state.tick(),
            AppEvent::MessageAppended(message) => self.state.append_message(message),
            AppEvent::InputCleared => self.clear_submitted(),
            AppEvent::Loading(loading) => {
                self.state.set_loading(loading);
                self.input.set_enabled(!loading);
            }
            AppEvent::InputFocused => self.input.focus(),
            AppEvent::Connectivity(connectivity) => self.state.connectivity = connectivity,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.state.clear_notice();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                if self.input.is_enabled() && !self.input.is_empty() {
                    self.input.clear();
                } else {
                    self.state.quit();
                }
            }
            KeyCode::Char('d') if ctrl => {
                if self.input.is_empty() {
                    self.state.quit();
                }
            }
            KeyCode::PageUp => self.state.scroll_up(PAGE_SCROLL),
            KeyCode::PageDown => self.state.scroll_down(PAGE_SCROLL),
            KeyCode::Home if ctrl => self.state.scroll.jump_to_oldest(),
            KeyCode::End if ctrl => self.state.scroll.follow(),
            _ => {
                let action = self.input.handle_key(key);
                self.handle_input_action(action);
            }
        }
    }

    fn handle_input_action(&mut self, action: InputAction) {
        match action {
            InputAction::Continue | InputAction::Clear => {}
            InputAction::Rejected => {
                tracing::trace!("Input ignored while a request is in flight");
            }
            InputAction::Submit(text) => self.submit(text),
            InputAction::HistoryPrev => {
                let current = self.input.text();
                if let Some(entry) = self.state.history.prev(&current).map(String::from) {
                    self.input.set_text(&entry);
                }
            }
            InputAction::HistoryNext => {
                if let Some(entry) = self.state.history.next() {
                    self.input.set_text(&entry);
                }
            }
        }
    }

    fn submit(&mut self, text: String) {
        if let Some(command) = SlashCommand::parse(&text) {
            self.input.clear();
            match command {
                SlashCommand::Help => self.state.set_notice(HELP_TEXT),
                SlashCommand::Exit => self.state.quit(),
            }
            return;
        }

        self.state.history.push(&text);
        self.awaiting_clear = Some(text.clone());
        if self.cmd_tx.send(ChatCommand::Submit { text }).is_err() {
            tracing::error!("Chat runner is gone, submission dropped");
            self.awaiting_clear = None;
            self.state.set_notice("Sending is unavailable, restart chatline");
        }
    }

    /// Removes the submitted text from the box. Anything typed after Enter
    /// stays; a box edited away from the submitted text is left alone.
    fn clear_submitted(&mut self) {
        let Some(sent) = self.awaiting_clear.take() else {
            self.input.clear();
            return;
        };

        let current = self.input.text();
        match current.strip_prefix(sent.as_str()) {
            Some("") => self.input.clear(),
            Some(rest) => self.input.set_text(rest),
            None => tracing::debug!("Input changed since submit, keeping it"),
        }
    }
}

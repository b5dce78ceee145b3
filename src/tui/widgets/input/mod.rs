mod action;
mod key_handler;
mod render;

pub use action::InputAction;

use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

use crate::ui::theme::Theme;

const PLACEHOLDER: &str = "Type a message...";

/// Multi-line message box.
///
/// While disabled it ignores keys and pastes and is drawn dimmed. Focus is
/// dropped on disable and only comes back through [`InputWidget::focus`].
pub struct InputWidget<'a> {
    textarea: TextArea<'a>,
    enabled: bool,
    focused: bool,
}

impl InputWidget<'_> {
    #[must_use]
    pub fn new() -> Self {
        let mut widget = Self {
            textarea: TextArea::default(),
            enabled: true,
            focused: true,
        };
        widget.apply_style();
        widget
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn set_text(&mut self, text: &str) {
        let lines: Vec<String> = text.split('\n').map(ToString::to_string).collect();
        self.textarea = TextArea::new(lines);
        self.apply_style();
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn clear(&mut self) {
        self.textarea = TextArea::default();
        self.apply_style();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(String::is_empty)
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.focused = false;
        }
        self.apply_style();
    }

    pub fn focus(&mut self) {
        if self.enabled {
            self.focused = true;
            self.apply_style();
        }
    }

    fn apply_style(&mut self) {
        self.textarea.set_placeholder_text(PLACEHOLDER);
        self.textarea.set_placeholder_style(Theme::muted());
        self.textarea.set_cursor_line_style(Style::default());

        if self.enabled {
            self.textarea.set_style(Theme::white());
        } else {
            self.textarea.set_style(Theme::muted());
        }

        if self.enabled && self.focused {
            self.textarea.set_cursor_style(Theme::white().add_modifier(Modifier::REVERSED));
        } else {
            self.textarea.set_cursor_style(Style::default());
        }
    }
}

impl Default for InputWidget<'_> {
    fn default() -> Self {
        Self::new()
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{InputAction, InputWidget};

impl InputWidget<'_> {
    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        if !self.enabled {
            return InputAction::Rejected;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Enter, KeyModifiers::SHIFT) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
                self.textarea.insert_newline();
                InputAction::Continue
            }
            (KeyCode::Enter, KeyModifiers::NONE) => self.handle_enter(),

            (KeyCode::Up, KeyModifiers::NONE) if self.on_first_line() => InputAction::HistoryPrev,
            (KeyCode::Down, KeyModifiers::NONE) if self.on_last_line() => InputAction::HistoryNext,

            (KeyCode::Char('k' | 'u'), KeyModifiers::CONTROL) => {
                self.clear();
                InputAction::Clear
            }

            _ => {
                self.textarea.input(key);
                InputAction::Continue
            }
        }
    }

    pub fn handle_paste(&mut self, text: &str) -> InputAction {
        if !self.enabled {
            return InputAction::Rejected;
        }

        let text = text.replace("\r\n", "\n");
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.textarea.insert_newline();
            }
            self.textarea.insert_str(line);
        }
        InputAction::Continue
    }

    fn on_first_line(&self) -> bool {
        self.textarea.cursor().0 == 0
    }

    fn on_last_line(&self) -> bool {
        self.textarea.cursor().0 + 1 >= self.textarea.lines().len()
    }

    fn handle_enter(&self) -> InputAction {
        if self.is_empty() {
            InputAction::Continue
        } else {
            InputAction::Submit(self.text())
        }
    }
}

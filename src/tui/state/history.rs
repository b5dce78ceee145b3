use std::collections::VecDeque;

const MAX_HISTORY_SIZE: usize = 100;

/// Previously submitted inputs, oldest first.
///
/// Browsing starts from the newest entry. Whatever was in the input box when
/// browsing began is kept as a draft and handed back when the user walks
/// past the newest entry.
#[derive(Debug, Clone, Default)]
pub struct InputHistory {
    entries: VecDeque<String>,
    cursor: Option<usize>,
    draft: Option<String>,
}

impl InputHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            draft: None,
        }
    }

    pub fn push(&mut self, input: &str) {
        self.reset();
        if input.trim().is_empty() || self.entries.back().is_some_and(|last| last == input) {
            return;
        }

        self.entries.push_back(input.to_string());
        if self.entries.len() > MAX_HISTORY_SIZE {
            self.entries.pop_front();
        }
    }

    /// Steps to an older entry. `current` is remembered as the draft when
    /// browsing starts.
    pub fn prev(&mut self, current: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        let index = match self.cursor {
            None => {
                self.draft = Some(current.to_string());
                self.entries.len() - 1
            }
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Steps to a newer entry, or back to the draft past the newest one.
    pub fn next(&mut self) -> Option<String> {
        let i = self.cursor?;
        if i + 1 >= self.entries.len() {
            self.cursor = None;
            return Some(self.draft.take().unwrap_or_default());
        }

        self.cursor = Some(i + 1);
        self.entries.get(i + 1).cloned()
    }

    pub fn reset(&mut self) {
        self.cursor = None;
        self.draft = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

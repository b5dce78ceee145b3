/// Viewport over the rendered transcript lines.
///
/// While following, every sync pins the view to the newest line. Scrolling
/// up detaches it until the user scrolls back to the bottom or sends a
/// message.
#[derive(Debug, Clone, Default)]
pub struct TranscriptScroll {
    offset: usize,
    total_lines: usize,
    viewport_height: usize,
    detached: bool,
}

impl TranscriptScroll {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: 0,
            total_lines: 0,
            viewport_height: 0,
            detached: false,
        }
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn is_following(&self) -> bool {
        !self.detached
    }

    /// Lines below the bottom edge of the viewport.
    #[must_use]
    pub const fn hidden_below(&self) -> usize {
        self.total_lines
            .saturating_sub(self.offset + self.viewport_height)
    }

    pub fn sync(&mut self, total_lines: usize, viewport_height: usize) {
        self.total_lines = total_lines;
        self.viewport_height = viewport_height;

        if self.detached {
            self.offset = self.offset.min(self.bottom());
            if self.offset == self.bottom() {
                self.detached = false;
            }
        } else {
            self.offset = self.bottom();
        }
    }

    pub const fn follow(&mut self) {
        self.detached = false;
        self.offset = self.bottom();
    }

    pub const fn jump_to_oldest(&mut self) {
        self.offset = 0;
        self.detached = self.bottom() > 0;
    }

    pub const fn scroll_up(&mut self, lines: usize) {
        if self.bottom() == 0 {
            return;
        }
        self.offset = self.offset.saturating_sub(lines);
        self.detached = true;
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = (self.offset + lines).min(self.bottom());
        if self.offset == self.bottom() {
            self.detached = false;
        }
    }

    const fn bottom(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport_height)
    }
}

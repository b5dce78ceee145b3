#![allow(clippy::cast_possible_truncation)]

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use super::InputWidget;
use crate::ui::theme::{BoxChars, Theme};

const SEND_HINT: &str = "↵ send";
const HINT_WIDTH: u16 = 8;

impl InputWidget<'_> {
    pub fn render(&mut self, area: Rect, frame: &mut Frame) {
        if area.height == 0 {
            return;
        }
        Self::render_separator(area, frame.buffer_mut());

        let input_area = Self::input_area(area);
        self.render_prefix(input_area, frame.buffer_mut());
        self.render_hint(input_area, frame.buffer_mut());

        let textarea_area = Self::textarea_area(input_area);
        self.textarea
            .set_block(Block::default().borders(Borders::NONE));
        frame.render_widget(&self.textarea, textarea_area);

        if self.enabled && self.focused && textarea_area.height > 0 {
            let (row, col) = self.textarea.cursor();
            let row = (row as u16).min(textarea_area.height - 1);
            frame.set_cursor_position(Position::new(
                textarea_area.x + col as u16,
                textarea_area.y + row,
            ));
        }
    }

    fn render_separator(area: Rect, buf: &mut Buffer) {
        let line = Line::from(Span::styled(
            BoxChars::HORIZONTAL.repeat(area.width as usize),
            Theme::border(),
        ));
        buf.set_line(area.x, area.y, &line, area.width);
    }

    fn render_prefix(&self, input_area: Rect, buf: &mut Buffer) {
        if input_area.height == 0 {
            return;
        }
        let style = if self.enabled {
            Theme::white()
        } else {
            Theme::muted()
        };
        Paragraph::new(Line::from(Span::styled("> ", style))).render(
            Rect {
                height: 1,
                width: 2.min(input_area.width),
                ..input_area
            },
            buf,
        );
    }

    fn render_hint(&self, input_area: Rect, buf: &mut Buffer) {
        if !self.enabled || self.is_empty() || input_area.height == 0 {
            return;
        }
        let width = SEND_HINT.chars().count() as u16;
        if input_area.width <= width + 1 {
            return;
        }
        let hint = Line::from(Span::styled(SEND_HINT, Theme::muted()));
        buf.set_line(
            input_area.x + input_area.width - width - 1,
            input_area.y,
            &hint,
            width,
        );
    }

    const fn input_area(area: Rect) -> Rect {
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height.saturating_sub(1),
        }
    }

    const fn textarea_area(input_area: Rect) -> Rect {
        Rect {
            x: input_area.x + 2,
            y: input_area.y,
            width: input_area.width.saturating_sub(2 + HINT_WIDTH),
            height: input_area.height,
        }
    }
}

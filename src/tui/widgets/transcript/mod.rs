#![allow(clippy::cast_possible_truncation)]

mod render;
mod scroll;

pub use render::message_lines;
pub use scroll::TranscriptScroll;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::core::Message;
use crate::ui::theme::Theme;

pub struct TranscriptWidget<'a> {
    messages: &'a [Message],
    scroll: &'a mut TranscriptScroll,
}

impl<'a> TranscriptWidget<'a> {
    #[must_use]
    pub const fn new(messages: &'a [Message], scroll: &'a mut TranscriptScroll) -> Self {
        Self { messages, scroll }
    }

    pub fn render(self, area: Rect, buf: &mut Buffer) {
        if self.messages.is_empty() {
            Self::render_empty_state(area, buf);
            return;
        }

        let content_width = area.width.saturating_sub(4);
        let lines = self.collect_lines(content_width);
        let viewport = area.height as usize;
        self.scroll.sync(lines.len(), viewport);

        let offset = self.scroll.offset();
        for (row, line) in lines.iter().skip(offset).take(viewport).enumerate() {
            buf.set_line(area.x + 2, area.y + row as u16, line, content_width);
        }

        if self.scroll.hidden_below() > 0 {
            Self::render_more_indicator(area, buf);
        }
    }

    fn collect_lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (idx, message) in self.messages.iter().enumerate() {
            if idx > 0 {
                lines.push(Line::default());
            }
            lines.extend(message_lines(message, width));
        }
        lines
    }

    fn render_empty_state(area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled("chatline", Theme::primary_bold()))
                .alignment(Alignment::Center),
            Line::default(),
            Line::from(Span::styled(
                "Type a message below and press Enter to send it.",
                Theme::muted(),
            ))
            .alignment(Alignment::Center),
        ];
        Paragraph::new(lines).render(area, buf);
    }

    fn render_more_indicator(area: Rect, buf: &mut Buffer) {
        const INDICATOR: &str = "↓ More";

        let width = (INDICATOR.chars().count() as u16 + 2).min(area.width);
        let indicator_area = Rect {
            x: area.x + area.width.saturating_sub(width),
            y: area.y + area.height.saturating_sub(1),
            width,
            height: 1.min(area.height),
        };
        Paragraph::new(Line::from(Span::styled(INDICATOR, Theme::warning())))
            .render(indicator_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Sender;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
    }

    fn conversation(count: u64) -> Vec<Message> {
        (0..count)
            .map(|i| Message::new(Sender::User, format!("message {i}"), i))
            .collect()
    }

    #[test]
    fn empty_transcript_shows_welcome() {
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        let mut scroll = TranscriptScroll::new();

        TranscriptWidget::new(&[], &mut scroll).render(area, &mut buf);

        assert!(row(&buf, 1).contains("chatline"));
    }

    #[test]
    fn newest_message_is_visible() {
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        let mut scroll = TranscriptScroll::new();
        let messages = conversation(10);

        TranscriptWidget::new(&messages, &mut scroll).render(area, &mut buf);

        assert!(row(&buf, 4).contains("message 9"));
        assert!(scroll.is_following());
    }

    #[test]
    fn scrolled_up_shows_more_indicator() {
        let area = Rect::new(0, 0, 40, 5);
        let messages = conversation(10);
        let mut scroll = TranscriptScroll::new();

        let mut buf = Buffer::empty(area);
        TranscriptWidget::new(&messages, &mut scroll).render(area, &mut buf);
        scroll.scroll_up(6);

        let mut buf = Buffer::empty(area);
        TranscriptWidget::new(&messages, &mut scroll).render(area, &mut buf);

        assert!(row(&buf, 4).contains("↓ More"));
        assert!(!(0..5).any(|y| row(&buf, y).contains("message 9")));
    }
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{BoxChars, Theme};

pub fn render_header(frame: &mut Frame, area: Rect, endpoint: &str) {
    let title = format!("chatline v{}", env!("CARGO_PKG_VERSION"));
    let subtitle = format!("Endpoint: {endpoint}");

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border())
        .border_set(border::Set {
            bottom_left: BoxChars::ROUND_BOTTOM_LEFT,
            bottom_right: BoxChars::ROUND_BOTTOM_RIGHT,
            ..border::ROUNDED
        });

    let lines = vec![
        Line::from(vec![Span::raw("  "), Span::styled(title, Theme::primary_bold())]),
        Line::from(vec![Span::raw("  "), Span::styled(subtitle, Theme::muted())]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

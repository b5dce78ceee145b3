use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::core::{Message, Sender};
use crate::ui::theme::Theme;

const fn prefix(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "> ",
        Sender::Assistant => "● ",
        Sender::Error => "[x] ",
    }
}

/// Wraps a message to `width` columns. The first line carries the sender
/// prefix and the rest are indented under it.
pub fn message_lines(message: &Message, width: u16) -> Vec<Line<'static>> {
    let prefix = prefix(message.sender());
    let prefix_width = prefix.chars().count();
    let style = Theme::sender(message.sender());
    let available = (width as usize).saturating_sub(prefix_width + 1).max(1);

    let mut lines = Vec::new();
    for text_line in message.lines() {
        for wrapped in textwrap::wrap(&text_line, available) {
            let lead = if lines.is_empty() {
                Span::styled(prefix, prefix_style(message.sender(), style))
            } else {
                Span::raw(" ".repeat(prefix_width))
            };
            lines.push(Line::from(vec![
                lead,
                Span::styled(wrapped.into_owned(), style),
            ]));
        }
    }
    lines
}

fn prefix_style(sender: Sender, body: Style) -> Style {
    match sender {
        Sender::Assistant => Theme::primary(),
        Sender::User | Sender::Error => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn prefixes_follow_sender() {
        let user = message_lines(&Message::new(Sender::User, "hi", 0), 40);
        let reply = message_lines(&Message::new(Sender::Assistant, "hello", 1), 40);
        let error = message_lines(&Message::new(Sender::Error, "oops", 2), 40);

        assert_eq!(plain(&user), vec!["> hi"]);
        assert_eq!(plain(&reply), vec!["● hello"]);
        assert_eq!(plain(&error), vec!["[x] oops"]);
    }

    #[test]
    fn newlines_become_separate_lines() {
        let message = Message::new(Sender::Error, "Sorry, I encountered an error:\nboom", 0);
        let lines = plain(&message_lines(&message, 80));

        assert_eq!(
            lines,
            vec!["[x] Sorry, I encountered an error:", "    boom"]
        );
    }

    #[test]
    fn blank_lines_are_kept() {
        let message = Message::new(Sender::Assistant, "one\n\ntwo", 0);
        assert_eq!(message_lines(&message, 80).len(), 3);
    }

    #[test]
    fn long_text_wraps_under_prefix() {
        let message = Message::new(Sender::User, "alpha beta gamma delta", 0);
        let lines = plain(&message_lines(&message, 14));

        assert!(lines.len() > 1);
        assert!(lines[0].starts_with("> "));
        assert!(lines[1].starts_with("  "));
    }

    #[test]
    fn errors_are_styled_as_errors() {
        let message = Message::new(Sender::Error, "bad", 0);
        let lines = message_lines(&message, 40);

        assert_eq!(lines[0].spans[1].style, Theme::error());
    }
}

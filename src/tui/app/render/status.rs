#![allow(clippy::cast_possible_truncation)]

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use std::time::Duration;

use crate::tui::state::AppState;
use crate::ui::theme::{BoxChars, Spinners, Theme};

const HINTS: &str = "/help | PgUp/PgDn scroll | Ctrl+C quit";

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs > 0 {
        format!("{secs}s")
    } else {
        format!("{}ms", elapsed.as_millis())
    }
}

/// Hints or the current notice on the left; request progress and the
/// connectivity indicator on the right.
pub fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let left = state.notice.as_ref().map_or_else(
        || Span::styled(HINTS, Theme::muted()),
        |notice| Span::styled(notice.clone(), Theme::off_white()),
    );
    let left_line = Line::from(vec![Span::raw(" "), left]);

    let mut right = Vec::new();
    if state.loading {
        let frames = Spinners::BRAILLE;
        let spinner = frames[state.spinner_frame % frames.len()];
        let elapsed = state
            .elapsed()
            .map(|d| format!(" {}", format_elapsed(d)))
            .unwrap_or_default();
        right.push(Span::styled(format!("{spinner} Sending{elapsed}"), Theme::warning()));
        right.push(Span::raw("  "));
    }
    right.push(Span::styled(BoxChars::DOT, Theme::connectivity(state.connectivity)));
    right.push(Span::raw(" "));
    right.push(Span::styled(state.connectivity.label(), Theme::muted()));
    right.push(Span::raw(" "));
    let right_line = Line::from(right);

    let right_width = (right_line.width() as u16).min(area.width);
    let right_x = area.x + area.width.saturating_sub(right_width);
    let buf = frame.buffer_mut();
    buf.set_line(
        area.x,
        area.y,
        &left_line,
        area.width.saturating_sub(right_width + 1),
    );
    buf.set_line(right_x, area.y, &right_line, right_width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Connectivity;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn status_row(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).expect("terminal");
        terminal
            .draw(|f| render_status(f, f.area(), state))
            .expect("draw");
        let buf = terminal.backend().buffer();
        (0..80).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn idle_shows_hints_and_connectivity() {
        let mut state = AppState::new();
        state.connectivity = Connectivity::Online;

        let row = status_row(&state);
        assert!(row.contains("/help"));
        assert!(row.contains("● Online"));
        assert!(!row.contains("Sending"));
    }

    #[test]
    fn loading_shows_spinner() {
        let mut state = AppState::new();
        state.set_loading(true);

        let row = status_row(&state);
        assert!(row.contains("Sending"));
        assert!(row.contains("Checking"));
    }

    #[test]
    fn notice_replaces_hints() {
        let mut state = AppState::new();
        state.connectivity = Connectivity::Offline;
        state.set_notice("hello there");

        let row = status_row(&state);
        assert!(row.contains("hello there"));
        assert!(row.contains("Offline"));
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(Duration::from_millis(250)), "250ms");
        assert_eq!(format_elapsed(Duration::from_secs(3)), "3s");
    }
}

use ratatui::layout::{Constraint, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const INPUT_HEIGHT: u16 = 4;
const STATUS_HEIGHT: u16 = 1;

pub struct LayoutAreas {
    pub header: Rect,
    pub transcript: Rect,
    pub input: Rect,
    pub status: Rect,
}

#[must_use]
pub fn calculate_layout(area: Rect) -> LayoutAreas {
    let [header, transcript, input, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(area);

    LayoutAreas {
        header,
        transcript,
        input,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_stack_top_to_bottom() {
        let layout = calculate_layout(Rect::new(0, 0, 100, 40));

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.input.height, INPUT_HEIGHT);
        assert_eq!(layout.status.height, STATUS_HEIGHT);
        assert_eq!(
            layout.transcript.height,
            40 - HEADER_HEIGHT - INPUT_HEIGHT - STATUS_HEIGHT
        );
        assert_eq!(layout.status.y, 39);
    }

    #[test]
    fn small_terminal_keeps_a_transcript_row() {
        let layout = calculate_layout(Rect::new(0, 0, 80, 10));
        assert!(layout.transcript.height > 0);
    }
}

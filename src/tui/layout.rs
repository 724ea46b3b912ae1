// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Body (fill)                                       |
// |   in progress: Question (fill) over Answer (3)    |
// |   complete:    completion screen                  |
// +--------------------------------------------------+
// | Toast Line (1 row)                                |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: app name, progress counter, quiz state.
    pub status_bar: Rect,
    /// Middle section: question + answer input, or the completion screen.
    pub body: Rect,
    /// Row above the help bar: transient outcome notifications.
    pub toast_line: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the screen layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | body(fill) | toast(1) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(8),    // body
            Constraint::Length(1), // toast line
            Constraint::Length(1), // help bar
        ])
        .split(area);

    AppLayout {
        status_bar: vertical[0],
        body: vertical[1],
        toast_line: vertical[2],
        help_bar: vertical[3],
    }
}

/// Split the body into the question card and the answer input field.
pub fn split_body(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // question card
            Constraint::Length(3), // answer input (bordered single line)
        ])
        .split(area);
    (rows[0], rows[1])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// A reasonable terminal size for testing.
    fn test_area() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn layout_all_rects_nonzero() {
        let layout = build_layout(test_area());
        let rects = [
            ("status_bar", layout.status_bar),
            ("body", layout.body),
            ("toast_line", layout.toast_line),
            ("help_bar", layout.help_bar),
        ];
        for (name, rect) in &rects {
            assert!(
                rect.width > 0 && rect.height > 0,
                "{} has zero area: {:?}",
                name,
                rect
            );
        }
    }

    #[test]
    fn layout_single_row_bars() {
        let layout = build_layout(test_area());
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.toast_line.height, 1);
        assert_eq!(layout.help_bar.height, 1);
    }

    #[test]
    fn layout_zones_stack_vertically() {
        let layout = build_layout(test_area());
        assert!(layout.status_bar.y < layout.body.y);
        assert!(layout.body.y < layout.toast_line.y);
        assert!(layout.toast_line.y < layout.help_bar.y);
    }

    #[test]
    fn layout_fits_within_area() {
        let area = test_area();
        let layout = build_layout(area);
        for rect in [layout.status_bar, layout.body, layout.toast_line, layout.help_bar] {
            assert!(rect.x + rect.width <= area.width);
            assert!(rect.y + rect.height <= area.height);
        }
    }

    #[test]
    fn split_body_answer_is_three_rows() {
        let layout = build_layout(test_area());
        let (question, answer) = split_body(layout.body);
        assert_eq!(answer.height, 3, "Answer input should be exactly 3 rows");
        assert!(question.height >= 5);
        assert!(question.y < answer.y, "Question should sit above the answer input");
    }

    #[test]
    fn layout_small_terminal_still_valid() {
        // Minimum viable terminal size
        let area = Rect::new(0, 0, 40, 12);
        let layout = build_layout(area);
        let (question, answer) = split_body(layout.body);
        for rect in [layout.status_bar, question, answer, layout.toast_line, layout.help_bar] {
            assert!(
                rect.width > 0 && rect.height > 0,
                "Small terminal: rect {:?} has zero area",
                rect
            );
        }
    }
}

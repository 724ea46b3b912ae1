// Toast widget: the transient outcome notification line.
//
// A toast is armed by the render loop when a `UiUpdate::Toast` arrives and
// cleared by the render tick once its deadline passes. When no toast is
// active the line is blank.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::Toast;
use crate::tui::ViewState;

/// Render the toast line into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let line = match &state.toast {
        Some(active) => Line::from(vec![Span::styled(
            format!(" {}", active.toast.message()),
            Style::default()
                .fg(toast_color(active.toast))
                .add_modifier(Modifier::BOLD),
        )]),
        None => Line::default(),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Color for each outcome kind.
pub fn toast_color(toast: Toast) -> Color {
    match toast {
        Toast::EmptyInput => Color::Yellow,
        Toast::Incorrect => Color::Red,
        Toast::Correct => Color::Green,
        Toast::QuizComplete => Color::Cyan,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

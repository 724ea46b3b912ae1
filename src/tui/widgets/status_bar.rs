// Status bar widget: app name, progress counter, quiz state indicator.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [app name] [answered counter] [state indicator]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = Vec::new();

    spans.push(Span::styled(
        " Flashcard Quiz ",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("| ", Style::default().fg(Color::Gray)));

    spans.push(Span::styled(
        format!("Answered {}/{}", state.answered, state.total),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));

    let (label, color) = state_indicator(state.complete);
    spans.push(Span::styled(label, Style::default().fg(color)));

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Return the quiz state label and its color.
pub fn state_indicator(complete: bool) -> (&'static str, Color) {
    if complete {
        ("Complete", Color::Green)
    } else {
        ("In progress", Color::Yellow)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

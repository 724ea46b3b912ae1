// Completion screen widget: shown once every card has been answered.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the completion screen into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    // Push the headline roughly to the vertical center of the box.
    let top_padding = (area.height.saturating_sub(5) / 2) as usize;

    let mut lines: Vec<Line> = std::iter::repeat_with(Line::default)
        .take(top_padding)
        .collect();
    lines.push(Line::from(Span::styled(
        "Quiz Complete!",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    lines.push(Line::from(summary_line(state.total)));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press r to restart or q to quit",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Flashcard Quiz"));
    frame.render_widget(paragraph, area);
}

/// Summary text, e.g. "You answered all 4 cards."
pub fn summary_line(total: usize) -> String {
    if total == 1 {
        "You answered the only card.".to_string()
    } else {
        format!("You answered all {} cards.", total)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

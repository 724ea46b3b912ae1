// Answer input widget: the draft answer with a block cursor.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the answer input field into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let line = Line::from(vec![
        Span::raw(state.draft.clone()),
        Span::styled("█", Style::default().fg(Color::Gray)),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Your Answer"),
    );
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

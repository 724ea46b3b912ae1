// Question card widget: the current flashcard question in a bordered box.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the question card into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let question = state.question.as_deref().unwrap_or("");

    let paragraph = Paragraph::new(question)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(card_title(state.answered, state.total)),
        );
    frame.render_widget(paragraph, area);
}

/// Title of the card border, e.g. "Question 2/4".
pub fn card_title(answered: usize, total: usize) -> String {
    format!("Question {}/{}", answered + 1, total)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

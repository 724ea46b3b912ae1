// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages for the app
// orchestrator. Answer editing mutates the local draft echo immediately
// and forwards the full new text as an EditDraft intent; the engine owns
// the authoritative draft.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::ViewState;
use crate::protocol::UserCommand;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to
/// the app orchestrator. Returns `None` when the key press was ignored.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.complete {
        return handle_complete_screen(key_event);
    }

    // Answering mode: capture printable characters into the draft
    match key_event.code {
        KeyCode::Char(c) => {
            view_state.draft.push(c);
            Some(UserCommand::EditDraft(view_state.draft.clone()))
        }
        KeyCode::Backspace => {
            if view_state.draft.pop().is_some() {
                Some(UserCommand::EditDraft(view_state.draft.clone()))
            } else {
                None
            }
        }
        KeyCode::Esc => {
            if view_state.draft.is_empty() {
                None
            } else {
                view_state.draft.clear();
                Some(UserCommand::EditDraft(String::new()))
            }
        }
        KeyCode::Enter => Some(UserCommand::Submit),
        _ => None,
    }
}

/// Key dispatch on the completion screen: restart or quit only.
fn handle_complete_screen(key_event: KeyEvent) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(UserCommand::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(UserCommand::Quit),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

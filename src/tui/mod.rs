// TUI: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the quiz snapshot pushed by the
// app orchestrator over an mpsc channel, plus the currently armed toast.
// It applies `UiUpdate` messages to `ViewState` and re-renders on a fixed
// tick; the same tick expires toasts. Dropping or superseding a toast has
// no effect on quiz progression.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::config::UiConfig;
use crate::protocol::{QuizSnapshot, Toast, UiUpdate, UserCommand};

use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// A toast currently on screen, with its dismissal deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    pub toast: Toast,
    pub expires_at: Instant,
}

/// TUI-local state that mirrors the quiz state for rendering.
///
/// Updated incrementally via `UiUpdate` messages from the app
/// orchestrator. `render_frame` reads this struct to draw the screen.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// The question currently being asked, `None` when complete.
    pub question: Option<String>,
    /// The user's in-progress answer text (local echo, confirmed by
    /// snapshots).
    pub draft: String,
    /// Number of cards answered so far.
    pub answered: usize,
    /// Total cards in the deck.
    pub total: usize,
    /// Whether the quiz has reached the terminal state.
    pub complete: bool,
    /// The toast currently on screen, if any.
    pub toast: Option<ActiveToast>,
}

impl ViewState {
    /// Apply a quiz snapshot from the app orchestrator.
    pub fn apply_snapshot(&mut self, snapshot: QuizSnapshot) {
        self.question = snapshot.question;
        self.draft = snapshot.draft;
        self.answered = snapshot.answered;
        self.total = snapshot.total;
        self.complete = snapshot.complete;
    }

    /// Arm a toast. A newer toast supersedes whatever is on screen.
    pub fn show_toast(&mut self, toast: Toast, now: Instant, ttl: Duration) {
        self.toast = Some(ActiveToast {
            toast,
            expires_at: now + ttl,
        });
    }

    /// Clear the toast once its deadline has passed.
    pub fn expire_toast(&mut self, now: Instant) {
        if let Some(ref active) = self.toast {
            if now >= active.expires_at {
                self.toast = None;
            }
        }
    }
}

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate, now: Instant, toast_ttl: Duration) {
    match update {
        UiUpdate::Snapshot(snapshot) => {
            state.apply_snapshot(*snapshot);
        }
        UiUpdate::Toast(toast) => {
            state.show_toast(toast, now, toast_ttl);
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);

    if state.complete {
        widgets::complete::render(frame, layout.body, state);
    } else {
        let (question, answer) = layout::split_body(layout.body);
        widgets::question::render(frame, question, state);
        widgets::answer_input::render(frame, answer, state);
    }

    widgets::toast::render(frame, layout.toast_line, state);
    render_help_bar(frame, &layout, state);
}

fn render_help_bar(frame: &mut Frame, layout: &layout::AppLayout, state: &ViewState) {
    let text = if state.complete {
        " r:Restart | q:Quit"
    } else {
        " Type your answer | Enter:Submit | Esc:Clear | Ctrl+C:Quit"
    };
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// This is the main entry point for the terminal UI. It:
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
    ui: UiConfig,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal on panic; chain the original hook after ours.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();
    let toast_ttl = ui.toast_duration();

    let mut render_tick = tokio::time::interval(ui.render_tick());
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            // UI updates from the app orchestrator
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => {
                        apply_ui_update(&mut view_state, ui_update, Instant::now(), toast_ttl);
                    }
                    None => {
                        // Channel closed: app is shutting down
                        break;
                    }
                }
            }

            // Keyboard input
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quitting = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quitting {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Resize and other events: the next tick redraws anyway
                    }
                    Some(Err(_)) | None => {
                        break;
                    }
                }
            }

            // Render tick (also expires toasts)
            _ = render_tick.tick() => {
                view_state.expire_toast(Instant::now());
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

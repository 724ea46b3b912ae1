// Application state and orchestration logic.
//
// Owns the `QuizState` and runs the event loop that applies user commands
// from the TUI to the quiz engine, then pushes snapshots and one-shot
// toast notifications back to the TUI render loop.

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::Config;
use crate::protocol::{QuizSnapshot, Toast, UiUpdate, UserCommand};
use crate::quiz::engine::{Outcome, QuizState};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub quiz: QuizState,
}

impl AppState {
    pub fn new(config: Config, quiz: QuizState) -> Self {
        AppState { config, quiz }
    }

    /// Build a `QuizSnapshot` from the current quiz state.
    pub fn build_snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            question: self.quiz.current_card().map(|c| c.question.clone()),
            draft: self.quiz.draft_answer().to_string(),
            answered: self.quiz.position(),
            total: self.quiz.total(),
            complete: self.quiz.is_complete(),
        }
    }

    /// Apply a submission attempt and classify it for presentation.
    ///
    /// Returns the toasts to show, in order. A correct answer on the last
    /// card produces `Correct` followed by `QuizComplete`, mirroring the
    /// transition into the terminal state. Submitting while already
    /// complete returns no toasts (the engine treats it as a no-op).
    pub fn apply_submit(&mut self) -> Vec<Toast> {
        match self.quiz.submit() {
            None => {
                debug!("Submit ignored: quiz already complete");
                Vec::new()
            }
            Some(Outcome::EmptyInput) => vec![Toast::EmptyInput],
            Some(Outcome::Incorrect) => vec![Toast::Incorrect],
            Some(Outcome::Correct) => {
                if self.quiz.is_complete() {
                    info!("Quiz complete ({} cards)", self.quiz.total());
                    vec![Toast::Correct, Toast::QuizComplete]
                } else {
                    vec![Toast::Correct]
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the main application event loop.
///
/// Consumes `UserCommand`s from the TUI, applies them to the quiz engine,
/// and pushes `UiUpdate`s through `ui_tx` for the TUI render loop. Sends
/// an initial snapshot before processing any command so the TUI has
/// content to draw on its first frame.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!(
        "Application event loop started ({} cards)",
        state.quiz.total()
    );

    let _ = ui_tx
        .send(UiUpdate::Snapshot(Box::new(state.build_snapshot())))
        .await;

    loop {
        match cmd_rx.recv().await {
            Some(UserCommand::Quit) => {
                info!("Quit command received, shutting down");
                break;
            }
            Some(cmd) => {
                handle_user_command(&mut state, cmd, &ui_tx).await;
            }
            None => {
                info!("Command channel closed, shutting down");
                break;
            }
        }
    }

    info!("Application event loop exiting");
    Ok(())
}

/// Handle a single user command from the TUI.
async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match cmd {
        UserCommand::EditDraft(text) => {
            state.quiz.update_draft(text);
            let _ = ui_tx
                .send(UiUpdate::Snapshot(Box::new(state.build_snapshot())))
                .await;
        }
        UserCommand::Submit => {
            let toasts = state.apply_submit();
            let _ = ui_tx
                .send(UiUpdate::Snapshot(Box::new(state.build_snapshot())))
                .await;
            for toast in toasts {
                debug!("Toast: {}", toast.message());
                let _ = ui_tx.send(UiUpdate::Toast(toast)).await;
            }
        }
        UserCommand::Restart => {
            info!("Restarting quiz");
            state.quiz.restart();
            let _ = ui_tx
                .send(UiUpdate::Snapshot(Box::new(state.build_snapshot())))
                .await;
        }
        UserCommand::Quit => {
            // Handled in the main loop
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::card::Flashcard;

    fn test_state() -> AppState {
        let cards = vec![
            Flashcard::new("What is 2 + 2?", "4"),
            Flashcard::new("What is the capital of France?", "Paris"),
        ];
        AppState::new(Config::default(), QuizState::new(cards))
    }

    #[test]
    fn snapshot_reflects_initial_state() {
        let state = test_state();
        let snap = state.build_snapshot();
        assert_eq!(snap.question.as_deref(), Some("What is 2 + 2?"));
        assert_eq!(snap.draft, "");
        assert_eq!(snap.answered, 0);
        assert_eq!(snap.total, 2);
        assert!(!snap.complete);
    }

    #[test]
    fn snapshot_has_no_question_when_complete() {
        let mut state = test_state();
        state.quiz.update_draft("4".to_string());
        state.quiz.submit();
        state.quiz.update_draft("paris".to_string());
        state.quiz.submit();

        let snap = state.build_snapshot();
        assert!(snap.question.is_none());
        assert!(snap.complete);
        assert_eq!(snap.answered, 2);
    }

    #[test]
    fn apply_submit_empty_input() {
        let mut state = test_state();
        assert_eq!(state.apply_submit(), vec![Toast::EmptyInput]);
        assert_eq!(state.quiz.position(), 0);
    }

    #[test]
    fn apply_submit_incorrect() {
        let mut state = test_state();
        state.quiz.update_draft("5".to_string());
        assert_eq!(state.apply_submit(), vec![Toast::Incorrect]);
        assert_eq!(state.quiz.draft_answer(), "5");
    }

    #[test]
    fn apply_submit_correct_mid_quiz() {
        let mut state = test_state();
        state.quiz.update_draft("4".to_string());
        assert_eq!(state.apply_submit(), vec![Toast::Correct]);
        assert_eq!(state.quiz.position(), 1);
    }

    #[test]
    fn apply_submit_final_card_adds_complete_toast() {
        let mut state = test_state();
        state.quiz.update_draft("4".to_string());
        state.apply_submit();
        state.quiz.update_draft(" Paris ".to_string());
        assert_eq!(
            state.apply_submit(),
            vec![Toast::Correct, Toast::QuizComplete]
        );
        assert!(state.quiz.is_complete());
    }

    #[test]
    fn apply_submit_after_complete_yields_nothing() {
        let mut state = test_state();
        state.quiz.update_draft("4".to_string());
        state.apply_submit();
        state.quiz.update_draft("paris".to_string());
        state.apply_submit();

        state.quiz.update_draft("extra".to_string());
        assert!(state.apply_submit().is_empty());
    }

    #[tokio::test]
    async fn run_sends_initial_snapshot_and_quits() {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (ui_tx, mut ui_rx) = mpsc::channel(16);
        let handle = tokio::spawn(run(cmd_rx, ui_tx, test_state()));

        match ui_rx.recv().await {
            Some(UiUpdate::Snapshot(snap)) => {
                assert_eq!(snap.answered, 0);
                assert!(!snap.complete);
            }
            other => panic!("expected initial snapshot, got {:?}", other),
        }

        cmd_tx.send(UserCommand::Quit).await.unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn run_emits_snapshot_then_toast_on_submit() {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (ui_tx, mut ui_rx) = mpsc::channel(16);
        let handle = tokio::spawn(run(cmd_rx, ui_tx, test_state()));

        // Skip the initial snapshot.
        let _ = ui_rx.recv().await.unwrap();

        cmd_tx
            .send(UserCommand::EditDraft("wrong".to_string()))
            .await
            .unwrap();
        match ui_rx.recv().await.unwrap() {
            UiUpdate::Snapshot(snap) => assert_eq!(snap.draft, "wrong"),
            other => panic!("expected snapshot, got {:?}", other),
        }

        cmd_tx.send(UserCommand::Submit).await.unwrap();
        match ui_rx.recv().await.unwrap() {
            UiUpdate::Snapshot(snap) => {
                assert_eq!(snap.answered, 0);
                assert_eq!(snap.draft, "wrong");
            }
            other => panic!("expected snapshot, got {:?}", other),
        }
        assert_eq!(ui_rx.recv().await.unwrap(), UiUpdate::Toast(Toast::Incorrect));

        cmd_tx.send(UserCommand::Quit).await.unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn run_exits_when_command_channel_closes() {
        let (cmd_tx, cmd_rx) = mpsc::channel::<UserCommand>(16);
        let (ui_tx, mut ui_rx) = mpsc::channel(16);
        let handle = tokio::spawn(run(cmd_rx, ui_tx, test_state()));

        let _ = ui_rx.recv().await.unwrap();
        drop(cmd_tx);
        handle.await.unwrap().unwrap();
    }
}

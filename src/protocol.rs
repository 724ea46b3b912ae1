// Message types crossing the app/TUI boundary.
//
// The TUI never touches `QuizState` directly: it sends `UserCommand`
// intents to the app orchestrator and receives `UiUpdate` messages back.
// Snapshots are boxed to keep the enum small on the channel.

/// User intents sent from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Replace the draft answer with the given text.
    EditDraft(String),
    /// Check the current draft against the current card.
    Submit,
    /// Reset the quiz to the first card.
    Restart,
    /// Shut down the application.
    Quit,
}

/// Updates pushed from the app orchestrator to the TUI render loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    /// The full quiz view after a state transition.
    Snapshot(Box<QuizSnapshot>),
    /// A one-shot transient notification. The TUI consumes it at most
    /// once and auto-dismisses it; the orchestrator never queues toasts.
    Toast(Toast),
}

/// Read-only view of the quiz state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSnapshot {
    /// The question currently being asked, `None` when complete.
    pub question: Option<String>,
    /// The user's in-progress answer text.
    pub draft: String,
    /// Number of cards answered so far.
    pub answered: usize,
    /// Total cards in the deck.
    pub total: usize,
    /// Whether the quiz has reached the terminal state.
    pub complete: bool,
}

/// Transient outcome notifications shown once by the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toast {
    EmptyInput,
    Incorrect,
    Correct,
    QuizComplete,
}

impl Toast {
    /// The message text shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Toast::EmptyInput => "Please enter an answer.",
            Toast::Incorrect => "Incorrect, try again.",
            Toast::Correct => "Correct!",
            Toast::QuizComplete => "Quiz Complete!",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

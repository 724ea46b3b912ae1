// Quiz progression state machine.
//
// `QuizState` owns the card list, the current position, and the user's
// in-progress draft answer. Every operation is a synchronous state
// transform; there are no fatal errors. `EmptyInput` and `Incorrect` are
// ordinary outcome values, not failures.
//
// Two logical states exist: in progress (`position < cards.len()`) and
// complete (`position == cards.len()`). The only way out of the complete
// state is `restart`.

use crate::quiz::card::Flashcard;

/// Result classification of a single submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The draft trimmed to the empty string; nothing was checked.
    EmptyInput,
    /// The draft did not match the current card's answer.
    Incorrect,
    /// The draft matched; the quiz advanced by one card.
    Correct,
}

/// The complete quiz state: cards, position, and draft answer.
///
/// Invariant: `position <= cards.len()`. Equality denotes the terminal
/// quiz-complete state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    cards: Vec<Flashcard>,
    position: usize,
    draft_answer: String,
}

/// Normalize an answer for comparison: trim surrounding whitespace, then
/// lowercase.
fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

impl QuizState {
    /// Create a fresh quiz over the given cards, positioned at the first
    /// card with an empty draft.
    ///
    /// An empty card list is allowed: the quiz starts already complete.
    pub fn new(cards: Vec<Flashcard>) -> Self {
        QuizState {
            cards,
            position: 0,
            draft_answer: String::new(),
        }
    }

    /// Replace the draft answer verbatim. No normalization happens here;
    /// trimming and case folding are applied only at submission time.
    pub fn update_draft(&mut self, text: String) {
        self.draft_answer = text;
    }

    /// Check the current draft against the current card.
    ///
    /// Returns `None` when the quiz is already complete (defensive no-op;
    /// the presentation layer is expected to prevent this). Otherwise
    /// returns the outcome:
    ///
    /// - `EmptyInput`: the draft trims to empty; state unchanged.
    /// - `Correct`: position advances by one and the draft is cleared.
    /// - `Incorrect`: state unchanged. The draft is deliberately kept so
    ///   the user can edit their attempt instead of retyping it.
    pub fn submit(&mut self) -> Option<Outcome> {
        let card = self.cards.get(self.position)?;

        let trimmed = self.draft_answer.trim();
        if trimmed.is_empty() {
            return Some(Outcome::EmptyInput);
        }

        if normalize(trimmed) == normalize(&card.answer) {
            self.position += 1;
            self.draft_answer.clear();
            Some(Outcome::Correct)
        } else {
            Some(Outcome::Incorrect)
        }
    }

    /// Reset to the first card with an empty draft. Valid from any state;
    /// this is the only transition out of the complete state.
    pub fn restart(&mut self) {
        self.position = 0;
        self.draft_answer.clear();
    }

    /// True once every card has been answered correctly in sequence.
    pub fn is_complete(&self) -> bool {
        self.position == self.cards.len()
    }

    /// The card currently being asked, or `None` when complete.
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.cards.get(self.position)
    }

    /// Number of cards answered so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of cards in the deck.
    pub fn total(&self) -> usize {
        self.cards.len()
    }

    /// The user's in-progress answer text.
    pub fn draft_answer(&self) -> &str {
        &self.draft_answer
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// Flashcard value type and the built-in deck.
//
// The deck is fixed at startup and never mutated; loading question sets
// from files or the network is deliberately unsupported.

/// A single question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Flashcard {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The built-in deck, in presentation order.
pub fn builtin_deck() -> Vec<Flashcard> {
    vec![
        Flashcard::new("What is 2 + 2?", "4"),
        Flashcard::new("What is the color of the sky?", "Blue"),
        Flashcard::new("What is the capital of France?", "Paris"),
        Flashcard::new("Who is the best professor in the world?", "Ronald Czik"),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_is_nonempty() {
        let deck = builtin_deck();
        assert!(!deck.is_empty());
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn builtin_deck_cards_have_content() {
        for card in builtin_deck() {
            assert!(!card.question.trim().is_empty());
            assert!(!card.answer.trim().is_empty());
        }
    }

    #[test]
    fn builtin_deck_first_card() {
        let deck = builtin_deck();
        assert_eq!(deck[0].question, "What is 2 + 2?");
        assert_eq!(deck[0].answer, "4");
    }
}

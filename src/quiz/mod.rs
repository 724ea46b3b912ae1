// Quiz domain: the flashcard type, the built-in deck, and the progression
// state machine.

pub mod card;
pub mod engine;

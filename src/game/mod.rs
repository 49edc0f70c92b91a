//! Game module - counting round driven by confirmed finger counts
//!
//! Speech recognition, audio and picture rendering stay in JavaScript;
//! this module only tracks where the round is and what to prompt.

mod difficulty;
mod round;

pub use difficulty::Difficulty;
pub use round::{AnswerOutcome, GamePhase, GameRound, Prompt};

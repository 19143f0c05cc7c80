use serde::Serialize;

use crate::domain::symbol::Symbol;

/// Classification of a finished round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Correct,
    Incorrect,
    /// Either side had no identified symbol.
    Inconclusive,
}

impl Outcome {
    /// Text the presentation layer shows over the camera feed.
    pub fn display_text(self) -> &'static str {
        match self {
            Outcome::Correct => "CORRECT",
            Outcome::Incorrect => "TRY AGAIN",
            Outcome::Inconclusive => "INCONCLUSIVE",
        }
    }
}

/// Compare what the learner signed (`observed`) against what was asked (`target`).
pub fn evaluate(target: &Symbol, observed: &Symbol) -> Outcome {
    if target.is_unknown() || observed.is_unknown() {
        return Outcome::Inconclusive;
    }
    if target == observed {
        Outcome::Correct
    } else {
        Outcome::Incorrect
    }
}

use serde::Serialize;

use crate::domain::Outcome;
use crate::session::presentation::PlayPrompt;
use crate::session::state::RoundState;

/// Everything a presentation layer needs after one applied event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub state: RoundState,
    pub target: String,
    pub observed: String,
    pub countdown_remaining: u32,
    pub countdown_total: u32,
    pub last_outcome: Option<Outcome>,
    /// `Outcome::display_text` of `last_outcome`, if any.
    pub result_text: Option<&'static str>,
    pub play_prompt: PlayPrompt,
    pub instruction: String,
    /// Number of times the session has entered Finished.
    pub generation: u64,
}

impl SessionSnapshot {
    pub fn play_label(&self) -> &'static str {
        self.play_prompt.label()
    }

    pub fn is_finished(&self) -> bool {
        self.state == RoundState::Finished
    }
}

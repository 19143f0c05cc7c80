//! Presentation hints derived from session state.
//!
//! The session does not render anything; these are the strings and flags a
//! presentation layer needs to label its controls.

use serde::Serialize;

use crate::domain::Symbol;
use crate::session::state::RoundState;

const HOLD_INSTRUCTION: &str = "Hold the sign during the count down";
const MOTION_SUFFIX: &str = " at the end position of the sign";

/// Label of the start button.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayPrompt {
    CheckSign,
    TryAgain,
}

impl PlayPrompt {
    pub fn label(self) -> &'static str {
        match self {
            PlayPrompt::CheckSign => "Check sign",
            PlayPrompt::TryAgain => "Try again",
        }
    }
}

/// Flags reported by the recognizer pipeline.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Readiness {
    pub hand_in_frame: bool,
    pub gathering_observations: bool,
}

impl Readiness {
    pub fn ready() -> Self {
        Self {
            hand_in_frame: true,
            gathering_observations: true,
        }
    }

    pub fn is_ready(self) -> bool {
        self.hand_in_frame && self.gathering_observations
    }
}

/// Text shown between the target carousel and the camera.
pub fn instruction(state: RoundState, countdown_remaining: u32, target: &Symbol) -> String {
    match state {
        RoundState::Playing => countdown_remaining.to_string(),
        RoundState::NotPlaying | RoundState::Finished => {
            if target.requires_motion() {
                format!("{HOLD_INSTRUCTION}{MOTION_SUFFIX}")
            } else {
                HOLD_INSTRUCTION.to_string()
            }
        }
    }
}
